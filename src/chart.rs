//! JavaScript interop for Chart.js visualization.
//! Provides Rust bindings to chart helper functions defined in chart_helpers.js.

use crate::utils::ChartSlice;
use log::warn;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/chart_helpers.js")]
extern "C" {
    #[wasm_bindgen(js_name = renderPieChart)]
    fn render_pie_chart(canvas_id: &str, title: &str, slices: JsValue);

    #[wasm_bindgen(js_name = renderBarChart)]
    fn render_bar_chart(canvas_id: &str, title: &str, slices: JsValue);

    #[wasm_bindgen(js_name = destroyChart)]
    pub fn destroy_chart(canvas_id: &str);
}

fn to_js(slices: &[ChartSlice]) -> Option<JsValue> {
    match serde_wasm_bindgen::to_value(slices) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Failed to convert chart data: {}", e);
            None
        }
    }
}

/// Draw (or redraw) a pie chart into the canvas with the given id.
pub fn draw_pie(canvas_id: &str, title: &str, slices: &[ChartSlice]) {
    if let Some(data) = to_js(slices) {
        render_pie_chart(canvas_id, title, data);
    }
}

/// Draw (or redraw) a bar chart into the canvas with the given id.
pub fn draw_bars(canvas_id: &str, title: &str, slices: &[ChartSlice]) {
    if let Some(data) = to_js(slices) {
        render_bar_chart(canvas_id, title, data);
    }
}
