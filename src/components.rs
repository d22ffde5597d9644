//! Pure Yew view components for the life numbers UI.
//!
//! This module contains stateless components that render based on props,
//! making them easy to test and reuse.

use crate::config::SliderRange;
use crate::hooks::{BaseSliders, SliderInput};
use life_numbers::{format_metric_value, Gender, LifeStatsResult, MetricUnit};
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Renders the "Your Life Overview" list, one `label: value` line per metric.
pub fn render_results(title: &str, result: &LifeStatsResult) -> Html {
    if result.is_empty() {
        return html! {
            <div class="results">
                <p class="no-results-message">{ "No results to display" }</p>
            </div>
        };
    }

    html! {
        <div class="results">
            <h3>{ title }</h3>
            <ul class="metric-list">
                { result.iter().map(|m| {
                    let value = format_metric_value(m.value);
                    let value = match m.unit {
                        MetricUnit::Percent => format!("{}%", value),
                        _ => value,
                    };
                    html! {
                        <li>
                            <strong>{ format!("{}:", m.label) }</strong>
                            { " " }{ value }
                        </li>
                    }
                }).collect::<Html>() }
            </ul>
        </div>
    }
}

/// Collapsible raw view of the results as JSON.
pub fn render_json(result: &LifeStatsResult) -> Html {
    match result.to_json_pretty() {
        Ok(json) => html! {
            <details class="raw-json">
                <summary>{ "Raw numbers" }</summary>
                <pre>{ json }</pre>
            </details>
        },
        Err(e) => {
            log::warn!("Could not serialize results: {}", e);
            html! {}
        }
    }
}

/// Slider with a live value readout and optional validation error.
#[derive(Properties, PartialEq)]
pub struct SliderFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub range: SliderRange,
    pub slider: SliderInput,
}

#[function_component(SliderField)]
pub fn slider_field(props: &SliderFieldProps) -> Html {
    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{ props.label.clone() }</label>
            <div class="slider-with-value">
                <input type="range"
                    id={props.id.clone()}
                    min={props.range.min.to_string()}
                    max={props.range.max.to_string()}
                    step="1"
                    value={props.slider.value.to_string()}
                    oninput={props.slider.on_input.clone()}
                />
                <span class="slider-value">{ props.slider.value }</span>
            </div>
            if let Some(ref err) = props.slider.error {
                <div class="input-error">{ err }</div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BaseSliderGroupProps {
    pub sliders: BaseSliders,
}

/// The six sliders both calculator versions share.
#[function_component(BaseSliderGroup)]
pub fn base_slider_group(props: &BaseSliderGroupProps) -> Html {
    use crate::config;
    let s = &props.sliders;
    html! {
        <>
            <SliderField id="age" label="Your Age" range={config::AGE} slider={s.age.clone()} />
            <SliderField id="work_hours" label="Hours Worked per Week"
                range={config::WORK_HOURS_PER_WEEK} slider={s.work_hours.clone()} />
            <SliderField id="sleep_hours" label="Hours Slept per Night"
                range={config::SLEEP_HOURS_PER_DAY} slider={s.sleep_hours.clone()} />
            <SliderField id="parent_age" label="Parent's Age"
                range={config::PARENT_AGE} slider={s.parent_age.clone()} />
            <SliderField id="visits" label="Visits to Parents per Year"
                range={config::VISITS_PER_YEAR} slider={s.visits_per_year.clone()} />
            <SliderField id="kid_age" label="Kid's Age (if any, else leave at 0)"
                range={config::KID_AGE} slider={s.kid_age.clone()} />
        </>
    }
}

/// Country dropdown, listed in table order.
#[derive(Properties, PartialEq)]
pub struct CountrySelectProps {
    pub countries: Rc<Vec<String>>,
    pub selected: AttrValue,
    pub onchange: Callback<String>,
}

#[function_component(CountrySelect)]
pub fn country_select(props: &CountrySelectProps) -> Html {
    let onchange = {
        let cb = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cb.emit(select.value());
        })
    };

    html! {
        <div class="form-group">
            <label for="country">{ "Your Country" }</label>
            <select id="country" {onchange}>
                { props.countries.iter().map(|c| {
                    html! {
                        <option value={c.clone()} selected={*c == *props.selected}>{ c }</option>
                    }
                }).collect::<Html>() }
            </select>
        </div>
    }
}

/// Male / Female radio buttons.
#[derive(Properties, PartialEq)]
pub struct GenderRadioProps {
    pub selected: Gender,
    pub onchange: Callback<Gender>,
}

#[function_component(GenderRadio)]
pub fn gender_radio(props: &GenderRadioProps) -> Html {
    html! {
        <div class="form-group radio-group">
            <span class="radio-label">{ "Gender" }</span>
            { Gender::ALL.iter().map(|&g| {
                let onchange = {
                    let cb = props.onchange.clone();
                    Callback::from(move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        if input.checked() {
                            cb.emit(g);
                        }
                    })
                };
                html! {
                    <label>
                        <input type="radio"
                            name="gender"
                            value={g.as_str()}
                            checked={props.selected == g}
                            {onchange}
                        />
                        { g.as_str() }
                    </label>
                }
            }).collect::<Html>() }
        </div>
    }
}

/// Canvas placeholder filled in by the chart helpers after render.
#[derive(Properties, PartialEq)]
pub struct ChartCanvasProps {
    pub id: AttrValue,
}

#[function_component(ChartCanvas)]
pub fn chart_canvas(props: &ChartCanvasProps) -> Html {
    html! {
        <div class="chart-container">
            <canvas id={props.id.clone()}></canvas>
        </div>
    }
}
