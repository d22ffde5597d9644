use crate::config::{self, SliderRange};
use crate::utils::validate_slider_input;
use life_numbers::ClassicProfile;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// State and callbacks for one bounded slider.
#[derive(Clone, PartialEq)]
pub struct SliderInput {
    /// The last accepted value.
    pub value: i32,
    /// Set when the raw input could not be accepted.
    pub error: Option<String>,
    /// Callback for the range input's `oninput` event.
    pub on_input: Callback<InputEvent>,
    /// Callback to programmatically set the value (clamped to the range).
    pub set_value: Callback<i32>,
}

/// Custom hook managing a slider value within `range`.
#[hook]
pub fn use_slider(range: SliderRange, initial_value: i32, field_name: &'static str) -> SliderInput {
    let value_handle = use_state(|| range.clamp(initial_value));
    let error_handle = use_state(|| None::<String>);

    let on_input = {
        let value_setter = value_handle.clone();
        let error_setter = error_handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match validate_slider_input(&input.value(), range, field_name) {
                Ok(v) => {
                    value_setter.set(v);
                    error_setter.set(None);
                }
                Err(msg) => error_setter.set(Some(msg)),
            }
        })
    };

    let set_value = {
        let value_setter = value_handle.clone();
        let error_setter = error_handle.clone();
        Callback::from(move |v: i32| {
            value_setter.set(range.clamp(v));
            error_setter.set(None);
        })
    };

    SliderInput {
        value: *value_handle,
        error: (*error_handle).clone(),
        on_input,
        set_value,
    }
}

/// Sliders shared by the classic and detailed calculators.
#[derive(Clone, PartialEq)]
pub struct BaseSliders {
    pub age: SliderInput,
    pub work_hours: SliderInput,
    pub sleep_hours: SliderInput,
    pub parent_age: SliderInput,
    pub visits_per_year: SliderInput,
    pub kid_age: SliderInput,
}

impl BaseSliders {
    pub fn to_profile(&self, country: &str) -> ClassicProfile {
        ClassicProfile {
            age: self.age.value,
            country: country.to_string(),
            work_hours_per_week: self.work_hours.value as f64,
            sleep_hours_per_day: self.sleep_hours.value as f64,
            parent_age: self.parent_age.value,
            visits_per_year: self.visits_per_year.value as f64,
            kid_age: self.kid_age.value,
        }
    }

    /// Put every slider back to its starting default.
    pub fn reset(&self) {
        self.age.set_value.emit(config::AGE.default);
        self.work_hours.set_value.emit(config::WORK_HOURS_PER_WEEK.default);
        self.sleep_hours.set_value.emit(config::SLEEP_HOURS_PER_DAY.default);
        self.parent_age.set_value.emit(config::PARENT_AGE.default);
        self.visits_per_year.set_value.emit(config::VISITS_PER_YEAR.default);
        self.kid_age.set_value.emit(config::KID_AGE.default);
    }
}

/// Shared sliders, starting from `saved` when a previous profile exists.
#[hook]
pub fn use_base_sliders(saved: Option<ClassicProfile>) -> BaseSliders {
    let start = |pick: fn(&ClassicProfile) -> i32, range: SliderRange| {
        saved.as_ref().map(pick).unwrap_or(range.default)
    };

    BaseSliders {
        age: use_slider(config::AGE, start(|p| p.age, config::AGE), "Age"),
        work_hours: use_slider(
            config::WORK_HOURS_PER_WEEK,
            start(|p| p.work_hours_per_week as i32, config::WORK_HOURS_PER_WEEK),
            "Work hours",
        ),
        sleep_hours: use_slider(
            config::SLEEP_HOURS_PER_DAY,
            start(|p| p.sleep_hours_per_day as i32, config::SLEEP_HOURS_PER_DAY),
            "Sleep hours",
        ),
        parent_age: use_slider(
            config::PARENT_AGE,
            start(|p| p.parent_age, config::PARENT_AGE),
            "Parent's age",
        ),
        visits_per_year: use_slider(
            config::VISITS_PER_YEAR,
            start(|p| p.visits_per_year as i32, config::VISITS_PER_YEAR),
            "Visits",
        ),
        kid_age: use_slider(config::KID_AGE, start(|p| p.kid_age, config::KID_AGE), "Kid's age"),
    }
}
