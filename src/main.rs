//! Main module for the life numbers calculator using Yew.
//! Wires UI components, state hooks, and chart side effects.

use life_numbers::{
    compute_classic, compute_detailed, ClassicStats, DetailedProfile, DetailedStats, Gender,
    LeisureHours, LifeExpectancyTable,
};
use std::rc::Rc;
use yew::prelude::*;

mod chart;
mod components;
mod config;
mod hooks;
mod session;
mod utils;

use chart::{destroy_chart, draw_bars, draw_pie};
use components::{
    render_json, render_results, BaseSliderGroup, ChartCanvas, CountrySelect, GenderRadio,
    SliderField,
};
use hooks::{use_base_sliders, use_slider};
use utils::{activity_years, classic_time_shares, life_progress_shares};

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

fn country_list() -> Rc<Vec<String>> {
    Rc::new(
        LifeExpectancyTable::builtin()
            .countries()
            .map(str::to_string)
            .collect(),
    )
}

fn first_country(countries: &[String]) -> String {
    countries.first().cloned().unwrap_or_default()
}

// ──────────────────────────────────────────────────────────────────────────────
// Classic calculator: recomputes on every slider change.

#[function_component(ClassicView)]
fn classic_view() -> Html {
    let countries = use_memo((), |_| country_list());
    let country = use_state(|| first_country(&countries));
    let sliders = use_base_sliders(None);

    let profile = sliders.to_profile(&country);
    let stats: ClassicStats = compute_classic(LifeExpectancyTable::builtin(), &profile);
    let result = stats.to_result();

    use_effect_with(stats, |stats| {
        match classic_time_shares(stats) {
            Some(shares) => draw_pie(config::CLASSIC_PIE_CANVAS, "Remaining Time", &shares),
            None => destroy_chart(config::CLASSIC_PIE_CANVAS),
        }
        || destroy_chart(config::CLASSIC_PIE_CANVAS)
    });

    let on_country = {
        let country = country.clone();
        Callback::from(move |c: String| country.set(c))
    };

    html! {
        <div class="calculator classic">
            <div class="inputs">
                <CountrySelect
                    countries={(*countries).clone()}
                    selected={(*country).clone()}
                    onchange={on_country}
                />
                <BaseSliderGroup sliders={sliders.clone()} />
            </div>
            <div class="results-area">
                { render_results("Your Life Overview", &result) }
                if stats.years_left > 0 {
                    <ChartCanvas id={config::CLASSIC_PIE_CANVAS} />
                } else {
                    <p class="no-chart">{ "No remaining time to chart." }</p>
                }
                { render_json(&result) }
            </div>
        </div>
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Detailed calculator: input page and results page sharing session state.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Page {
    Inputs,
    Results,
}

#[derive(Properties, PartialEq)]
struct DetailedInputsProps {
    on_submit: Callback<DetailedProfile>,
}

#[function_component(DetailedInputs)]
fn detailed_inputs(props: &DetailedInputsProps) -> Html {
    let saved = session::last_profile();
    let countries = use_memo((), |_| country_list());

    let country = use_state(|| {
        saved
            .as_ref()
            .map(|p| p.base.country.clone())
            .unwrap_or_else(|| first_country(&countries))
    });
    let gender = use_state(|| {
        saved
            .as_ref()
            .map(|p| p.gender)
            .unwrap_or(Gender::Male)
    });
    let sliders = use_base_sliders(saved.as_ref().map(|p| p.base.clone()));

    let leisure = saved
        .as_ref()
        .map(|p| p.leisure)
        .unwrap_or(LeisureHours {
            social_media_per_day: config::SOCIAL_MEDIA_HOURS_PER_DAY.default as f64,
            tv_per_day: config::TV_HOURS_PER_DAY.default as f64,
            exercise_per_week: config::EXERCISE_HOURS_PER_WEEK.default as f64,
            commute_per_day: config::COMMUTE_HOURS_PER_DAY.default as f64,
        });
    let social_media = use_slider(
        config::SOCIAL_MEDIA_HOURS_PER_DAY,
        leisure.social_media_per_day as i32,
        "Social media hours",
    );
    let tv = use_slider(config::TV_HOURS_PER_DAY, leisure.tv_per_day as i32, "TV hours");
    let exercise = use_slider(
        config::EXERCISE_HOURS_PER_WEEK,
        leisure.exercise_per_week as i32,
        "Exercise hours",
    );
    let commute = use_slider(
        config::COMMUTE_HOURS_PER_DAY,
        leisure.commute_per_day as i32,
        "Commute hours",
    );

    let on_country = {
        let country = country.clone();
        Callback::from(move |c: String| country.set(c))
    };
    let on_gender = {
        let gender = gender.clone();
        Callback::from(move |g: Gender| gender.set(g))
    };

    let on_submit = {
        let cb = props.on_submit.clone();
        let country = country.clone();
        let gender = gender.clone();
        let sliders = sliders.clone();
        let (social_media, tv, exercise, commute) = (
            social_media.value,
            tv.value,
            exercise.value,
            commute.value,
        );
        Callback::from(move |_: MouseEvent| {
            cb.emit(DetailedProfile {
                base: sliders.to_profile(&country),
                gender: *gender,
                leisure: LeisureHours {
                    social_media_per_day: social_media as f64,
                    tv_per_day: tv as f64,
                    exercise_per_week: exercise as f64,
                    commute_per_day: commute as f64,
                },
            });
        })
    };

    let on_reset = {
        let sliders = sliders.clone();
        let leisure_sliders = [
            (social_media.set_value.clone(), config::SOCIAL_MEDIA_HOURS_PER_DAY),
            (tv.set_value.clone(), config::TV_HOURS_PER_DAY),
            (exercise.set_value.clone(), config::EXERCISE_HOURS_PER_WEEK),
            (commute.set_value.clone(), config::COMMUTE_HOURS_PER_DAY),
        ];
        Callback::from(move |_: MouseEvent| {
            sliders.reset();
            for (set_value, range) in &leisure_sliders {
                set_value.emit(range.default);
            }
            session::clear();
        })
    };

    html! {
        <div class="calculator detailed inputs-page">
            <h3>{ "Your Details" }</h3>
            <CountrySelect
                countries={(*countries).clone()}
                selected={(*country).clone()}
                onchange={on_country}
            />
            <GenderRadio selected={*gender} onchange={on_gender} />
            <BaseSliderGroup sliders={sliders.clone()} />
            <SliderField id="social_media" label="Social Media (hours per day)"
                range={config::SOCIAL_MEDIA_HOURS_PER_DAY} slider={social_media} />
            <SliderField id="tv" label="TV (hours per day)"
                range={config::TV_HOURS_PER_DAY} slider={tv} />
            // Converted with the same per-day proportion as the other activities.
            <SliderField id="exercise" label="Exercise (hours per week)"
                range={config::EXERCISE_HOURS_PER_WEEK} slider={exercise} />
            <SliderField id="commute" label="Commute (hours per day)"
                range={config::COMMUTE_HOURS_PER_DAY} slider={commute} />
            <div class="button-row">
                <button class="btn-primary" onclick={on_submit}>{ "Show My Numbers" }</button>
                <button class="btn-secondary" onclick={on_reset}>{ "Reset" }</button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DetailedResultsProps {
    profile: DetailedProfile,
    on_back: Callback<MouseEvent>,
}

#[function_component(DetailedResults)]
fn detailed_results(props: &DetailedResultsProps) -> Html {
    let stats: DetailedStats = compute_detailed(LifeExpectancyTable::builtin(), &props.profile);
    let result = stats.to_result();

    use_effect_with(stats, |stats| {
        draw_pie(
            config::DETAILED_PIE_CANVAS,
            "Life Lived vs Left",
            &life_progress_shares(&stats.progress),
        );
        draw_bars(
            config::DETAILED_BAR_CANVAS,
            "Years Spent on Each Activity",
            &activity_years(stats),
        );
        || {
            destroy_chart(config::DETAILED_PIE_CANVAS);
            destroy_chart(config::DETAILED_BAR_CANVAS);
        }
    });

    html! {
        <div class="calculator detailed results-page">
            { render_results("Your Life Overview", &result) }
            <div class="charts">
                <ChartCanvas id={config::DETAILED_PIE_CANVAS} />
                <ChartCanvas id={config::DETAILED_BAR_CANVAS} />
            </div>
            { render_json(&result) }
            <button class="btn-secondary" onclick={props.on_back.clone()}>{ "Back" }</button>
        </div>
    }
}

#[function_component(DetailedView)]
fn detailed_view() -> Html {
    let submitted = use_state(session::last_profile);
    let page = use_state(|| Page::Inputs);

    let on_submit = {
        let submitted = submitted.clone();
        let page = page.clone();
        Callback::from(move |profile: DetailedProfile| {
            session::store_profile(profile.clone());
            submitted.set(Some(profile));
            page.set(Page::Results);
        })
    };
    let on_back = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.set(Page::Inputs))
    };

    match (*page, (*submitted).clone()) {
        (Page::Results, Some(profile)) => html! {
            <DetailedResults {profile} {on_back} />
        },
        _ => html! { <DetailedInputs {on_submit} /> },
    }
}

// ──────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Version {
    Classic,
    Detailed,
}

/// Primary application component switching between calculator versions.
#[function_component]
pub fn App() -> Html {
    let version = use_state(|| Version::Classic);

    let tab = |v: Version, label: &'static str| {
        let version = version.clone();
        let class = if *version == v { "tab active" } else { "tab" };
        html! {
            <button {class} onclick={Callback::from(move |_: MouseEvent| version.set(v))}>
                { label }
            </button>
        }
    };

    html! {
        <div class="app">
            <h1>{ config::APP_TITLE }</h1>
            <div class="tabs">
                { tab(Version::Classic, "Classic") }
                { tab(Version::Detailed, "Detailed") }
            </div>
            {
                match *version {
                    Version::Classic => html! { <ClassicView /> },
                    Version::Detailed => html! { <DetailedView /> },
                }
            }
        </div>
    }
}

/// Entry point: initializes Yew renderer for the App component.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
