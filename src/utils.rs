use crate::config::SliderRange;
use life_numbers::defaults::{DAYS_PER_YEAR, HOURS_PER_DAY};
use life_numbers::{ClassicStats, DetailedStats, LifeProgress};
use log::debug;
use serde::Serialize;

/// One labelled value handed to the chart helpers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub label: &'static str,
    pub value: f64,
}

impl ChartSlice {
    fn new(label: &'static str, value: f64) -> Self {
        Self { label, value }
    }
}

const HOURS_PER_YEAR: f64 = DAYS_PER_YEAR * HOURS_PER_DAY;

/// Work / Sleep / Other shares of the remaining lifespan.
///
/// Returns `None` when no years are left, since every share would be a
/// division by zero. Past retirement the work share is negative; it is
/// drawn as zero so no slice goes below zero.
pub fn classic_time_shares(stats: &ClassicStats) -> Option<Vec<ChartSlice>> {
    if stats.years_left <= 0 {
        debug!("No years left, skipping time share chart");
        return None;
    }
    let years_left = stats.years_left as f64;
    let work = (stats.total_work_hours_left / (years_left * HOURS_PER_YEAR)).max(0.0);
    let sleep = stats.total_sleep_years.max(0.0) / years_left;

    Some(vec![
        ChartSlice::new("Work", work),
        ChartSlice::new("Sleep", sleep),
        ChartSlice::new("Other Time", (1.0 - work - sleep).max(0.0)),
    ])
}

/// Lived / left split. Negative shares are drawn as zero.
pub fn life_progress_shares(progress: &LifeProgress) -> Vec<ChartSlice> {
    vec![
        ChartSlice::new("Lived", progress.percent_lived.max(0.0)),
        ChartSlice::new("Left", progress.percent_left.max(0.0)),
    ]
}

/// Years consumed by each activity over the remaining lifespan.
pub fn activity_years(stats: &DetailedStats) -> Vec<ChartSlice> {
    vec![
        ChartSlice::new("Work", stats.classic.total_work_hours_left / HOURS_PER_YEAR),
        ChartSlice::new("Sleep", stats.classic.total_sleep_years),
        ChartSlice::new("Social Media", stats.social_media_years),
        ChartSlice::new("TV", stats.tv_years),
        ChartSlice::new("Exercise", stats.exercise_years),
        ChartSlice::new("Commute", stats.commute_years),
    ]
}

/// Parse a slider or number input and check it against the slider's bounds.
pub fn validate_slider_input(
    input: &str,
    range: SliderRange,
    field_name: &str,
) -> Result<i32, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(format!("{} cannot be empty", field_name));
    }

    match trimmed.parse::<i32>() {
        Ok(val) => {
            if val < range.min {
                return Err(format!("{} must be at least {}", field_name, range.min));
            }
            if val > range.max {
                return Err(format!("{} cannot exceed {}", field_name, range.max));
            }
            Ok(val)
        }
        Err(_) => Err(format!("{} must be a valid number", field_name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use life_numbers::{
        compute_classic, compute_detailed, ClassicProfile, DetailedProfile, Gender, LeisureHours,
        LifeExpectancyTable,
    };

    fn profile(age: i32) -> ClassicProfile {
        ClassicProfile {
            age,
            country: "USA".to_string(),
            work_hours_per_week: 40.0,
            sleep_hours_per_day: 8.0,
            parent_age: 65,
            visits_per_year: 5.0,
            kid_age: 0,
        }
    }

    #[test]
    fn test_classic_shares_sum_to_one() {
        let stats = compute_classic(LifeExpectancyTable::builtin(), &profile(30));
        let shares = classic_time_shares(&stats).unwrap();
        assert_eq!(
            shares.iter().map(|s| s.label).collect::<Vec<_>>(),
            vec!["Work", "Sleep", "Other Time"]
        );
        let total: f64 = shares.iter().map(|s| s.value).sum();
        assert!((total - 1.0).abs() < 1e-9);
        // 70000 hours over 47 years
        assert!((shares[0].value - 70_000.0 / (47.0 * 8760.0)).abs() < 1e-9);
        assert!((shares[1].value - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_classic_shares_past_retirement_are_non_negative() {
        let mut uk = profile(70);
        uk.country = "UK".to_string();
        let stats = compute_classic(LifeExpectancyTable::builtin(), &uk);
        assert!(stats.work_years < 0);

        let shares = classic_time_shares(&stats).unwrap();
        assert!(shares.iter().all(|s| s.value >= 0.0));
        assert_eq!(shares[0].value, 0.0);
        assert!((shares[1].value - 1.0 / 3.0).abs() < 1e-9);
        assert!((shares[2].value - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_chart_without_years_left() {
        let stats = compute_classic(LifeExpectancyTable::builtin(), &profile(90));
        assert_eq!(stats.years_left, 0);
        assert!(classic_time_shares(&stats).is_none());
    }

    #[test]
    fn test_detailed_chart_data() {
        let detailed = DetailedProfile {
            base: profile(30),
            gender: Gender::Male,
            leisure: LeisureHours {
                social_media_per_day: 2.0,
                tv_per_day: 1.0,
                exercise_per_week: 3.0,
                commute_per_day: 1.0,
            },
        };
        let stats = compute_detailed(LifeExpectancyTable::builtin(), &detailed);
        let bars = activity_years(&stats);
        assert_eq!(bars.len(), 6);
        assert_eq!(bars[2].label, "Social Media");
        assert_eq!(bars[2].value, stats.social_media_years);

        let pie = life_progress_shares(&stats.progress);
        assert!((pie[0].value + pie[1].value - 100.0).abs() < 1e-9);

        let over = LifeProgress {
            years_passed: 100,
            percent_lived: 125.0,
            percent_left: -25.0,
        };
        assert_eq!(life_progress_shares(&over)[1].value, 0.0);
    }

    #[test]
    fn test_validate_slider_input() {
        assert_eq!(validate_slider_input(" 42 ", config::AGE, "Age"), Ok(42));
        assert_eq!(
            validate_slider_input("", config::AGE, "Age"),
            Err("Age cannot be empty".to_string())
        );
        assert_eq!(
            validate_slider_input("17", config::AGE, "Age"),
            Err("Age must be at least 18".to_string())
        );
        assert_eq!(
            validate_slider_input("101", config::AGE, "Age"),
            Err("Age cannot exceed 100".to_string())
        );
        assert!(validate_slider_input("abc", config::AGE, "Age").is_err());
    }
}
