//! Application-level configuration constants.

/// Inclusive slider bounds and starting value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: i32,
    pub max: i32,
    pub default: i32,
}

impl SliderRange {
    const fn new(min: i32, max: i32, default: i32) -> Self {
        Self { min, max, default }
    }

    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }
}

// Shared sliders
pub const AGE: SliderRange = SliderRange::new(18, 100, 30);
pub const WORK_HOURS_PER_WEEK: SliderRange = SliderRange::new(0, 80, 40);
pub const SLEEP_HOURS_PER_DAY: SliderRange = SliderRange::new(4, 12, 8);
pub const PARENT_AGE: SliderRange = SliderRange::new(40, 100, 65);
pub const VISITS_PER_YEAR: SliderRange = SliderRange::new(0, 52, 5);
pub const KID_AGE: SliderRange = SliderRange::new(0, 30, 0);

// Detailed-only sliders
pub const SOCIAL_MEDIA_HOURS_PER_DAY: SliderRange = SliderRange::new(0, 12, 2);
pub const TV_HOURS_PER_DAY: SliderRange = SliderRange::new(0, 12, 2);
pub const EXERCISE_HOURS_PER_WEEK: SliderRange = SliderRange::new(0, 20, 3);
pub const COMMUTE_HOURS_PER_DAY: SliderRange = SliderRange::new(0, 6, 1);

// Chart canvases (see chart_helpers.js)
pub const CLASSIC_PIE_CANVAS: &str = "classic-pie";
pub const DETAILED_PIE_CANVAS: &str = "detailed-pie";
pub const DETAILED_BAR_CANVAS: &str = "detailed-bar";

pub const APP_TITLE: &str = "Scary Life Numbers Calculator";
