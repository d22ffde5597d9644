use log::debug;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

pub mod expectancy;

pub use expectancy::{Gender, GenderExpectancy, LifeExpectancyTable, TableError};

/// Fixed assumptions baked into the calculator.
pub mod defaults {
    pub const CLASSIC_DEFAULT_EXPECTANCY: i32 = 80;
    pub const DETAILED_DEFAULT_MALE: i32 = 80;
    pub const DETAILED_DEFAULT_FEMALE: i32 = 85;
    pub const RETIREMENT_AGE: i32 = 65;
    pub const WORK_WEEKS_PER_YEAR: f64 = 50.0;
    pub const HOURS_PER_DAY: f64 = 24.0;
    pub const DAYS_PER_YEAR: f64 = 365.0;
}

/// Metric labels, in the order they are reported.
pub mod labels {
    pub const YEARS_PASSED: &str = "Years Passed";
    pub const PERCENT_LIVED: &str = "Percent of Life Lived";
    pub const PERCENT_LEFT: &str = "Percent of Life Left";
    pub const YEARS_LEFT: &str = "Years Left";
    pub const SUMMERS_LEFT: &str = "Summers Left";
    pub const CHRISTMASES_LEFT: &str = "Christmases Left";
    pub const VISITS_WITH_PARENTS: &str = "Visits with Parents";
    pub const WORK_HOURS_LEFT: &str = "Total Work Hours Left";
    pub const SLEEP_YEARS: &str = "Total Sleep Years";
    pub const SOCIAL_MEDIA_YEARS: &str = "Social Media Years";
    pub const TV_YEARS: &str = "TV Years";
    pub const EXERCISE_YEARS: &str = "Exercise Years";
    pub const COMMUTE_YEARS: &str = "Commute Years";
}

/// Inputs shared by both calculator versions.
///
/// Ranges are enforced by the input widgets; nothing here is validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassicProfile {
    pub age: i32,
    pub country: String,
    pub work_hours_per_week: f64,
    pub sleep_hours_per_day: f64,
    pub parent_age: i32,
    pub visits_per_year: f64,
    /// Collected by the form but not used by any formula.
    pub kid_age: i32,
}

/// Extra activity sliders of the detailed calculator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LeisureHours {
    pub social_media_per_day: f64,
    pub tv_per_day: f64,
    /// Entered per week but converted with the same per-day proportion as
    /// the other activities.
    pub exercise_per_week: f64,
    pub commute_per_day: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedProfile {
    pub base: ClassicProfile,
    pub gender: Gender,
    pub leisure: LeisureHours,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UserProfile {
    Classic(ClassicProfile),
    Detailed(DetailedProfile),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MetricUnit {
    Years,
    Hours,
    Visits,
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: f64,
    pub unit: MetricUnit,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = format_metric_value(self.value);
        match self.unit {
            MetricUnit::Percent => write!(f, "{}: {}%", self.label, value),
            _ => write!(f, "{}: {}", self.label, value),
        }
    }
}

/// Whole numbers print without decimals, everything else with two.
pub fn format_metric_value(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

/// Ordered label to value mapping handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LifeStatsResult {
    metrics: Vec<Metric>,
}

impl LifeStatsResult {
    fn push(&mut self, label: &'static str, value: f64, unit: MetricUnit) {
        self.metrics.push(Metric { label, value, unit });
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.metrics
            .iter()
            .find(|m| m.label == label)
            .map(|m| m.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Metric> {
        self.metrics.iter()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.metrics.iter().map(|m| m.label).collect()
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

// Serialized as a plain JSON object in insertion order.
impl Serialize for LifeStatsResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.metrics.len()))?;
        for metric in &self.metrics {
            map.serialize_entry(metric.label, &metric.value)?;
        }
        map.end()
    }
}

/// Typed output of the classic calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassicStats {
    pub life_expectancy: i32,
    pub years_left: i32,
    pub summers_left: i32,
    pub christmases_left: i32,
    pub parent_years_left: i32,
    pub visits_with_parents: f64,
    /// Can be negative past retirement age.
    pub work_years: i32,
    pub total_work_hours_left: f64,
    pub total_sleep_years: f64,
}

impl ClassicStats {
    pub fn to_result(&self) -> LifeStatsResult {
        let mut result = LifeStatsResult::default();
        self.append_to(&mut result);
        result
    }

    fn append_to(&self, result: &mut LifeStatsResult) {
        result.push(labels::YEARS_LEFT, self.years_left as f64, MetricUnit::Years);
        result.push(labels::SUMMERS_LEFT, self.summers_left as f64, MetricUnit::Years);
        result.push(
            labels::CHRISTMASES_LEFT,
            self.christmases_left as f64,
            MetricUnit::Years,
        );
        result.push(
            labels::VISITS_WITH_PARENTS,
            self.visits_with_parents,
            MetricUnit::Visits,
        );
        result.push(
            labels::WORK_HOURS_LEFT,
            self.total_work_hours_left,
            MetricUnit::Hours,
        );
        result.push(labels::SLEEP_YEARS, self.total_sleep_years, MetricUnit::Years);
    }
}

/// Age as a share of the expected lifespan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LifeProgress {
    pub years_passed: i32,
    /// Not clamped: exceeds 100 once age passes the expectancy.
    pub percent_lived: f64,
    pub percent_left: f64,
}

/// Typed output of the detailed calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DetailedStats {
    pub progress: LifeProgress,
    pub classic: ClassicStats,
    pub social_media_years: f64,
    pub tv_years: f64,
    pub exercise_years: f64,
    pub commute_years: f64,
}

impl DetailedStats {
    pub fn to_result(&self) -> LifeStatsResult {
        let mut result = LifeStatsResult::default();
        result.push(
            labels::YEARS_PASSED,
            self.progress.years_passed as f64,
            MetricUnit::Years,
        );
        result.push(
            labels::PERCENT_LIVED,
            self.progress.percent_lived,
            MetricUnit::Percent,
        );
        result.push(
            labels::PERCENT_LEFT,
            self.progress.percent_left,
            MetricUnit::Percent,
        );
        self.classic.append_to(&mut result);
        result.push(
            labels::SOCIAL_MEDIA_YEARS,
            self.social_media_years,
            MetricUnit::Years,
        );
        result.push(labels::TV_YEARS, self.tv_years, MetricUnit::Years);
        result.push(labels::EXERCISE_YEARS, self.exercise_years, MetricUnit::Years);
        result.push(labels::COMMUTE_YEARS, self.commute_years, MetricUnit::Years);
        result
    }
}

/// Remaining years, floored at zero.
pub fn years_left(life_expectancy: i32, age: i32) -> i32 {
    (life_expectancy - age).max(0)
}

pub fn life_progress(life_expectancy: i32, age: i32) -> LifeProgress {
    let percent_lived = 100.0 * age as f64 / life_expectancy as f64;
    LifeProgress {
        years_passed: age,
        percent_lived,
        percent_left: 100.0 - percent_lived,
    }
}

/// Working years before retirement, capped by remaining lifespan.
pub fn work_years(age: i32, years_left: i32) -> i32 {
    (defaults::RETIREMENT_AGE - age).min(years_left)
}

/// Convert a recurring daily-hours rate into whole years consumed over the
/// remaining lifespan.
pub fn hours_to_years(hours_per_day: f64, years_left: i32) -> f64 {
    (hours_per_day / defaults::HOURS_PER_DAY) * years_left as f64
}

// Parents are assumed to share the profile's country (and gender).
fn aggregate(life_expectancy: i32, profile: &ClassicProfile) -> ClassicStats {
    let parent_years_left = years_left(life_expectancy, profile.parent_age);
    let years_left = years_left(life_expectancy, profile.age);
    let work_years = work_years(profile.age, years_left);

    ClassicStats {
        life_expectancy,
        years_left,
        summers_left: years_left,
        christmases_left: years_left,
        parent_years_left,
        visits_with_parents: parent_years_left as f64 * profile.visits_per_year,
        work_years,
        total_work_hours_left: work_years as f64
            * profile.work_hours_per_week
            * defaults::WORK_WEEKS_PER_YEAR,
        total_sleep_years: hours_to_years(profile.sleep_hours_per_day, years_left),
    }
}

pub fn compute_classic(table: &LifeExpectancyTable, profile: &ClassicProfile) -> ClassicStats {
    let expectancy = table.lookup(&profile.country, None);
    let stats = aggregate(expectancy, profile);
    debug!(
        "Classic stats for age {} in {}: {} years left",
        profile.age, profile.country, stats.years_left
    );
    stats
}

pub fn compute_detailed(table: &LifeExpectancyTable, profile: &DetailedProfile) -> DetailedStats {
    let base = &profile.base;
    let expectancy = table.lookup(&base.country, Some(profile.gender));
    let classic = aggregate(expectancy, base);
    let years_left = classic.years_left;
    let leisure = &profile.leisure;

    debug!(
        "Detailed stats for age {} ({}) in {}: {} years left",
        base.age, profile.gender, base.country, years_left
    );

    DetailedStats {
        progress: life_progress(expectancy, base.age),
        classic,
        social_media_years: hours_to_years(leisure.social_media_per_day, years_left),
        tv_years: hours_to_years(leisure.tv_per_day, years_left),
        exercise_years: hours_to_years(leisure.exercise_per_week, years_left),
        commute_years: hours_to_years(leisure.commute_per_day, years_left),
    }
}

/// Compute the metrics for either calculator version against a given table.
pub fn compute_life_stats_with(table: &LifeExpectancyTable, profile: &UserProfile) -> LifeStatsResult {
    match profile {
        UserProfile::Classic(p) => compute_classic(table, p).to_result(),
        UserProfile::Detailed(p) => compute_detailed(table, p).to_result(),
    }
}

/// Compute the metrics against the built-in life expectancy table.
pub fn compute_life_stats(profile: &UserProfile) -> LifeStatsResult {
    compute_life_stats_with(LifeExpectancyTable::builtin(), profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    fn classic(age: i32, country: &str) -> ClassicProfile {
        ClassicProfile {
            age,
            country: country.to_string(),
            work_hours_per_week: 40.0,
            sleep_hours_per_day: 8.0,
            parent_age: 65,
            visits_per_year: 5.0,
            kid_age: 0,
        }
    }

    fn detailed(age: i32, country: &str, gender: Gender) -> DetailedProfile {
        DetailedProfile {
            base: classic(age, country),
            gender,
            leisure: LeisureHours {
                social_media_per_day: 2.0,
                tv_per_day: 2.0,
                exercise_per_week: 3.0,
                commute_per_day: 1.0,
            },
        }
    }

    #[test]
    fn test_classic_usa_example() {
        let result = compute_life_stats(&UserProfile::Classic(classic(30, "USA")));
        assert_eq!(result.get(labels::YEARS_LEFT), Some(47.0));
        assert_eq!(result.get(labels::SUMMERS_LEFT), Some(47.0));
        assert_eq!(result.get(labels::CHRISTMASES_LEFT), Some(47.0));
        // parent: 77 - 65 = 12 years, 5 visits a year
        assert_eq!(result.get(labels::VISITS_WITH_PARENTS), Some(60.0));
        assert_eq!(result.get(labels::WORK_HOURS_LEFT), Some(70_000.0));
        assert!(approx(result.get(labels::SLEEP_YEARS).unwrap(), 15.67));

        let stats = compute_classic(LifeExpectancyTable::builtin(), &classic(30, "USA"));
        assert_eq!(stats.work_years, 35);
    }

    #[test]
    fn test_classic_label_order() {
        let result = compute_life_stats(&UserProfile::Classic(classic(30, "UK")));
        assert_eq!(
            result.labels(),
            vec![
                "Years Left",
                "Summers Left",
                "Christmases Left",
                "Visits with Parents",
                "Total Work Hours Left",
                "Total Sleep Years",
            ]
        );
    }

    #[test]
    fn test_unknown_country_uses_default() {
        let stats = compute_classic(LifeExpectancyTable::builtin(), &classic(30, "Narnia"));
        assert_eq!(stats.life_expectancy, 80);
        assert_eq!(stats.years_left, 50);

        let stats = compute_detailed(
            LifeExpectancyTable::builtin(),
            &detailed(30, "Narnia", Gender::Female),
        );
        assert_eq!(stats.classic.years_left, 55);
    }

    #[test]
    fn test_years_left_clamped_at_zero() {
        for expectancy in [1, 70, 84] {
            for age in expectancy..expectancy + 40 {
                assert_eq!(years_left(expectancy, age), 0);
            }
        }
        let stats = compute_classic(LifeExpectancyTable::builtin(), &classic(95, "India"));
        assert_eq!(stats.years_left, 0);
        assert_eq!(stats.total_sleep_years, 0.0);
    }

    #[test]
    fn test_work_years_bounds() {
        for age in 0..110 {
            let left = years_left(77, age);
            let work = work_years(age, left);
            assert!(work <= left);
            assert!(work <= defaults::RETIREMENT_AGE - age);
        }
    }

    #[test]
    fn test_work_years_negative_past_retirement() {
        // 70 in the UK: 11 years left, but retirement was 5 years ago
        let stats = compute_classic(LifeExpectancyTable::builtin(), &classic(70, "UK"));
        assert_eq!(stats.years_left, 11);
        assert_eq!(stats.work_years, -5);
        assert_eq!(stats.total_work_hours_left, -5.0 * 40.0 * 50.0);
    }

    #[test]
    fn test_detailed_japan_example() {
        let stats = compute_detailed(
            LifeExpectancyTable::builtin(),
            &detailed(30, "Japan", Gender::Male),
        );
        assert_eq!(stats.classic.life_expectancy, 81);
        assert_eq!(stats.classic.years_left, 51);
        assert_eq!(stats.progress.years_passed, 30);
        assert!(approx(stats.progress.percent_lived, 37.04));
        assert!(approx(stats.progress.percent_left, 62.96));
        assert!(approx(stats.social_media_years, 2.0 / 24.0 * 51.0));
        assert!(approx(stats.commute_years, 51.0 / 24.0));
    }

    #[test]
    fn test_detailed_is_superset_with_percentages_first() {
        let result = compute_life_stats(&UserProfile::Detailed(detailed(40, "Spain", Gender::Female)));
        let detailed_labels = result.labels();
        assert_eq!(&detailed_labels[..3], &[
            labels::YEARS_PASSED,
            labels::PERCENT_LIVED,
            labels::PERCENT_LEFT
        ]);
        let classic_labels = compute_life_stats(&UserProfile::Classic(classic(40, "Spain"))).labels();
        assert_eq!(&detailed_labels[3..9], classic_labels.as_slice());
        assert_eq!(result.len(), 13);
    }

    #[test]
    fn test_detailed_parent_visits_use_gender_expectancy() {
        let table = LifeExpectancyTable::builtin();
        let visits = |country: &str, gender: Gender| {
            compute_life_stats_with(table, &UserProfile::Detailed(detailed(30, country, gender)))
                .get(labels::VISITS_WITH_PARENTS)
        };
        // parent 65, 5 visits a year
        assert_eq!(visits("Japan", Gender::Female), Some((87.0 - 65.0) * 5.0));
        assert_eq!(visits("Japan", Gender::Male), Some((81.0 - 65.0) * 5.0));
        assert_eq!(visits("Narnia", Gender::Female), Some((85.0 - 65.0) * 5.0));
        assert_eq!(visits("Narnia", Gender::Male), Some((80.0 - 65.0) * 5.0));

        let stats = compute_detailed(table, &detailed(30, "Japan", Gender::Female));
        assert_eq!(stats.classic.parent_years_left, 22);
    }

    #[test]
    fn test_exercise_uses_same_proportion_as_daily_rates() {
        let mut profile = detailed(30, "Japan", Gender::Male);
        profile.leisure = LeisureHours {
            social_media_per_day: 3.0,
            tv_per_day: 3.0,
            exercise_per_week: 3.0,
            commute_per_day: 3.0,
        };
        let stats = compute_detailed(LifeExpectancyTable::builtin(), &profile);
        assert_eq!(stats.exercise_years, stats.social_media_years);
        assert_eq!(stats.exercise_years, stats.tv_years);
    }

    #[test]
    fn test_percentages_not_clamped() {
        let progress = life_progress(80, 100);
        assert!(approx(progress.percent_lived, 125.0));
        assert!(approx(progress.percent_left, -25.0));
    }

    #[test]
    fn test_kid_age_does_not_affect_results() {
        let mut with_kid = classic(35, "France");
        with_kid.kid_age = 12;
        assert_eq!(
            compute_life_stats(&UserProfile::Classic(classic(35, "France"))),
            compute_life_stats(&UserProfile::Classic(with_kid))
        );
    }

    #[test]
    fn test_idempotent() {
        let profile = UserProfile::Detailed(detailed(52, "Brazil", Gender::Male));
        assert_eq!(compute_life_stats(&profile), compute_life_stats(&profile));
    }

    #[test]
    fn test_negative_age_does_not_panic() {
        let stats = compute_classic(LifeExpectancyTable::builtin(), &classic(-5, "Poland"));
        assert_eq!(stats.years_left, 83);
        assert_eq!(stats.work_years, 70);
    }

    #[test]
    fn test_result_serializes_in_order() {
        let result = compute_life_stats(&UserProfile::Classic(classic(30, "USA")));
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.starts_with("{\"Years Left\":47.0,\"Summers Left\":47.0"));
        assert!(result.to_json_pretty().unwrap().contains("\"Total Work Hours Left\": 70000.0"));
    }

    #[test]
    fn test_metric_display() {
        assert_eq!(format_metric_value(47.0), "47");
        assert_eq!(format_metric_value(15.666_666), "15.67");
        let metric = Metric {
            label: labels::PERCENT_LIVED,
            value: 37.037,
            unit: MetricUnit::Percent,
        };
        assert_eq!(metric.to_string(), "Percent of Life Lived: 37.04%");
    }
}
