use crate::source::Source;
use serde::{Deserialize, Serialize};

/// Broad grouping used by read-side consumers to organize charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricCategory {
    Recovery,
    Activity,
    Nutrition,
}

/// How a metric should be rolled up over a week (display hint only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeeklyAgg {
    Average,
    Sum,
}

/// Static metadata for one (source, field) pair.
///
/// Metadata is data, not behavior: it lives in this table rather than on the
/// metric types, and nothing in the core enforces it. `display_delay_days`
/// is the number of days before a value is considered settled; readers may
/// choose to hide fresher values.
#[derive(Debug, Clone, Copy)]
pub struct MetricMeta {
    pub source: Source,
    pub field: &'static str,
    pub label: &'static str,
    pub category: MetricCategory,
    pub unit: Option<&'static str>,
    pub weekly: WeeklyAgg,
    pub display_delay_days: u8,
}

const METRIC_METADATA: &[MetricMeta] = &[
    // Oura
    MetricMeta {
        source: Source::Oura,
        field: "sleep_score",
        label: "Sleep Score",
        category: MetricCategory::Recovery,
        unit: Some("score"),
        weekly: WeeklyAgg::Average,
        display_delay_days: 0,
    },
    MetricMeta {
        source: Source::Oura,
        field: "sleep_duration_hours",
        label: "Sleep Duration",
        category: MetricCategory::Recovery,
        unit: Some("hours"),
        weekly: WeeklyAgg::Average,
        display_delay_days: 0,
    },
    MetricMeta {
        source: Source::Oura,
        field: "readiness_score",
        label: "Readiness Score",
        category: MetricCategory::Recovery,
        unit: Some("score"),
        weekly: WeeklyAgg::Average,
        display_delay_days: 0,
    },
    MetricMeta {
        source: Source::Oura,
        field: "activity_score",
        label: "Activity Score",
        category: MetricCategory::Activity,
        unit: Some("score"),
        weekly: WeeklyAgg::Average,
        display_delay_days: 1,
    },
    MetricMeta {
        source: Source::Oura,
        field: "steps",
        label: "Steps",
        category: MetricCategory::Activity,
        unit: Some("steps"),
        weekly: WeeklyAgg::Average,
        display_delay_days: 1,
    },
    MetricMeta {
        source: Source::Oura,
        field: "sleep_heart_rate",
        label: "Sleep Avg HR",
        category: MetricCategory::Recovery,
        unit: Some("bpm"),
        weekly: WeeklyAgg::Average,
        display_delay_days: 0,
    },
    MetricMeta {
        source: Source::Oura,
        field: "sleep_lowest_heart_rate",
        label: "Sleep Lowest HR",
        category: MetricCategory::Recovery,
        unit: Some("bpm"),
        weekly: WeeklyAgg::Average,
        display_delay_days: 0,
    },
    MetricMeta {
        source: Source::Oura,
        field: "sleep_hrv",
        label: "Sleep Avg HRV",
        category: MetricCategory::Recovery,
        unit: Some("ms"),
        weekly: WeeklyAgg::Average,
        display_delay_days: 0,
    },
    // Cronometer
    MetricMeta {
        source: Source::Cronometer,
        field: "calories",
        label: "Calories",
        category: MetricCategory::Nutrition,
        unit: Some("kcal"),
        weekly: WeeklyAgg::Average,
        display_delay_days: 1,
    },
    MetricMeta {
        source: Source::Cronometer,
        field: "protein",
        label: "Protein",
        category: MetricCategory::Nutrition,
        unit: Some("g"),
        weekly: WeeklyAgg::Average,
        display_delay_days: 1,
    },
    MetricMeta {
        source: Source::Cronometer,
        field: "carbs",
        label: "Carbs",
        category: MetricCategory::Nutrition,
        unit: Some("g"),
        weekly: WeeklyAgg::Average,
        display_delay_days: 1,
    },
    MetricMeta {
        source: Source::Cronometer,
        field: "fat",
        label: "Fat",
        category: MetricCategory::Nutrition,
        unit: Some("g"),
        weekly: WeeklyAgg::Average,
        display_delay_days: 1,
    },
    // Strava
    MetricMeta {
        source: Source::Strava,
        field: "total_distance_km",
        label: "Running Distance",
        category: MetricCategory::Activity,
        unit: Some("km"),
        weekly: WeeklyAgg::Sum,
        display_delay_days: 1,
    },
    MetricMeta {
        source: Source::Strava,
        field: "total_duration_hours",
        label: "Running Duration",
        category: MetricCategory::Activity,
        unit: Some("hours"),
        weekly: WeeklyAgg::Sum,
        display_delay_days: 1,
    },
    // Garmin
    MetricMeta {
        source: Source::Garmin,
        field: "total_distance_km",
        label: "Running Distance",
        category: MetricCategory::Activity,
        unit: Some("km"),
        weekly: WeeklyAgg::Sum,
        display_delay_days: 0,
    },
    MetricMeta {
        source: Source::Garmin,
        field: "total_duration_hours",
        label: "Running Duration",
        category: MetricCategory::Activity,
        unit: Some("hours"),
        weekly: WeeklyAgg::Sum,
        display_delay_days: 0,
    },
    MetricMeta {
        source: Source::Garmin,
        field: "steps",
        label: "Steps",
        category: MetricCategory::Activity,
        unit: Some("steps"),
        weekly: WeeklyAgg::Average,
        display_delay_days: 1,
    },
    MetricMeta {
        source: Source::Garmin,
        field: "resting_heart_rate",
        label: "Resting HR",
        category: MetricCategory::Recovery,
        unit: Some("bpm"),
        weekly: WeeklyAgg::Average,
        display_delay_days: 1,
    },
    MetricMeta {
        source: Source::Garmin,
        field: "hrv",
        label: "Sleep Avg HRV",
        category: MetricCategory::Recovery,
        unit: Some("ms"),
        weekly: WeeklyAgg::Average,
        display_delay_days: 0,
    },
    MetricMeta {
        source: Source::Garmin,
        field: "vo2_max",
        label: "VO2 Max",
        category: MetricCategory::Activity,
        unit: Some("ml/kg/min"),
        weekly: WeeklyAgg::Average,
        display_delay_days: 0,
    },
    // Manual
    MetricMeta {
        source: Source::Manual,
        field: "bodyweight_kg",
        label: "Bodyweight",
        category: MetricCategory::Nutrition,
        unit: Some("kg"),
        weekly: WeeklyAgg::Average,
        display_delay_days: 0,
    },
    MetricMeta {
        source: Source::Manual,
        field: "lift",
        label: "Lift",
        category: MetricCategory::Activity,
        unit: None,
        weekly: WeeklyAgg::Sum,
        display_delay_days: 1,
    },
];

/// The full metadata table.
pub fn metric_metadata() -> &'static [MetricMeta] {
    METRIC_METADATA
}

/// Look up metadata for one (source, field) pair.
pub fn metric_meta(source: Source, field: &str) -> Option<&'static MetricMeta> {
    METRIC_METADATA
        .iter()
        .find(|m| m.source == source && m.field == field)
}
