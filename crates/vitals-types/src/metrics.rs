use crate::source::Source;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single metric observation.
///
/// Variants cover every value type that appears in a metric bag. `None` at
/// the bag level always means "unknown", never zero or false.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Int(v) => write!(f, "{}", v),
            MetricValue::Float(v) => write!(f, "{}", v),
            MetricValue::Bool(v) => write!(f, "{}", v),
        }
    }
}

/// A named bag of independently-nullable metric fields.
///
/// The reconciliation engine only ever touches source data through this
/// trait, so the field-level upsert rule is written once and applies to
/// every provider schema.
pub trait MetricBag: Clone + Default {
    /// The provider this bag belongs to.
    fn source() -> Source;

    /// Field names in export column order.
    fn field_names() -> &'static [&'static str];

    /// Read one field by name. Unknown names return `None`.
    fn get(&self, field: &str) -> Option<MetricValue>;

    /// Field-level upsert: every non-null field of `newer` overwrites the
    /// corresponding field here; null fields of `newer` leave known values
    /// untouched.
    fn absorb(&mut self, newer: &Self);

    /// True when every field is null.
    fn is_empty(&self) -> bool {
        Self::field_names().iter().all(|f| self.get(f).is_none())
    }
}

/// Field names for a source, in export column order.
pub fn fields_for(source: Source) -> &'static [&'static str] {
    match source {
        Source::Oura => OuraMetrics::field_names(),
        Source::Cronometer => CronometerMetrics::field_names(),
        Source::Strava => StravaMetrics::field_names(),
        Source::Garmin => GarminMetrics::field_names(),
        Source::Manual => ManualMetrics::field_names(),
    }
}

/// Daily data from the Oura ring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OuraMetrics {
    pub sleep_score: Option<i64>,
    pub sleep_duration_hours: Option<f64>,
    pub readiness_score: Option<i64>,
    pub activity_score: Option<i64>,
    pub steps: Option<i64>,
    pub sleep_heart_rate: Option<f64>,
    pub sleep_lowest_heart_rate: Option<i64>,
    pub sleep_hrv: Option<f64>,
}

impl MetricBag for OuraMetrics {
    fn source() -> Source {
        Source::Oura
    }

    fn field_names() -> &'static [&'static str] {
        &[
            "sleep_score",
            "sleep_duration_hours",
            "readiness_score",
            "activity_score",
            "steps",
            "sleep_heart_rate",
            "sleep_lowest_heart_rate",
            "sleep_hrv",
        ]
    }

    fn get(&self, field: &str) -> Option<MetricValue> {
        match field {
            "sleep_score" => self.sleep_score.map(MetricValue::Int),
            "sleep_duration_hours" => self.sleep_duration_hours.map(MetricValue::Float),
            "readiness_score" => self.readiness_score.map(MetricValue::Int),
            "activity_score" => self.activity_score.map(MetricValue::Int),
            "steps" => self.steps.map(MetricValue::Int),
            "sleep_heart_rate" => self.sleep_heart_rate.map(MetricValue::Float),
            "sleep_lowest_heart_rate" => self.sleep_lowest_heart_rate.map(MetricValue::Int),
            "sleep_hrv" => self.sleep_hrv.map(MetricValue::Float),
            _ => None,
        }
    }

    fn absorb(&mut self, newer: &Self) {
        self.sleep_score = newer.sleep_score.or(self.sleep_score);
        self.sleep_duration_hours = newer.sleep_duration_hours.or(self.sleep_duration_hours);
        self.readiness_score = newer.readiness_score.or(self.readiness_score);
        self.activity_score = newer.activity_score.or(self.activity_score);
        self.steps = newer.steps.or(self.steps);
        self.sleep_heart_rate = newer.sleep_heart_rate.or(self.sleep_heart_rate);
        self.sleep_lowest_heart_rate = newer
            .sleep_lowest_heart_rate
            .or(self.sleep_lowest_heart_rate);
        self.sleep_hrv = newer.sleep_hrv.or(self.sleep_hrv);
    }
}

/// Daily nutrition totals from Cronometer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CronometerMetrics {
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
}

impl MetricBag for CronometerMetrics {
    fn source() -> Source {
        Source::Cronometer
    }

    fn field_names() -> &'static [&'static str] {
        &["calories", "protein", "carbs", "fat"]
    }

    fn get(&self, field: &str) -> Option<MetricValue> {
        match field {
            "calories" => self.calories.map(MetricValue::Float),
            "protein" => self.protein.map(MetricValue::Float),
            "carbs" => self.carbs.map(MetricValue::Float),
            "fat" => self.fat.map(MetricValue::Float),
            _ => None,
        }
    }

    fn absorb(&mut self, newer: &Self) {
        self.calories = newer.calories.or(self.calories);
        self.protein = newer.protein.or(self.protein);
        self.carbs = newer.carbs.or(self.carbs);
        self.fat = newer.fat.or(self.fat);
    }
}

/// Daily run totals from Strava, pre-aggregated per day by the connector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StravaMetrics {
    pub total_distance_km: Option<f64>,
    pub total_duration_hours: Option<f64>,
}

impl MetricBag for StravaMetrics {
    fn source() -> Source {
        Source::Strava
    }

    fn field_names() -> &'static [&'static str] {
        &["total_distance_km", "total_duration_hours"]
    }

    fn get(&self, field: &str) -> Option<MetricValue> {
        match field {
            "total_distance_km" => self.total_distance_km.map(MetricValue::Float),
            "total_duration_hours" => self.total_duration_hours.map(MetricValue::Float),
            _ => None,
        }
    }

    fn absorb(&mut self, newer: &Self) {
        self.total_distance_km = newer.total_distance_km.or(self.total_distance_km);
        self.total_duration_hours = newer.total_duration_hours.or(self.total_duration_hours);
    }
}

/// Daily activity and recovery data from Garmin Connect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GarminMetrics {
    pub total_distance_km: Option<f64>,
    pub total_duration_hours: Option<f64>,
    pub steps: Option<i64>,
    pub resting_heart_rate: Option<i64>,
    pub hrv: Option<i64>,
    pub vo2_max: Option<f64>,
}

impl MetricBag for GarminMetrics {
    fn source() -> Source {
        Source::Garmin
    }

    fn field_names() -> &'static [&'static str] {
        &[
            "total_distance_km",
            "total_duration_hours",
            "steps",
            "resting_heart_rate",
            "hrv",
            "vo2_max",
        ]
    }

    fn get(&self, field: &str) -> Option<MetricValue> {
        match field {
            "total_distance_km" => self.total_distance_km.map(MetricValue::Float),
            "total_duration_hours" => self.total_duration_hours.map(MetricValue::Float),
            "steps" => self.steps.map(MetricValue::Int),
            "resting_heart_rate" => self.resting_heart_rate.map(MetricValue::Int),
            "hrv" => self.hrv.map(MetricValue::Int),
            "vo2_max" => self.vo2_max.map(MetricValue::Float),
            _ => None,
        }
    }

    fn absorb(&mut self, newer: &Self) {
        self.total_distance_km = newer.total_distance_km.or(self.total_distance_km);
        self.total_duration_hours = newer.total_duration_hours.or(self.total_duration_hours);
        self.steps = newer.steps.or(self.steps);
        self.resting_heart_rate = newer.resting_heart_rate.or(self.resting_heart_rate);
        self.hrv = newer.hrv.or(self.hrv);
        self.vo2_max = newer.vo2_max.or(self.vo2_max);
    }
}

/// Manually entered bodyweight and lift tracking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManualMetrics {
    pub bodyweight_kg: Option<f64>,
    pub lift: Option<bool>,
}

impl MetricBag for ManualMetrics {
    fn source() -> Source {
        Source::Manual
    }

    fn field_names() -> &'static [&'static str] {
        &["bodyweight_kg", "lift"]
    }

    fn get(&self, field: &str) -> Option<MetricValue> {
        match field {
            "bodyweight_kg" => self.bodyweight_kg.map(MetricValue::Float),
            "lift" => self.lift.map(MetricValue::Bool),
            _ => None,
        }
    }

    fn absorb(&mut self, newer: &Self) {
        self.bodyweight_kg = newer.bodyweight_kg.or(self.bodyweight_kg);
        self.lift = newer.lift.or(self.lift);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absorb_keeps_known_values_on_null() {
        let mut old = OuraMetrics {
            sleep_score: Some(70),
            ..Default::default()
        };
        let new = OuraMetrics {
            steps: Some(9000),
            ..Default::default()
        };
        old.absorb(&new);
        assert_eq!(old.sleep_score, Some(70));
        assert_eq!(old.steps, Some(9000));
    }

    #[test]
    fn absorb_overwrites_with_non_null() {
        let mut old = ManualMetrics {
            bodyweight_kg: Some(80.0),
            lift: Some(false),
        };
        let new = ManualMetrics {
            bodyweight_kg: Some(81.5),
            lift: None,
        };
        old.absorb(&new);
        assert_eq!(old.bodyweight_kg, Some(81.5));
        assert_eq!(old.lift, Some(false));
    }

    #[test]
    fn empty_bag_is_empty() {
        assert!(GarminMetrics::default().is_empty());
        assert!(
            !GarminMetrics {
                steps: Some(1),
                ..Default::default()
            }
            .is_empty()
        );
    }

    #[test]
    fn get_covers_every_declared_field() {
        let bag = OuraMetrics {
            sleep_score: Some(80),
            sleep_duration_hours: Some(7.5),
            readiness_score: Some(75),
            activity_score: Some(60),
            steps: Some(10_000),
            sleep_heart_rate: Some(52.0),
            sleep_lowest_heart_rate: Some(46),
            sleep_hrv: Some(61.0),
        };
        for field in OuraMetrics::field_names() {
            assert!(bag.get(field).is_some(), "field {} not wired up", field);
        }
    }

    #[test]
    fn missing_fields_deserialize_as_null() {
        let bag: OuraMetrics = serde_json::from_str(r#"{"sleep_score": 88}"#).unwrap();
        assert_eq!(bag.sleep_score, Some(88));
        assert_eq!(bag.steps, None);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let bag: ManualMetrics =
            serde_json::from_str(r#"{"lift": true, "mystery_field": 3}"#).unwrap();
        assert_eq!(bag.lift, Some(true));
    }
}
