use crate::metrics::{
    CronometerMetrics, GarminMetrics, ManualMetrics, MetricBag, MetricValue, OuraMetrics,
    StravaMetrics,
};
use crate::source::Source;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Metric bag tagged by its provider.
///
/// One variant per known source. Serialized with an explicit `source` tag so
/// fixture files and manual entries are self-describing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum SourceMetrics {
    Oura(OuraMetrics),
    Cronometer(CronometerMetrics),
    Strava(StravaMetrics),
    Garmin(GarminMetrics),
    Manual(ManualMetrics),
}

impl SourceMetrics {
    pub fn source(&self) -> Source {
        match self {
            SourceMetrics::Oura(_) => Source::Oura,
            SourceMetrics::Cronometer(_) => Source::Cronometer,
            SourceMetrics::Strava(_) => Source::Strava,
            SourceMetrics::Garmin(_) => Source::Garmin,
            SourceMetrics::Manual(_) => Source::Manual,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            SourceMetrics::Oura(bag) => bag.is_empty(),
            SourceMetrics::Cronometer(bag) => bag.is_empty(),
            SourceMetrics::Strava(bag) => bag.is_empty(),
            SourceMetrics::Garmin(bag) => bag.is_empty(),
            SourceMetrics::Manual(bag) => bag.is_empty(),
        }
    }
}

/// One provider's observation for one calendar day.
///
/// Produced by connectors. All comparisons downstream are by day; connectors
/// normalize timestamp-granular APIs to a calendar date before building one
/// of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub metrics: SourceMetrics,
}

impl SourceRecord {
    pub fn new(date: NaiveDate, metrics: SourceMetrics) -> Self {
        Self { date, metrics }
    }

    pub fn source(&self) -> Source {
        self.metrics.source()
    }
}

/// Per-date aggregate across all sources.
///
/// At most one metric bag per source. Created when a connector or manual
/// entry first observes a date; never deleted afterwards, so exports keep a
/// stable row per day even when every slot is null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub oura: Option<OuraMetrics>,
    pub cronometer: Option<CronometerMetrics>,
    pub strava: Option<StravaMetrics>,
    pub garmin: Option<GarminMetrics>,
    pub manual: Option<ManualMetrics>,
}

impl DailyRecord {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            oura: None,
            cronometer: None,
            strava: None,
            garmin: None,
            manual: None,
        }
    }

    /// Replace the slot for the record's source wholesale.
    pub fn set(&mut self, metrics: SourceMetrics) {
        match metrics {
            SourceMetrics::Oura(bag) => self.oura = Some(bag),
            SourceMetrics::Cronometer(bag) => self.cronometer = Some(bag),
            SourceMetrics::Strava(bag) => self.strava = Some(bag),
            SourceMetrics::Garmin(bag) => self.garmin = Some(bag),
            SourceMetrics::Manual(bag) => self.manual = Some(bag),
        }
    }

    /// Read one metric by (source, field). Null slots and unknown field
    /// names both read as `None`.
    pub fn metric(&self, source: Source, field: &str) -> Option<MetricValue> {
        match source {
            Source::Oura => self.oura.as_ref().and_then(|b| b.get(field)),
            Source::Cronometer => self.cronometer.as_ref().and_then(|b| b.get(field)),
            Source::Strava => self.strava.as_ref().and_then(|b| b.get(field)),
            Source::Garmin => self.garmin.as_ref().and_then(|b| b.get(field)),
            Source::Manual => self.manual.as_ref().and_then(|b| b.get(field)),
        }
    }

    pub fn has_source(&self, source: Source) -> bool {
        match source {
            Source::Oura => self.oura.is_some(),
            Source::Cronometer => self.cronometer.is_some(),
            Source::Strava => self.strava.is_some(),
            Source::Garmin => self.garmin.is_some(),
            Source::Manual => self.manual.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn source_record_serializes_with_tag() {
        let record = SourceRecord::new(
            date("2024-01-01"),
            SourceMetrics::Oura(OuraMetrics {
                sleep_score: Some(70),
                ..Default::default()
            }),
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["source"], "oura");
        assert_eq!(json["date"], "2024-01-01");
        assert_eq!(json["sleep_score"], 70);

        let back: SourceRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn daily_record_set_and_metric() {
        let mut daily = DailyRecord::new(date("2024-01-01"));
        daily.set(SourceMetrics::Garmin(GarminMetrics {
            steps: Some(12_000),
            ..Default::default()
        }));
        assert_eq!(
            daily.metric(Source::Garmin, "steps"),
            Some(MetricValue::Int(12_000))
        );
        assert_eq!(daily.metric(Source::Oura, "steps"), None);
        assert!(daily.has_source(Source::Garmin));
        assert!(!daily.has_source(Source::Manual));
    }

    #[test]
    fn daily_record_tolerates_missing_and_extra_fields() {
        // Old documents without newer slots, and documents written by a
        // newer schema, must both load.
        let daily: DailyRecord = serde_json::from_str(
            r#"{"date": "2024-01-01", "oura": {"sleep_score": 70}, "whoop": {"recovery": 55}}"#,
        )
        .unwrap();
        assert_eq!(daily.oura.as_ref().unwrap().sleep_score, Some(70));
        assert!(daily.garmin.is_none());
    }
}
