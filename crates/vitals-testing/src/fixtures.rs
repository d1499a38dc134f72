//! Builders for dates, records, and manual entries used across crate tests.

use chrono::NaiveDate;
use vitals_types::{
    DailyRecord, EntryKey, GarminMetrics, ManualEntry, ManualMetrics, OuraMetrics, SourceMetrics,
    SourceRecord, StravaMetrics,
};

/// Parse a `YYYY-MM-DD` literal. Panics on bad input; tests only.
pub fn date(s: &str) -> NaiveDate {
    s.parse().expect("valid test date")
}

/// An Oura record carrying just a sleep score.
pub fn oura_sleep(day: &str, sleep_score: i64) -> SourceRecord {
    SourceRecord::new(
        date(day),
        SourceMetrics::Oura(OuraMetrics {
            sleep_score: Some(sleep_score),
            ..Default::default()
        }),
    )
}

/// A Garmin record carrying just a distance.
pub fn garmin_distance(day: &str, km: f64) -> SourceRecord {
    SourceRecord::new(
        date(day),
        SourceMetrics::Garmin(GarminMetrics {
            total_distance_km: Some(km),
            ..Default::default()
        }),
    )
}

/// An empty daily record for a date.
pub fn daily(day: &str) -> DailyRecord {
    DailyRecord::new(date(day))
}

/// A daily record holding one Oura bag.
pub fn daily_oura(day: &str, bag: OuraMetrics) -> DailyRecord {
    let mut record = DailyRecord::new(date(day));
    record.set(SourceMetrics::Oura(bag));
    record
}

/// A daily record holding one Strava distance.
pub fn daily_strava(day: &str, km: f64) -> DailyRecord {
    let mut record = DailyRecord::new(date(day));
    record.set(SourceMetrics::Strava(StravaMetrics {
        total_distance_km: Some(km),
        total_duration_hours: None,
    }));
    record
}

/// A keyed manual entry with an RFC 3339 creation timestamp.
pub fn manual_entry(
    key: &str,
    created_at: &str,
    day: &str,
    fields: ManualMetrics,
) -> (EntryKey, ManualEntry) {
    (
        key.to_string(),
        ManualEntry::new(
            created_at.parse().expect("valid test timestamp"),
            date(day),
            fields,
        ),
    )
}
