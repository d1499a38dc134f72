use crate::metrics::ManualMetrics;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Key of a pending manual entry in the blob store (relative to the
/// `manual/` prefix owner).
pub type EntryKey = String;

/// One out-of-band user submission, stored as its own small encrypted blob
/// until a reconciliation pass folds it into a `DailyRecord` and compacts
/// it away.
///
/// Multiple entries may target the same date; the one with the newest
/// `created_at` wins per field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualEntry {
    pub created_at: DateTime<Utc>,
    pub date: NaiveDate,
    #[serde(flatten)]
    pub fields: ManualMetrics,
}

impl ManualEntry {
    pub fn new(created_at: DateTime<Utc>, date: NaiveDate, fields: ManualMetrics) -> Self {
        Self {
            created_at,
            date,
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_round_trips() {
        let entry = ManualEntry::new(
            "2024-03-01T08:30:00Z".parse().unwrap(),
            "2024-02-29".parse().unwrap(),
            ManualMetrics {
                bodyweight_kg: Some(79.4),
                lift: Some(true),
            },
        );
        let json = serde_json::to_string(&entry).unwrap();
        let back: ManualEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn entry_with_bad_date_fails_to_parse() {
        let raw = r#"{"created_at": "2024-03-01T08:30:00Z", "date": "not-a-day", "lift": true}"#;
        assert!(serde_json::from_str::<ManualEntry>(raw).is_err());
    }
}
