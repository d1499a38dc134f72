use chrono::{DateTime, NaiveDate};
use vitals_types::{Error, Result};

/// Normalize an upstream date representation to a calendar day.
///
/// Providers disagree on granularity: some APIs are day-granular
/// (`2024-01-01`), some emit full timestamps (`2024-01-01T23:15:00Z` or
/// with an offset). Everything downstream compares by day, so the
/// time-of-day component is dropped here.
pub fn normalize_date(raw: &str) -> Result<NaiveDate> {
    if let Ok(date) = raw.parse::<NaiveDate>() {
        return Ok(date);
    }
    if let Ok(ts) = raw.parse::<DateTime<chrono::FixedOffset>>() {
        return Ok(ts.date_naive());
    }
    // Timestamp without offset, e.g. "2024-01-01T23:15:00".
    if let Ok(ts) = raw.parse::<chrono::NaiveDateTime>() {
        return Ok(ts.date());
    }
    Err(Error::InvalidDate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitals_testing::fixtures::date;

    #[test]
    fn accepts_plain_dates() {
        assert_eq!(normalize_date("2024-01-01").unwrap(), date("2024-01-01"));
    }

    #[test]
    fn truncates_utc_timestamps() {
        assert_eq!(
            normalize_date("2024-01-01T23:15:00Z").unwrap(),
            date("2024-01-01")
        );
    }

    #[test]
    fn truncates_offset_and_naive_timestamps() {
        assert_eq!(
            normalize_date("2024-01-02T01:00:00+02:00").unwrap(),
            date("2024-01-02")
        );
        assert_eq!(
            normalize_date("2024-01-03T08:00:00").unwrap(),
            date("2024-01-03")
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(normalize_date("yesterday").is_err());
    }
}
