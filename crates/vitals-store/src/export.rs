use crate::Result;
use crate::blob::write_atomic;
use std::fs;
use std::path::Path;
use vitals_types::{DailyRecord, Source, fields_for};

/// Column headers for the tabular export: `date`, then `{source}__{field}`
/// for every known source and field, in registry order. The column set is
/// derived from the schema, not from the data, so rows line up across runs
/// even when a source never reported.
pub fn columns() -> Vec<String> {
    let mut cols = vec!["date".to_string()];
    for source in Source::ALL {
        for field in fields_for(source) {
            cols.push(format!("{}__{}", source, field));
        }
    }
    cols
}

/// Render the record set as CSV: one row per date, empty cells for nulls.
/// Read-side only; the merge engine never reads this back.
pub fn to_csv_bytes(records: &[DailyRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(columns())?;

    for record in records {
        let mut row = vec![record.date.to_string()];
        for source in Source::ALL {
            for field in fields_for(source) {
                row.push(
                    record
                        .metric(source, field)
                        .map(|v| v.to_string())
                        .unwrap_or_default(),
                );
            }
        }
        writer.write_record(&row)?;
    }

    writer
        .into_inner()
        .map_err(|err| crate::Error::Io(err.into_error()))
}

/// Write the CSV export atomically next to the snapshot.
pub fn write_csv(path: &Path, records: &[DailyRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    write_atomic(path, &to_csv_bytes(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitals_testing::fixtures::{daily_oura, daily_strava};
    use vitals_types::OuraMetrics;

    #[test]
    fn header_contains_every_source_field_column() {
        let cols = columns();
        assert_eq!(cols[0], "date");
        assert!(cols.contains(&"oura__sleep_score".to_string()));
        assert!(cols.contains(&"garmin__vo2_max".to_string()));
        assert!(cols.contains(&"manual__lift".to_string()));
        // date + 8 oura + 4 cronometer + 2 strava + 6 garmin + 2 manual
        assert_eq!(cols.len(), 23);
    }

    #[test]
    fn rows_align_with_header_and_leave_nulls_empty() {
        let records = vec![
            daily_oura(
                "2024-01-01",
                OuraMetrics {
                    sleep_score: Some(70),
                    ..Default::default()
                },
            ),
            daily_strava("2024-01-02", 5.0),
        ];
        let bytes = to_csv_bytes(&records).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);

        let header: Vec<&str> = lines[0].split(',').collect();
        let row1: Vec<&str> = lines[1].split(',').collect();
        assert_eq!(header.len(), row1.len());

        let score_idx = header.iter().position(|c| *c == "oura__sleep_score").unwrap();
        let dist_idx = header
            .iter()
            .position(|c| *c == "strava__total_distance_km")
            .unwrap();
        assert_eq!(row1[0], "2024-01-01");
        assert_eq!(row1[score_idx], "70");
        assert_eq!(row1[dist_idx], "");

        let row2: Vec<&str> = lines[2].split(',').collect();
        assert_eq!(row2[dist_idx], "5");
        assert_eq!(row2[score_idx], "");
    }

    #[test]
    fn empty_set_yields_header_only() {
        let bytes = to_csv_bytes(&[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
