use chrono::NaiveDate;
use std::collections::BTreeMap;
use vitals_types::{DailyRecord, SourceRecord};

/// Group a flat list of connector records into one `DailyRecord` per date.
///
/// Input order is irrelevant. Connectors are expected to pre-aggregate to
/// one record per day; if one emits duplicates for the same (date, source),
/// the last record processed wins. Output is ascending by date.
pub fn assemble(records: &[SourceRecord]) -> Vec<DailyRecord> {
    let mut by_date: BTreeMap<NaiveDate, DailyRecord> = BTreeMap::new();

    for record in records {
        by_date
            .entry(record.date)
            .or_insert_with(|| DailyRecord::new(record.date))
            .set(record.metrics.clone());
    }

    by_date.into_values().collect()
}
