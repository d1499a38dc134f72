use chrono::NaiveDate;
use std::collections::BTreeMap;
use vitals_types::{DailyRecord, EntryKey, ManualEntry, MetricBag, SourceMetrics};

/// Result of folding pending manual entries.
#[derive(Debug, Clone, Default)]
pub struct FoldOutcome {
    /// One record per date that received at least one field.
    pub records: Vec<DailyRecord>,
    /// Keys of every entry that contributed, to be compacted away once the
    /// merged snapshot is durable.
    pub to_delete: Vec<EntryKey>,
}

/// Fold pending manual entries into per-date records.
///
/// Only entries dated within `window` (inclusive) are considered; the rest
/// stay pending for a later run. For a given date the entry with the newest
/// `created_at` wins per field, and fields it leaves null fall back to older
/// entries for that date.
///
/// Deleting the `to_delete` keys must wait until the merge result has been
/// durably persisted. If the process dies first, the entries are simply
/// folded again next run; re-applying the same fields is a no-op under the
/// merge upsert rule.
pub fn fold_manual_entries(
    pending: &[(EntryKey, ManualEntry)],
    window: (NaiveDate, NaiveDate),
) -> FoldOutcome {
    let (start, end) = window;

    let mut in_window: Vec<&(EntryKey, ManualEntry)> = pending
        .iter()
        .filter(|(_, e)| e.date >= start && e.date <= end && !e.fields.is_empty())
        .collect();
    // Ascending creation order, so absorbing in sequence leaves the newest
    // entry's non-null fields on top.
    in_window.sort_by_key(|(_, e)| e.created_at);

    let mut by_date: BTreeMap<NaiveDate, DailyRecord> = BTreeMap::new();
    let mut to_delete = Vec::with_capacity(in_window.len());

    for (key, entry) in in_window {
        let daily = by_date
            .entry(entry.date)
            .or_insert_with(|| DailyRecord::new(entry.date));
        match daily.manual.as_mut() {
            Some(bag) => bag.absorb(&entry.fields),
            None => daily.set(SourceMetrics::Manual(entry.fields.clone())),
        }
        to_delete.push(key.clone());
    }

    FoldOutcome {
        records: by_date.into_values().collect(),
        to_delete,
    }
}
