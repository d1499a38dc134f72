use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use vitals_types::{DailyRecord, MetricBag};

/// Merge a freshly-fetched record set into an existing one.
///
/// Sources are polled with overlapping windows, so a run that happens not to
/// return a value (rate limit, partial outage) must never blank out a value
/// learned earlier. The rule, applied per date, per source slot, per field:
/// non-null in `new` wins, null in `new` leaves `old` untouched. Dates only
/// in `old` are preserved; dates only in `new` are inserted verbatim.
///
/// Pure and total. Output is ascending by date.
pub fn merge(old: &[DailyRecord], new: &[DailyRecord]) -> Vec<DailyRecord> {
    let mut by_date: BTreeMap<NaiveDate, DailyRecord> =
        old.iter().map(|d| (d.date, d.clone())).collect();

    for incoming in new {
        match by_date.entry(incoming.date) {
            Entry::Vacant(slot) => {
                slot.insert(incoming.clone());
            }
            Entry::Occupied(mut slot) => {
                let existing = slot.get_mut();
                upsert_slot(&mut existing.oura, incoming.oura.as_ref());
                upsert_slot(&mut existing.cronometer, incoming.cronometer.as_ref());
                upsert_slot(&mut existing.strava, incoming.strava.as_ref());
                upsert_slot(&mut existing.garmin, incoming.garmin.as_ref());
                upsert_slot(&mut existing.manual, incoming.manual.as_ref());
            }
        }
    }

    by_date.into_values().collect()
}

/// Upsert one source slot: a null incoming slot is an absence, not an
/// erasure; a non-null incoming slot merges field by field.
fn upsert_slot<B: MetricBag>(slot: &mut Option<B>, incoming: Option<&B>) {
    match (slot.as_mut(), incoming) {
        (_, None) => {}
        (Some(existing), Some(newer)) => existing.absorb(newer),
        (None, Some(newer)) => *slot = Some(newer.clone()),
    }
}
