use crate::Result;
use chrono::NaiveDate;
use vitals_types::{Source, SourceRecord};

/// One external data provider.
///
/// Responsibilities:
/// - Fetch observations for an inclusive date range
/// - Pre-aggregate to at most one record per day
/// - Normalize timestamp-granular upstream data to calendar dates
///
/// A failing connector is isolated by the sync cycle: its source simply
/// contributes nothing for the run, and the failure is reported per-source.
/// Vendor HTTP connectors (Oura, Garmin, ...) live outside this workspace
/// and plug in through this trait.
pub trait Connector {
    /// The source this connector feeds.
    fn source(&self) -> Source;

    /// Fetch records for `[start, end]`, both ends inclusive. Records dated
    /// outside the range are discarded by the caller.
    fn fetch(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<SourceRecord>>;
}
