use crate::Result;
use crate::config::Config;
use chrono::{NaiveDate, Utc};
use vitals_store::ManualLog;
use vitals_types::{EntryKey, ManualEntry, ManualMetrics};

/// Authors and inspects manual entries in the remote log.
///
/// Submission is independent of the sync cycle: an entry becomes visible in
/// the merged data only after the next online sync folds it in.
pub struct EntryService<'a> {
    config: &'a Config,
}

impl<'a> EntryService<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Record a manual observation for `date` and return its log key.
    pub fn add(&self, date: NaiveDate, fields: ManualMetrics) -> Result<EntryKey> {
        let (store, cipher) = super::open_remote(self.config)?;
        let entry = ManualEntry::new(Utc::now(), date, fields);
        let key = ManualLog::new(&store, &cipher).append(&entry)?;
        Ok(key)
    }

    /// Entries appended but not yet folded by a sync cycle, oldest first.
    pub fn pending(&self) -> Result<Vec<(EntryKey, ManualEntry)>> {
        let (store, cipher) = super::open_remote(self.config)?;
        let pending = ManualLog::new(&store, &cipher).pending()?;
        for key in &pending.malformed {
            eprintln!("Warning: skipping malformed manual entry {}", key);
        }
        Ok(pending.entries)
    }
}
