use crate::config::Config;
use crate::Result;
use chrono::{Days, NaiveDate, Utc};
use std::path::{Path, PathBuf};
use vitals_engine::{assemble, fold_manual_entries, merge};
use vitals_providers::{Connector, FixtureConnector, SyntheticConnector};
use vitals_store::{BlobStore, EXPORT_KEY, Fetch, ManualLog, SNAPSHOT_KEY, export, snapshot};
use vitals_types::{DailyRecord, Source};

/// Parameters for one sync cycle.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Size of the fetch window in days, ending yesterday (today's data is
    /// never complete).
    pub past_days: u64,
    /// Restrict the run to these sources; `None` means all.
    pub sources: Option<Vec<Source>>,
    /// Exchange snapshots with the remote blob store.
    pub online: bool,
    /// Serve seeded synthetic data instead of configured connectors.
    pub synthetic: bool,
    pub seed: u64,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            past_days: 7,
            sources: None,
            online: false,
            synthetic: false,
            seed: 0,
        }
    }
}

/// What happened to one source during a run. Every gap in the merged data
/// is attributable to a specific outcome here.
#[derive(Debug, Clone)]
pub enum SourceOutcome {
    Fetched { records: usize },
    Disabled,
    NoConnector,
    Failed { error: String },
}

/// Result of a sync cycle.
#[derive(Debug)]
pub struct SyncReport {
    pub window: (NaiveDate, NaiveDate),
    pub outcomes: Vec<(Source, SourceOutcome)>,
    pub manual_folded: usize,
    pub manual_compacted: usize,
    pub manual_malformed: usize,
    /// Days in the merged snapshot after the run.
    pub total_days: usize,
    /// Whether the remote snapshot served as the merge base.
    pub remote_base: bool,
    /// Whether new content was uploaded (false offline or when the merge
    /// was a no-op).
    pub uploaded: bool,
    pub snapshot_path: PathBuf,
    pub export_path: PathBuf,
}

/// Orchestrates one load → fetch → merge → persist → upload cycle.
///
/// Precondition: a single active sync client. Two clients racing on the
/// same remote store are last-upload-wins; there is no lease or lock.
pub struct SyncService<'a> {
    config: &'a Config,
    data_dir: &'a Path,
}

impl<'a> SyncService<'a> {
    pub fn new(config: &'a Config, data_dir: &'a Path) -> Self {
        Self { config, data_dir }
    }

    pub fn sync_cycle(&self, options: &SyncOptions) -> Result<SyncReport> {
        // Today's data is still accumulating; the window ends yesterday.
        let end = Utc::now()
            .date_naive()
            .checked_sub_days(Days::new(1))
            .unwrap_or(NaiveDate::MIN);
        let start = end
            .checked_sub_days(Days::new(options.past_days))
            .unwrap_or(NaiveDate::MIN);
        self.run(options, (start, end))
    }

    /// Same as `sync_cycle` with an explicit window; split out for tests.
    pub fn run(&self, options: &SyncOptions, window: (NaiveDate, NaiveDate)) -> Result<SyncReport> {
        let snapshot_path = self.data_dir.join("vitals.json");
        let export_path = self.data_dir.join("vitals.csv");

        let remote = if options.online {
            Some(super::open_remote(self.config)?)
        } else {
            None
        };

        // (1)+(2)+(3): the remote snapshot, when it exists, is the canonical
        // merge base across devices; otherwise fall back to the local copy.
        let mut remote_base = false;
        let base = match &remote {
            Some((store, cipher)) => match store.fetch(SNAPSHOT_KEY)? {
                Fetch::Found(blob) => {
                    let plaintext = cipher.decrypt(&blob)?;
                    remote_base = true;
                    snapshot::from_bytes(&plaintext)?
                }
                Fetch::NotFound => snapshot::load(&snapshot_path)?,
            },
            None => snapshot::load(&snapshot_path)?,
        };
        let base_fingerprint = snapshot::fingerprint(&snapshot::to_bytes(&base)?);

        // (4): sequential fetches; one failing source never aborts the run.
        let (records, outcomes) = self.fetch_sources(options, window);
        let mut merged = merge(&base, &assemble(&records));

        // Manual entries live in the remote store; fold whatever is pending
        // regardless of the fetch window.
        let mut manual_folded = 0;
        let mut manual_malformed = 0;
        let mut to_compact = Vec::new();
        if let Some((store, cipher)) = &remote {
            let log = ManualLog::new(store, cipher);
            let pending = log.pending()?;
            manual_malformed = pending.malformed.len();
            for key in &pending.malformed {
                eprintln!("Warning: discarding malformed manual entry {}", key);
            }
            let outcome = fold_manual_entries(
                &pending.entries,
                (NaiveDate::MIN, NaiveDate::MAX),
            );
            manual_folded = outcome.records.len();
            merged = merge(&merged, &outcome.records);
            to_compact = outcome.to_delete;
            to_compact.extend(pending.malformed);
        }

        // (6): local persistence, both artifacts atomic.
        snapshot::save(&snapshot_path, &merged)?;
        export::write_csv(&export_path, &merged)?;

        // (7): upload, then compact. Compaction strictly after the upload so
        // a crash in between re-folds instead of losing entries.
        let mut uploaded = false;
        let mut manual_compacted = 0;
        if let Some((store, cipher)) = &remote {
            let merged_bytes = snapshot::to_bytes(&merged)?;
            if !remote_base || snapshot::fingerprint(&merged_bytes) != base_fingerprint {
                store.put(SNAPSHOT_KEY, &cipher.encrypt(&merged_bytes)?)?;
                store.put(EXPORT_KEY, &cipher.encrypt(&export::to_csv_bytes(&merged)?)?)?;
                uploaded = true;
            } else if matches!(store.fetch(EXPORT_KEY)?, Fetch::NotFound) {
                // A prior run may have died between the two puts. The
                // fingerprint only vouches for the snapshot, so backfill the
                // export here or it stays missing forever.
                store.put(EXPORT_KEY, &cipher.encrypt(&export::to_csv_bytes(&merged)?)?)?;
            }
            let log = ManualLog::new(store, cipher);
            log.delete(&to_compact)?;
            manual_compacted = to_compact.len();
        }

        Ok(SyncReport {
            window,
            outcomes,
            manual_folded,
            manual_compacted,
            manual_malformed,
            total_days: merged.len(),
            remote_base,
            uploaded,
            snapshot_path,
            export_path,
        })
    }

    fn fetch_sources(
        &self,
        options: &SyncOptions,
        window: (NaiveDate, NaiveDate),
    ) -> (Vec<vitals_types::SourceRecord>, Vec<(Source, SourceOutcome)>) {
        let (start, end) = window;
        let mut records = Vec::new();
        let mut outcomes = Vec::new();

        for source in Source::ALL {
            if let Some(selected) = &options.sources
                && !selected.contains(&source)
            {
                continue;
            }

            let connector: Box<dyn Connector> = if options.synthetic {
                Box::new(SyntheticConnector::new(source, options.seed))
            } else {
                let source_config = self.config.source(source);
                if !source_config.enabled {
                    outcomes.push((source, SourceOutcome::Disabled));
                    continue;
                }
                match source_config.fixture {
                    Some(path) => Box::new(FixtureConnector::new(source, path)),
                    None => {
                        outcomes.push((source, SourceOutcome::NoConnector));
                        continue;
                    }
                }
            };

            match connector.fetch(start, end) {
                Ok(mut fetched) => {
                    // Defend the window contract even against sloppy
                    // connectors.
                    fetched.retain(|r| r.date >= start && r.date <= end);
                    outcomes.push((
                        source,
                        SourceOutcome::Fetched {
                            records: fetched.len(),
                        },
                    ));
                    records.extend(fetched);
                }
                Err(err) => {
                    outcomes.push((
                        source,
                        SourceOutcome::Failed {
                            error: err.to_string(),
                        },
                    ));
                }
            }
        }

        (records, outcomes)
    }
}

/// Load the locally persisted snapshot (for read-side commands).
pub fn load_local(data_dir: &Path) -> Result<Vec<DailyRecord>> {
    Ok(snapshot::load(&data_dir.join("vitals.json"))?)
}
