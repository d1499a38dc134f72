pub mod blob;
pub mod crypto;
pub mod error;
pub mod export;
pub mod manual_log;
pub mod snapshot;

pub use blob::{BlobStore, Fetch, FsBlobStore};
pub use crypto::Cipher;
pub use error::{Error, Result};
pub use manual_log::{ManualLog, PendingEntries};

/// Remote object key for the structured snapshot.
pub const SNAPSHOT_KEY: &str = "snapshots/vitals.json";

/// Remote object key for the tabular export.
pub const EXPORT_KEY: &str = "snapshots/vitals.csv";

/// Remote namespace for pending manual entries, one object per entry.
pub const MANUAL_PREFIX: &str = "manual/";
