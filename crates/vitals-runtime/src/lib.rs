pub mod config;
pub mod error;
pub mod ops;

pub use config::{Config, RemoteConfig, SourceConfig, resolve_data_dir};
pub use error::{Error, Result};
pub use ops::{EntryService, SourceOutcome, SyncOptions, SyncReport, SyncService, load_local};
