pub mod entry;
pub mod sync;

pub use entry::EntryService;
pub use sync::{SourceOutcome, SyncOptions, SyncReport, SyncService, load_local};

use crate::config::Config;
use crate::{Error, Result};
use vitals_store::{Cipher, FsBlobStore};

/// Open the configured remote store and derive the blob cipher. Both are
/// required for any operation that touches remote state.
fn open_remote(config: &Config) -> Result<(FsBlobStore, Cipher)> {
    let remote = config.remote.as_ref().ok_or_else(|| {
        Error::Config("this operation requires [remote] in config.toml".to_string())
    })?;
    let secret = config.encryption_secret().ok_or_else(|| {
        Error::Config(
            "this operation requires encryption_key in config.toml or VITALS_ENCRYPTION_KEY"
                .to_string(),
        )
    })?;
    Ok((FsBlobStore::new(&remote.root), Cipher::from_secret(&secret)))
}
