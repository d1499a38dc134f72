use crate::blob::write_atomic;
use crate::Result;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use vitals_types::DailyRecord;

/// Serialize the full record set as the snapshot document: a JSON array,
/// ascending by date, explicit nulls kept for schema stability.
pub fn to_bytes(records: &[DailyRecord]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(records)?)
}

/// Parse a snapshot document. Unknown fields are ignored and missing
/// optional fields load as null, so old clients read new documents and
/// vice versa.
pub fn from_bytes(bytes: &[u8]) -> Result<Vec<DailyRecord>> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Load the local snapshot. A missing file is an empty prior state, not an
/// error (first run).
pub fn load(path: &Path) -> Result<Vec<DailyRecord>> {
    match fs::read(path) {
        Ok(bytes) => from_bytes(&bytes),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(err) => Err(err.into()),
    }
}

/// Persist the local snapshot atomically (temp-then-rename), so an
/// interrupted run cannot corrupt the previously committed copy.
pub fn save(path: &Path, records: &[DailyRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    write_atomic(path, &to_bytes(records)?)
}

/// Content fingerprint of a serialized snapshot, used to detect no-op sync
/// cycles and skip the remote upload.
pub fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
