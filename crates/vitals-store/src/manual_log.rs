use crate::blob::{BlobStore, Fetch};
use crate::crypto::Cipher;
use crate::{Error, MANUAL_PREFIX, Result};
use uuid::Uuid;
use vitals_types::{EntryKey, ManualEntry};

/// Pending entries found in the log, split from entries whose payloads
/// could not be parsed (malformed input, not a transient failure; they are
/// compacted away rather than retried forever).
#[derive(Debug, Default)]
pub struct PendingEntries {
    pub entries: Vec<(EntryKey, ManualEntry)>,
    pub malformed: Vec<EntryKey>,
}

/// Append-only encrypted log of out-of-band manual entries.
///
/// Each entry is its own small object under the `manual/` prefix. The log
/// is written by entry submission, read and compacted by the sync cycle.
pub struct ManualLog<'a> {
    store: &'a dyn BlobStore,
    cipher: &'a Cipher,
}

impl<'a> ManualLog<'a> {
    pub fn new(store: &'a dyn BlobStore, cipher: &'a Cipher) -> Self {
        Self { store, cipher }
    }

    /// Append one entry and return its key.
    pub fn append(&self, entry: &ManualEntry) -> Result<EntryKey> {
        let key = format!(
            "{}{}-{}.json",
            MANUAL_PREFIX,
            entry.created_at.format("%Y%m%dT%H%M%S"),
            Uuid::new_v4()
        );
        let plaintext = serde_json::to_vec(entry)?;
        self.store.put(&key, &self.cipher.encrypt(&plaintext)?)?;
        Ok(key)
    }

    /// Read every pending entry.
    ///
    /// A payload that fails to decrypt is fatal (wrong key, same as the
    /// snapshot); a payload that decrypts but fails to parse is reported as
    /// malformed.
    pub fn pending(&self) -> Result<PendingEntries> {
        let mut result = PendingEntries::default();

        for key in self.store.list(MANUAL_PREFIX)? {
            let Fetch::Found(blob) = self.store.fetch(&key)? else {
                // Raced with a concurrent compaction; nothing to fold.
                continue;
            };
            let plaintext = self.cipher.decrypt(&blob).map_err(|err| match err {
                Error::Integrity(msg) => Error::Integrity(format!("entry {}: {}", key, msg)),
                other => other,
            })?;
            match serde_json::from_slice::<ManualEntry>(&plaintext) {
                Ok(entry) => result.entries.push((key, entry)),
                Err(_) => result.malformed.push(key),
            }
        }

        Ok(result)
    }

    /// Compact entries whose data is durably merged. Idempotent.
    pub fn delete(&self, keys: &[EntryKey]) -> Result<()> {
        for key in keys {
            self.store.delete(key)?;
        }
        Ok(())
    }
}
