use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Explicit fetch result: a missing object is an ordinary outcome (empty
/// prior state), not an error. Hard failures still come back as `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetch {
    Found(Vec<u8>),
    NotFound,
}

/// Remote blob service at the granularity the sync protocol needs.
///
/// Keys are `/`-separated paths (`snapshots/vitals.json`, `manual/<id>`).
/// Implementations must make `put` an atomic replace: a reader never sees a
/// partially-written object. The protocol assumes a single active writer;
/// two racing clients are last-upload-wins.
pub trait BlobStore {
    fn fetch(&self, key: &str) -> Result<Fetch>;
    fn put(&self, key: &str, bytes: &[u8]) -> Result<()>;
    /// List keys under a prefix, non-recursive.
    fn list(&self, prefix: &str) -> Result<Vec<String>>;
    /// Delete a key. Deleting a missing key is a no-op so compaction can be
    /// retried safely.
    fn delete(&self, key: &str) -> Result<()>;
}

/// Filesystem-backed blob store rooted at a directory, typically a synced
/// or mounted drive. Object-storage backends implement the same trait.
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.split('/').any(|part| part.is_empty() || part == "..") {
            return Err(Error::Blob(format!("invalid blob key: {:?}", key)));
        }
        Ok(self.root.join(key))
    }
}

impl BlobStore for FsBlobStore {
    fn fetch(&self, key: &str) -> Result<Fetch> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Fetch::Found(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Fetch::NotFound),
            Err(err) => Err(err.into()),
        }
    }

    fn put(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        write_atomic(&path, bytes)
    }

    fn list(&self, prefix: &str) -> Result<Vec<String>> {
        let dir = self.path_for(prefix.trim_end_matches('/'))?;
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                let name = entry.file_name().to_string_lossy().into_owned();
                // In-flight temp files are not objects.
                if name.ends_with(".tmp") {
                    continue;
                }
                keys.push(format!("{}{}", ensure_trailing_slash(prefix), name));
            }
        }
        keys.sort();
        Ok(keys)
    }

    fn delete(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

fn ensure_trailing_slash(prefix: &str) -> String {
    if prefix.ends_with('/') {
        prefix.to_string()
    } else {
        format!("{}/", prefix)
    }
}

/// Write-to-temp-then-rename so a killed process never leaves a truncated
/// object where a committed one used to be.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = path.with_extension(match path.extension() {
        Some(ext) => format!("{}.tmp", ext.to_string_lossy()),
        None => "tmp".to_string(),
    });
    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn fetch_missing_is_not_found_not_error() {
        let dir = TempDir::new().unwrap();
        let store = FsBlobStore::new(dir.path());
        assert_eq!(store.fetch("snapshots/vitals.json").unwrap(), Fetch::NotFound);
    }

    #[test]
    fn put_then_fetch_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = FsBlobStore::new(dir.path());
        store.put("snapshots/vitals.json", b"[]").unwrap();
        assert_eq!(
            store.fetch("snapshots/vitals.json").unwrap(),
            Fetch::Found(b"[]".to_vec())
        );
    }

    #[test]
    fn put_leaves_no_temp_file_behind() {
        let dir = TempDir::new().unwrap();
        let store = FsBlobStore::new(dir.path());
        store.put("manual/a.json", b"{}").unwrap();
        let names: Vec<_> = fs::read_dir(dir.path().join("manual"))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.json".to_string()]);
    }

    #[test]
    fn list_returns_keys_under_prefix() {
        let dir = TempDir::new().unwrap();
        let store = FsBlobStore::new(dir.path());
        store.put("manual/b.json", b"{}").unwrap();
        store.put("manual/a.json", b"{}").unwrap();
        store.put("snapshots/vitals.json", b"[]").unwrap();

        let keys = store.list("manual/").unwrap();
        assert_eq!(keys, vec!["manual/a.json", "manual/b.json"]);
    }

    #[test]
    fn list_missing_prefix_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FsBlobStore::new(dir.path());
        assert!(store.list("manual/").unwrap().is_empty());
    }

    #[test]
    fn delete_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = FsBlobStore::new(dir.path());
        store.put("manual/a.json", b"{}").unwrap();
        store.delete("manual/a.json").unwrap();
        store.delete("manual/a.json").unwrap();
        assert_eq!(store.fetch("manual/a.json").unwrap(), Fetch::NotFound);
    }

    #[test]
    fn rejects_traversal_keys() {
        let dir = TempDir::new().unwrap();
        let store = FsBlobStore::new(dir.path());
        assert!(store.put("../outside", b"x").is_err());
        assert!(store.fetch("a//b").is_err());
    }
}
