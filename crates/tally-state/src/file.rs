use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use tally_types::StateKey;

use crate::error::{StateError, StateResult};
use crate::traits::StateStore;

/// Single-file snapshot store for local development.
///
/// The whole keyspace is held in memory and mirrored to one file: the map is
/// loaded on open and rewritten in full after every put. The rewrite goes to
/// a sibling temp file first and is renamed over the original, so a crash
/// mid-write never leaves a torn file behind.
///
/// On-disk format: a bincode-encoded `BTreeMap<String, Vec<u8>>`.
pub struct FileStateStore {
    /// Path to the snapshot file.
    path: PathBuf,
    /// Entries behind a mutex so puts serialize with the file rewrite.
    entries: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl FileStateStore {
    /// Open (or start) a state file at the given path.
    ///
    /// A missing or zero-length file starts an empty store; the file itself
    /// is first written on the first put. A present but undecodable file is
    /// an error, never silently reset.
    pub fn open(path: &Path) -> StateResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let entries = match fs::read(path) {
            Ok(bytes) if bytes.is_empty() => BTreeMap::new(),
            Ok(bytes) => {
                bincode::deserialize(&bytes).map_err(|e| StateError::Corrupt {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        debug!(path = %path.display(), keys = entries.len(), "state file opened");
        Ok(Self {
            path: path.to_path_buf(),
            entries: Mutex::new(entries),
        })
    }

    /// Path to the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("state mutex poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().expect("state mutex poisoned").is_empty()
    }

    /// Serialize the whole map and rename it over the previous snapshot.
    fn persist(&self, entries: &BTreeMap<String, Vec<u8>>) -> StateResult<()> {
        let payload = bincode::serialize(entries)
            .map_err(|e| StateError::Serialization(e.to_string()))?;

        let tmp = self.path.with_extension("tmp");
        {
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&tmp)?;
            let mut writer = BufWriter::new(file);
            writer.write_all(&payload)?;
            writer.flush()?;
            writer.get_ref().sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl StateStore for FileStateStore {
    fn get(&self, key: &StateKey) -> StateResult<Option<Vec<u8>>> {
        let map = self.entries.lock().expect("state mutex poisoned");
        Ok(map.get(&key.to_string()).cloned())
    }

    fn put(&self, key: &StateKey, value: &[u8]) -> StateResult<()> {
        let mut map = self.entries.lock().expect("state mutex poisoned");
        map.insert(key.to_string(), value.to_vec());
        self.persist(&map)?;
        debug!(key = %key, len = value.len(), "state file put");
        Ok(())
    }
}

impl std::fmt::Debug for FileStateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("FileStateStore")
            .field("path", &self.path)
            .field("key_count", &count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_types::{ProductId, RetailerId};

    fn product_key(id: u64) -> StateKey {
        StateKey::product(ProductId(id))
    }

    #[test]
    fn open_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStateStore::open(&dir.path().join("state.bin")).unwrap();
        assert!(store.is_empty());
        assert!(store.get(&product_key(1)).unwrap().is_none());
    }

    #[test]
    fn put_then_get_returns_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStateStore::open(&dir.path().join("state.bin")).unwrap();

        store.put(&product_key(1), b"value").unwrap();
        let read_back = store.get(&product_key(1)).unwrap().expect("should exist");
        assert_eq!(read_back, b"value");
    }

    #[test]
    fn entries_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.bin");

        {
            let store = FileStateStore::open(&path).unwrap();
            store.put(&product_key(1), b"persisted").unwrap();
            store.put(&StateKey::transaction(RetailerId(9)), b"tx").unwrap();
        }

        let store = FileStateStore::open(&path).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&product_key(1)).unwrap().unwrap(), b"persisted");
        assert_eq!(
            store
                .get(&StateKey::transaction(RetailerId(9)))
                .unwrap()
                .unwrap(),
            b"tx"
        );
    }

    #[test]
    fn overwrite_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.bin");

        {
            let store = FileStateStore::open(&path).unwrap();
            store.put(&product_key(1), b"old").unwrap();
            store.put(&product_key(1), b"new").unwrap();
        }

        let store = FileStateStore::open(&path).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&product_key(1)).unwrap().unwrap(), b"new");
    }

    #[test]
    fn zero_length_file_treated_as_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.bin");
        fs::write(&path, b"").unwrap();

        let store = FileStateStore::open(&path).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn corrupt_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.bin");
        fs::write(&path, b"not a bincode map").unwrap();

        let err = FileStateStore::open(&path).unwrap_err();
        assert!(matches!(err, StateError::Corrupt { .. }));
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/state.bin");

        let store = FileStateStore::open(&path).unwrap();
        store.put(&product_key(1), b"x").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.bin");

        let store = FileStateStore::open(&path).unwrap();
        store.put(&product_key(1), b"x").unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn debug_format() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStateStore::open(&dir.path().join("state.bin")).unwrap();
        let debug = format!("{store:?}");
        assert!(debug.contains("FileStateStore"));
        assert!(debug.contains("key_count"));
    }
}
