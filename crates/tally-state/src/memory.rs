use std::collections::HashMap;
use std::sync::RwLock;

use tally_types::StateKey;

use crate::error::StateResult;
use crate::traits::StateStore;

/// In-memory, HashMap-based world state.
///
/// Intended for tests and embedding. All entries are held in memory behind a
/// `RwLock` for safe concurrent access. Values are cloned on read.
pub struct InMemoryStateStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryStateStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.entries.write().expect("lock poisoned").clear();
    }

    /// Return a sorted list of all rendered keys in the store.
    pub fn keys(&self) -> Vec<String> {
        let map = self.entries.read().expect("lock poisoned");
        let mut keys: Vec<String> = map.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl Default for InMemoryStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore for InMemoryStateStore {
    fn get(&self, key: &StateKey) -> StateResult<Option<Vec<u8>>> {
        let map = self.entries.read().expect("lock poisoned");
        Ok(map.get(&key.to_string()).cloned())
    }

    fn put(&self, key: &StateKey, value: &[u8]) -> StateResult<()> {
        let mut map = self.entries.write().expect("lock poisoned");
        map.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryStateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryStateStore")
            .field("key_count", &count)
            .finish()
    }
}
