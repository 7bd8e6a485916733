use tally_types::StateKey;

use crate::error::StateResult;

/// Key-value world state as the host exposes it to the contract.
///
/// All implementations must satisfy these invariants:
/// - `put` unconditionally overwrites: last write wins, no merging.
/// - `get` after a successful `put` of the same key returns exactly the
///   bytes written, untransformed.
/// - The store never interprets values — serialization is the caller's
///   concern.
/// - Absence is `Ok(None)`, never an error; I/O failures are propagated,
///   never silently ignored.
/// - Concurrent reads are safe.
pub trait StateStore: Send + Sync {
    /// Read the value under a key.
    ///
    /// Returns `Ok(None)` if the key has never been written.
    fn get(&self, key: &StateKey) -> StateResult<Option<Vec<u8>>>;

    /// Write a value under a key, replacing any previous value.
    fn put(&self, key: &StateKey, value: &[u8]) -> StateResult<()>;
}
