//! World-state storage for the Tally inventory ledger.
//!
//! The contract core sees the world state through the [`StateStore`] trait:
//! opaque bytes under typed string keys, with last-write-wins semantics.
//! This crate provides that boundary plus two implementations:
//!
//! - [`InMemoryStateStore`] — HashMap-backed, for tests and embedding
//! - [`FileStateStore`] — single-file snapshot store for local development

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use error::{StateError, StateResult};
pub use file::FileStateStore;
pub use memory::InMemoryStateStore;
pub use traits::StateStore;
