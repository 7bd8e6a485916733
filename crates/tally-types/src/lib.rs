//! Record types for the Tally inventory ledger.
//!
//! This crate provides the product and transaction records written to the
//! world state, plus the typed keys that address them. Every other Tally
//! crate depends on `tally-types`.
//!
//! # Key Types
//!
//! - [`Product`] — Mutable stock record, overwritten whole on add
//! - [`Transaction`] — Immutable mutation record embedding a product snapshot
//! - [`TransactionId`] — UUID v7 transaction identifier
//! - [`TransactionKind`] — `add` / `sell` classification
//! - [`StateKey`] — Typed world-state key (`product/<id>`, `tx/<id>`)

pub mod key;
pub mod product;
pub mod transaction;

pub use key::{RecordKind, StateKey};
pub use product::{Product, ProductId, RetailerId, SupplierId};
pub use transaction::{Transaction, TransactionId, TransactionKind};
