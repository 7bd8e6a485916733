//! The Tally inventory contract core.
//!
//! `tally-contract` is the deterministic state machine at the center of the
//! system: given a verb, positional string arguments, a host-supplied
//! [`TxContext`], and a world-state store, it validates, mutates, and
//! answers — nothing else. One invocation is one synchronous unit of work;
//! no state is carried between calls.
//!
//! # Operations
//!
//! - `addInventory` — create or replace a product record
//! - `sellFromInventory` — decrement stock with an availability check
//! - `viewInventory` — return the stored product bytes verbatim
//! - `getTransactionHistory` — return a retailer's latest transaction

pub mod args;
pub mod context;
pub mod contract;
pub mod error;
pub mod response;

pub use context::TxContext;
pub use contract::{InventoryContract, Operation};
pub use error::{ContractError, ContractResult};
pub use response::Response;
