use std::fmt;

use crate::product::{ProductId, RetailerId};

/// The record family a state key addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// A product stock record.
    Product,
    /// A transaction record.
    Transaction,
}

impl RecordKind {
    /// The key prefix for this record family.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Transaction => "tx",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A typed key into the world state.
///
/// Products and transactions share one flat keyspace in the backing store;
/// the kind prefix keeps the two record families from colliding:
///
/// - `product/<productId>` — the stock record for a product
/// - `tx/<retailerId>` — the most recent transaction for a retailer
///
/// A transaction key is per *retailer*, not per transaction: each mutation
/// overwrites the retailer's previous transaction record.
///
/// # Example
///
/// ```
/// use tally_types::{ProductId, StateKey};
///
/// let key = StateKey::product(ProductId(42));
/// assert_eq!(key.to_string(), "product/42");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateKey {
    kind: RecordKind,
    id: u64,
}

impl StateKey {
    /// Key of the stock record for a product.
    pub fn product(id: ProductId) -> Self {
        Self {
            kind: RecordKind::Product,
            id: id.0,
        }
    }

    /// Key of the most recent transaction for a retailer.
    ///
    /// Writing under this key replaces the retailer's previous transaction.
    pub fn transaction(id: RetailerId) -> Self {
        Self {
            kind: RecordKind::Transaction,
            id: id.0,
        }
    }

    /// The record family this key addresses.
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// The numeric id in the key suffix.
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl fmt::Debug for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateKey({self})")
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind.prefix(), self.id)
    }
}
