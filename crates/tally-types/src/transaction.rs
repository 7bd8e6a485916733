use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Unique identifier for a recorded transaction (UUID v7 for time-ordering).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TransactionId(uuid::Uuid);

impl TransactionId {
    /// Generate a new time-ordered transaction ID (UUID v7).
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    /// Create from an existing UUID.
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }

    /// Short representation (first 8 characters of the UUID).
    pub fn short_id(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TransactionId({})", self.short_id())
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kind of mutation a transaction records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Stock added or replaced wholesale.
    Add,
    /// Stock sold down.
    Sell,
}

impl TransactionKind {
    /// The serialized name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sell => "sell",
        }
    }

    /// Returns `true` for an add transaction.
    pub fn is_add(&self) -> bool {
        matches!(self, Self::Add)
    }

    /// Returns `true` for a sell transaction.
    pub fn is_sell(&self) -> bool {
        matches!(self, Self::Sell)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable record of one inventory mutation.
///
/// Embeds the full post-operation [`Product`] snapshot rather than a
/// reference, so the record stays meaningful after later overwrites of the
/// product it describes. Written once per mutating call, never updated.
///
/// The serialized field names (including `type` for the kind) are a
/// compatibility contract with external ledger readers and must not change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub transaction_id: TransactionId,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub owner: String,
    pub product_snapshot: Product,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{ProductId, RetailerId, SupplierId};

    fn sample_transaction() -> Transaction {
        Transaction {
            transaction_id: TransactionId::new(),
            timestamp: "2024-05-01T12:00:00Z".parse().unwrap(),
            kind: TransactionKind::Add,
            owner: "2".into(),
            product_snapshot: Product {
                retailer_id: RetailerId(1),
                supplier_id: SupplierId(2),
                product_id: ProductId(100),
                product_name: "Shoe".into(),
                brand: "Acme".into(),
                style: "Run".into(),
                size: 9,
                color: "Red".into(),
                quantity: 50,
            },
        }
    }

    #[test]
    fn transaction_id_is_unique() {
        let id1 = TransactionId::new();
        let id2 = TransactionId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn transaction_id_short_format() {
        let id = TransactionId::new();
        assert_eq!(id.short_id().len(), 8);
    }

    #[test]
    fn kind_serialized_names() {
        assert_eq!(
            serde_json::to_string(&TransactionKind::Add).unwrap(),
            "\"add\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionKind::Sell).unwrap(),
            "\"sell\""
        );
        assert_eq!(TransactionKind::Add.as_str(), "add");
        assert!(TransactionKind::Sell.is_sell());
        assert!(!TransactionKind::Sell.is_add());
    }

    #[test]
    fn transaction_wire_field_names() {
        let value = serde_json::to_value(sample_transaction()).unwrap();
        let obj = value.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["owner", "productSnapshot", "timestamp", "transactionId", "type"]
        );
        assert_eq!(value["type"], "add");
        assert_eq!(value["owner"], "2");
        assert_eq!(value["productSnapshot"]["productId"], 100);
    }

    #[test]
    fn timestamp_serializes_as_rfc3339() {
        let value = serde_json::to_value(sample_transaction()).unwrap();
        let raw = value["timestamp"].as_str().unwrap();
        assert!(raw.starts_with("2024-05-01T12:00:00"));
        let parsed: DateTime<Utc> = raw.parse().unwrap();
        assert_eq!(parsed, sample_transaction().timestamp);
    }

    #[test]
    fn serde_roundtrip() {
        let tx = sample_transaction();
        let json = serde_json::to_string(&tx).unwrap();
        let parsed: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(tx, parsed);
    }
}
