use chrono::{DateTime, Utc};

use tally_types::TransactionId;

/// Per-invocation inputs the host supplies with every call.
///
/// The contract never reads a clock or generates an id itself; determinism
/// requires both to arrive from outside, fixed for the whole invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxContext {
    tx_id: TransactionId,
    timestamp: DateTime<Utc>,
}

impl TxContext {
    /// Wrap host-supplied invocation inputs.
    pub fn new(tx_id: TransactionId, timestamp: DateTime<Utc>) -> Self {
        Self { tx_id, timestamp }
    }

    /// Host-side convenience: a fresh time-ordered id and the current
    /// wall clock. For local runners and tests; a real host derives both
    /// from its own transaction machinery.
    pub fn generate() -> Self {
        Self::new(TransactionId::new(), Utc::now())
    }

    /// The transaction id assigned to this invocation.
    pub fn tx_id(&self) -> TransactionId {
        self.tx_id
    }

    /// The timestamp assigned to this invocation.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_supplied_values() {
        let id = TransactionId::new();
        let at: DateTime<Utc> = "2024-05-01T12:00:00Z".parse().unwrap();
        let ctx = TxContext::new(id, at);
        assert_eq!(ctx.tx_id(), id);
        assert_eq!(ctx.timestamp(), at);
    }

    #[test]
    fn generate_produces_distinct_contexts() {
        let a = TxContext::generate();
        let b = TxContext::generate();
        assert_ne!(a.tx_id(), b.tx_id());
    }
}
