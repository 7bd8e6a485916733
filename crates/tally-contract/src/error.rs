/// Errors produced by contract operations.
///
/// Every error is terminal for the invocation: the host surfaces the
/// message to the caller and nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    /// Wrong arity or a malformed field in the argument list.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// No record under the requested key (or the read itself failed).
    #[error("no record under key {key}")]
    NotFound { key: String },

    /// Requested more stock than the product has on hand.
    #[error("insufficient inventory: requested {requested}, available {available}")]
    InsufficientInventory { requested: u32, available: u32 },

    /// A record failed to encode, or stored bytes failed to decode.
    #[error("serialization error: {0}")]
    SerializationFailed(String),

    /// The store rejected a write.
    #[error("write failed for key {key}: {reason}")]
    StoreWriteFailed { key: String, reason: String },

    /// The verb does not name a registered operation.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),
}

/// Result alias for contract operations.
pub type ContractResult<T> = Result<T, ContractError>;
