use std::path::PathBuf;

/// Errors from world-state store operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or deserialization failure in the backing format.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The backing file exists but cannot be decoded.
    #[error("corrupt state file {}: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },
}

/// Result alias for store operations.
pub type StateResult<T> = Result<T, StateError>;
