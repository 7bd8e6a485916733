use crate::error::ContractResult;

/// The host-facing outcome of one invocation.
///
/// A success carries the operation's output bytes (a serialized record); a
/// failure carries the rendered error message. The host decides how either
/// travels back to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    /// The operation succeeded with this payload.
    Success(Vec<u8>),
    /// The operation failed with this message.
    Error(String),
}

impl Response {
    /// Returns `true` for a successful invocation.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for a failed invocation.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The payload bytes, if successful.
    pub fn payload(&self) -> Option<&[u8]> {
        match self {
            Self::Success(bytes) => Some(bytes),
            Self::Error(_) => None,
        }
    }

    /// The error message, if failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Error(message) => Some(message),
        }
    }
}

impl From<ContractResult<Vec<u8>>> for Response {
    fn from(result: ContractResult<Vec<u8>>) -> Self {
        match result {
            Ok(payload) => Self::Success(payload),
            Err(error) => Self::Error(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContractError;

    #[test]
    fn success_carries_payload() {
        let response = Response::from(Ok(b"record".to_vec()));
        assert!(response.is_success());
        assert!(!response.is_error());
        assert_eq!(response.payload(), Some(b"record".as_ref()));
        assert_eq!(response.error_message(), None);
    }

    #[test]
    fn error_carries_rendered_message() {
        let response = Response::from(Err(ContractError::UnknownOperation(
            "transferInventory".into(),
        )));
        assert!(response.is_error());
        assert_eq!(response.payload(), None);
        assert_eq!(
            response.error_message(),
            Some("unknown operation: transferInventory")
        );
    }
}
