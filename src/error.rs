//! Error types for the NFTGate SDK
//!
//! Every failure surfaced by the client is one of the [`NftGateError`] kinds.
//! Transport and HTTP outcomes are classified once, inside the request
//! pipeline, so callers never see raw `reqwest` or `serde_json` errors.

use std::collections::BTreeMap;
use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, NftGateError>;

/// Structured per-field validation messages returned with a 422 response
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Fallback message for validation failures whose body carries none
pub const DEFAULT_VALIDATION_MESSAGE: &str = "The given data was invalid.";

/// Classified failure returned by every SDK operation
#[derive(Debug, Error)]
pub enum NftGateError {
    /// The connection could not be established or was aborted mid-flight
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The server answered with a 5xx status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The server rejected the request payload (HTTP 422)
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        errors: FieldErrors,
    },

    /// Any other 4xx status
    #[error("Client error ({status}): {message}")]
    Client { status: u16, message: String },

    /// A success status with a body that is not JSON, or not the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// `next_item` was called past the end of a paginated sequence
    #[error("Iterator exhausted: no more items")]
    IteratorExhausted,

    /// A well-formed JSON payload was rejected by a resource decoder
    #[error("Decoding failure: {0}")]
    Decoding(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The caller built a request the pipeline refuses to send
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Local I/O failure, e.g. reading a file to upload
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NftGateError {
    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Create a server error
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>, errors: FieldErrors) -> Self {
        Self::Validation {
            message: message.into(),
            errors,
        }
    }

    /// Create a client error
    pub fn client(status: u16, message: impl Into<String>) -> Self {
        Self::Client {
            status,
            message: message.into(),
        }
    }

    /// Create a malformed response error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// Create a decoding error
    pub fn decoding(message: impl Into<String>) -> Self {
        Self::Decoding(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// HTTP status carried by this error, if it came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } | Self::Client { status, .. } => Some(*status),
            Self::Validation { .. } => Some(422),
            _ => None,
        }
    }

    /// Structured field errors of a validation failure
    pub fn validation_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }

    /// Whether the request never produced an HTTP response
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accessor() {
        assert_eq!(NftGateError::server(503, "down").status(), Some(503));
        assert_eq!(NftGateError::client(404, "missing").status(), Some(404));
        assert_eq!(
            NftGateError::validation("bad", FieldErrors::new()).status(),
            Some(422)
        );
        assert_eq!(NftGateError::transport("reset").status(), None);
        assert_eq!(NftGateError::IteratorExhausted.status(), None);
    }

    #[test]
    fn test_validation_errors_are_preserved() {
        let mut errors = FieldErrors::new();
        errors.insert("name".to_string(), vec!["The name is required.".to_string()]);
        let error = NftGateError::validation(DEFAULT_VALIDATION_MESSAGE, errors.clone());

        assert_eq!(error.validation_errors(), Some(&errors));
        assert!(NftGateError::client(400, "nope").validation_errors().is_none());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            NftGateError::server(500, "boom").to_string(),
            "Server error (500): boom"
        );
        assert!(NftGateError::transport("connection refused").is_transport());
        assert_eq!(
            NftGateError::IteratorExhausted.to_string(),
            "Iterator exhausted: no more items"
        );
    }
}
