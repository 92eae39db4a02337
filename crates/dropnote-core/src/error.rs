//! Error types for dropnote-core

use thiserror::Error;

/// Result type alias using dropnote-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in dropnote-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// A remote store call failed (after any retries)
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An operation needed an open note but none is being edited
    #[error("No note is open")]
    NoActiveNote,

    /// The result arrived after focus moved elsewhere and was discarded
    #[error("Result for {0} was superseded")]
    Superseded(String),
}

/// A failed call against the remote file store.
///
/// Transport failures, non-2xx responses, revision conflicts and undecodable
/// payloads all end up here. The retry executor treats every variant alike.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{operation} failed{}: {message}", format_status(.status))]
pub struct RemoteError {
    /// Remote operation name, e.g. `upload`
    pub operation: String,
    /// HTTP status when the server answered
    pub status: Option<u16>,
    /// Compacted server or transport message
    pub message: String,
}

impl RemoteError {
    pub fn new(
        operation: impl Into<String>,
        status: Option<u16>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation: operation.into(),
            status,
            message: message.into(),
        }
    }

    /// Failure before any HTTP status was received.
    pub fn transport(operation: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self::new(operation, None, error.to_string())
    }

    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    /// Revision mismatch or path collision reported by the store.
    pub const fn is_conflict(&self) -> bool {
        matches!(self.status, Some(409))
    }
}

#[allow(clippy::ref_option)]
fn format_status(status: &Option<u16>) -> String {
    status.map_or_else(String::new, |status| format!(" with HTTP {status}"))
}
