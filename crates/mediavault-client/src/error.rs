//! Repository client error types

use thiserror::Error;

/// Result type alias for repository operations
pub type Result<T> = std::result::Result<T, RepositoryError>;

/// A failed call against the asset store.
///
/// Every variant names the operation that failed so callers can surface a
/// message next to the triggering action.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The backend answered with a non-success status
    #[error("{operation} failed: server responded with status {status}")]
    Status { operation: &'static str, status: u16 },

    /// The request never completed or the response body did not decode
    #[error("{operation} failed: {source}. Check that the asset store is running and reachable.")]
    Http {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Client construction or configuration problem
    #[error("Repository client configuration error: {0}")]
    Config(String),
}

impl RepositoryError {
    /// Tag a transport/decode error with the operation it interrupted
    pub fn http(operation: &'static str, source: reqwest::Error) -> Self {
        Self::Http { operation, source }
    }

    /// The operation whose call failed
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Self::Status { operation, .. } | Self::Http { operation, .. } => Some(operation),
            Self::Config(_) => None,
        }
    }
}
