//! Error types for the MediaVault CLI
//!
//! All errors are user-facing with clear messages. Validation problems are
//! carried as data (the per-field error map) and rendered field by field;
//! they are never panics.

use mediavault_core::ValidationErrors;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Comprehensive error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// The draft failed validation; one message per offending field
    #[error("Submission is invalid:\n{}", render_validation(.0))]
    Validation(ValidationErrors),

    /// A call against the asset store failed
    #[error(transparent)]
    Repository(#[from] mediavault_client::RepositoryError),

    /// Required file is missing
    #[error("File not found: '{0}'. Verify the path exists and is readable.")]
    FileNotFound(String),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions.")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Rules override file has invalid syntax
    #[error("Invalid rules file: {0}. Expected a TOML table mapping categories to extension lists.")]
    InvalidRules(#[from] toml::de::Error),

    /// Configuration or argument problem
    #[error("Configuration error: {0}")]
    Config(String),

    /// Shared utility error (logging, parsing)
    #[error(transparent)]
    Common(#[from] mediavault_common::VaultError),
}

impl CliError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

fn render_validation(errors: &ValidationErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("  {field}: {message}"))
        .collect::<Vec<_>>()
        .join("\n")
}
