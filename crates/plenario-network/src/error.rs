//! Error types for network construction

use thiserror::Error;

/// Errors that can occur while loading a table or building a network
///
/// Every variant is a deterministic function of the input; nothing here is
/// worth retrying.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// A column required by the weighting policy is absent from the table
    #[error("Invalid input: missing required column '{column}'")]
    InvalidInput {
        /// Name of the missing column
        column: String,
    },

    /// A row cannot be used as-is (null id, null required field, wrong width)
    #[error("Malformed row {row}, column '{column}': {reason}")]
    MalformedRow {
        /// Zero-based row index
        row: usize,
        /// Column holding the offending value
        column: String,
        /// What is wrong with it
        reason: String,
    },

    /// `build_network` was called a second time on the same builder
    #[error("Network already built; construct a new builder for another pass")]
    AlreadyBuilt,

    /// JSON input or output error
    #[error("JSON error: {0}")]
    Json(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for NetworkError {
    fn from(e: serde_json::Error) -> Self {
        NetworkError::Json(e.to_string())
    }
}

/// Result type alias for network operations
pub type Result<T> = std::result::Result<T, NetworkError>;
