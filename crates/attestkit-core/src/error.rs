//! Error types for the core engine

use thiserror::Error;

use attestkit_model::UnknownKey;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised by the core engine
///
/// The document type set is controlled by the application, so an unknown
/// identifier is a configuration fault, never a user input problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Lookup of an identifier outside the closed document type set
    #[error("Unknown document type: {0}")]
    UnknownDocumentType(String),

    /// Category filter naming no known category
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

impl From<UnknownKey> for CoreError {
    fn from(err: UnknownKey) -> Self {
        CoreError::UnknownDocumentType(err.0)
    }
}
