//! Error types for rendering

use thiserror::Error;

/// Result type for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors raised while loading render settings
///
/// Rendering itself is total; only configuration can fail.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Malformed settings file
    #[error("Invalid render settings: {0}")]
    Settings(#[from] toml::de::Error),

    /// Settings file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
