use thiserror::Error;

/// Result type for export operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building export artifacts
#[derive(Error, Debug)]
pub enum Error {
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Core error: {0}")]
    CoreError(#[from] precast_core::Error),
}
