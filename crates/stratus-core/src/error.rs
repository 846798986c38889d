//! Error types for stratus-core

use thiserror::Error;

/// Result type alias for stratus-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in stratus-core
#[derive(Error, Debug)]
pub enum Error {
    /// Service manifest file could not be found
    #[error("service manifest not found: {path}")]
    ManifestNotFound {
        /// Path that was searched
        path: String,
    },

    /// Failed to parse the service manifest
    #[error("failed to parse service manifest: {0}")]
    ManifestParse(#[from] serde_yaml::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
