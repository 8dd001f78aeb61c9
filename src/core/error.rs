//! Error types for area picking

use thiserror::Error;

/// Main error type for the picker
#[derive(Debug, Error)]
pub enum Error {
    /// The camera/viewport pair could not unproject the pick rectangle.
    #[error("Frustum build failed: {0}")]
    FrustumBuild(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn frustum(msg: impl Into<String>) -> Self {
        Error::FrustumBuild(msg.into())
    }
}
