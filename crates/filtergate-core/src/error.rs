//! Error types for Filtergate

/// Result type alias using Filtergate's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for Filtergate operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Classification backend call failed or returned an unusable response
    #[error("transport error: {0}")]
    Transport(String),

    /// Durable payload write failed or was rejected
    #[error("storage error: {0}")]
    Storage(String),

    /// Configuration errors; fatal at plugin initialization
    #[error("configuration error: {0}")]
    Config(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a new storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
