use thiserror::Error;

/// Top-level error type for Hearth.
#[derive(Debug, Error)]
pub enum HearthError {
    /// Error from the messaging channel (Telegram Bot API).
    #[error("channel error: {0}")]
    Channel(String),

    /// Error from an external content source (weather, content host).
    #[error("source error: {0}")]
    Source(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Stats file error.
    #[error("storage error: {0}")]
    Storage(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
