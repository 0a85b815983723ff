use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReaderError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Descriptor errors
    #[error("Invalid feed descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("Invalid feed URL: {0}")]
    InvalidUrl(String),

    // Registry errors
    #[error("Feed index {index} out of range (registry has {len} feeds)")]
    OutOfRange { index: usize, len: usize },

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Parsing errors
    #[error("Feed parsing failed: {0}")]
    FeedParse(String),

    // Load cycle errors
    #[error("Feed fetch timed out after {0} seconds")]
    Timeout(u64),

    #[error("Internal error: {0}")]
    Internal(String),

    // Serialization errors
    #[error("Serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ReaderResult<T> = Result<T, ReaderError>;
