// Error types for the quarry data layer.
// Covers transport failures, response decoding, and general application errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuarryError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("response decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid header value: {0}")]
    Header(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, QuarryError>;
