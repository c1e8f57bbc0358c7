//! Error types for landmark-guide

use thiserror::Error;

/// Main error type for landmark-guide operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Gazetteer error: {0}")]
    Gazetteer(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Speech synthesis error: {0}")]
    Synthesis(String),

    #[error("Classification error: {0}")]
    Classification(String),

    #[error("Failed to save uploaded image: {0}")]
    Upload(String),

    #[error("Malformed classifier output: {0}")]
    MalformedOutput(String),

    #[error("Invalid file name: {0}")]
    InvalidFileName(String),
}

/// Result type alias for landmark-guide operations
pub type Result<T> = std::result::Result<T, Error>;
