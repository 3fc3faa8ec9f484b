//! Error types for phonetic

use std::io;
use thiserror::Error;

/// Main error type for phonetic
#[derive(Error, Debug)]
pub enum PhoneticError {
    /// The name was empty after trimming, or held a character the word list
    /// has no entry for
    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("INI parse error: {0}")]
    IniParse(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for phonetic operations
pub type Result<T> = std::result::Result<T, PhoneticError>;

impl From<String> for PhoneticError {
    fn from(s: String) -> Self {
        PhoneticError::Other(s)
    }
}
