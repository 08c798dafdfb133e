//! Error types for term matching

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A term could not be compiled as a search pattern.
    #[error("invalid term pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("vocabulary decode error: {0}")]
    Vocabulary(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
