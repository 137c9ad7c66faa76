//! FILENAME: core/dataset/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Record source must be a JSON array")]
    NotAnArray,

    #[error("Invalid record at position {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}
