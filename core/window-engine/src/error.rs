//! FILENAME: core/window-engine/src/error.rs

use dataset::DataError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WindowError {
    #[error("Row height must be a positive finite number, got {0}")]
    InvalidRowHeight(f64),

    #[error("Viewport height must be a non-negative finite number, got {0}")]
    InvalidViewportHeight(f64),

    #[error("Scroll offset must be a non-negative finite number, got {0}")]
    InvalidScrollOffset(f64),

    #[error("Row {index} is out of range (row plan has {total} rows)")]
    RowOutOfRange { index: usize, total: usize },

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Data source error: {0}")]
    Data(#[from] DataError),
}
