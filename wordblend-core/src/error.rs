//! Core error types

use thiserror::Error;

/// Errors produced by the blend engine
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid engine configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error while writing to the output sink
    #[error("output sink error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
