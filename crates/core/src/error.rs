//! Core error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// An owners range whose lower bound is not a number
    #[error("invalid owners range {0:?}")]
    Parse(String),

    /// The escaped title could not be compiled into a search pattern
    #[error("title cannot be used as a search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
