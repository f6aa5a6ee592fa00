//! Error types

use thiserror::Error;

/// Configuration errors raised before any link is planned.
///
/// Untrusted page numbers never produce one of these: out-of-range input is
/// always folded into a bounded link sequence instead.
#[derive(Error, Debug)]
pub enum PaginationError {
    #[error("Invalid distance {0}: must be a positive integer")]
    InvalidDistance(i64),

    #[error("Invalid per_page {0}: must be a positive integer")]
    InvalidPerPage(i64),

    #[error("Invalid value for option '{field}': {message}")]
    InvalidOption { field: String, message: String },

    #[error("Failed to parse options: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
