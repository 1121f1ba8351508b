//! Error types for dommap operations.

use thiserror::Error;

/// Errors that can occur while loading, transforming or charting a DOM tree.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "fetch")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A tree operation was asked to work on a node that is no longer
    /// reachable from the document.
    #[error("Invalid tree state: {0}")]
    InvalidState(String),

    /// A node matched the mask predicate but no mask formatter was supplied.
    #[error("Missing predicate: {0}")]
    MissingPredicate(String),

    #[error("Empty document")]
    EmptyDocument,

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
