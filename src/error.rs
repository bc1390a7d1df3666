use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for typeahead
#[derive(Debug, Error)]
pub enum TypeaheadError {
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Duplicate suggestion id `{0}` in catalog")]
    DuplicateSuggestionId(String),

    #[error("Invalid config file {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TypeaheadError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
