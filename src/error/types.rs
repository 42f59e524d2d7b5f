//! Error types
//!
//! A load fails with exactly one of four kinds. Authentication and processing
//! failures carry a nested cause that refines the reason without adding kinds.

use std::io;

use thiserror::Error;

/// Coarse classification of a [`LoaderError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ResourceNotFound,
    AuthenticationFailed,
    InvalidRecord,
    ProcessingFailure,
}

/// Reasons a credential check was rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("no record matches user '{0}'")]
    NoMatch(String),
    #[error("{count} records match user '{username}'")]
    Ambiguous { username: String, count: usize },
}

/// Failures while reading or tokenizing the source
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Csv(#[from] csv::Error),
    #[error("No columns to parse from file")]
    NoColumns,
}

/// Top-level loader error
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("The file at path '{0}' does not exist.")]
    ResourceNotFound(String),

    #[error("Invalid credentials: {0}")]
    AuthenticationFailed(#[from] AuthError),

    #[error("Invalid or missing {field} for user: {user} (line {line})")]
    InvalidRecord {
        field: &'static str,
        user: String,
        line: u64,
    },

    #[error("An error occurred while processing the file: {0}")]
    ProcessingFailure(#[from] ProcessingError),
}

impl LoaderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoaderError::ResourceNotFound(_) => ErrorKind::ResourceNotFound,
            LoaderError::AuthenticationFailed(_) => ErrorKind::AuthenticationFailed,
            LoaderError::InvalidRecord { .. } => ErrorKind::InvalidRecord,
            LoaderError::ProcessingFailure(_) => ErrorKind::ProcessingFailure,
        }
    }
}

impl From<io::Error> for LoaderError {
    fn from(error: io::Error) -> Self {
        LoaderError::ProcessingFailure(ProcessingError::Io(error))
    }
}

impl From<csv::Error> for LoaderError {
    fn from(error: csv::Error) -> Self {
        LoaderError::ProcessingFailure(ProcessingError::Csv(error))
    }
}
