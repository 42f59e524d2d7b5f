//! Error handlers
//!
//! Logs loader errors and maps them to process exit codes.

use crate::error::types::{ErrorKind, LoaderError};
use log::{error, warn};

/// Exit code for bad command-line usage or configuration (EX_USAGE)
pub const USAGE_EXIT_CODE: u8 = 64;

/// Log a loader error at a level matching its kind
pub fn handle_error(err: &LoaderError) {
    match err.kind() {
        ErrorKind::AuthenticationFailed => warn!("Login rejected: {}", err),
        _ => error!("Loader error: {}", err),
    }
}

/// Convert error to process exit code
pub fn error_to_exit_code(err: &LoaderError) -> u8 {
    match err.kind() {
        ErrorKind::ResourceNotFound => 2,
        ErrorKind::AuthenticationFailed => 3,
        ErrorKind::InvalidRecord => 4,
        ErrorKind::ProcessingFailure => 5,
    }
}
