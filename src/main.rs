//! Credential Ordered Loader - Entry Point
//!
//! Usage: credential-ordered-loader <username> <password> [file]
//!
//! Prints every user record ordered by creation date as CSV on stdout.

use std::env;
use std::io;
use std::process::ExitCode;

use log::{error, info};

use credential_ordered_loader::error::handlers::{
    USAGE_EXIT_CODE, error_to_exit_code, handle_error,
};
use credential_ordered_loader::records::write_records;
use credential_ordered_loader::utils::logging::setup_logging;
use credential_ordered_loader::{CredentialOrderedLoader, LoaderConfig};

fn main() -> ExitCode {
    let config = match LoaderConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::from(USAGE_EXIT_CODE);
        }
    };

    setup_logging(&config.log_level);

    let args: Vec<String> = env::args().skip(1).collect();
    let (username, password, file) = match args.as_slice() {
        [username, password] => (username, password, config.users_file.clone()),
        [username, password, file] => (username, password, file.clone()),
        _ => {
            eprintln!("Usage: credential-ordered-loader <username> <password> [file]");
            return ExitCode::from(USAGE_EXIT_CODE);
        }
    };

    info!("Loading users from {}", file);
    let loader = CredentialOrderedLoader::new(config);

    let records = match loader.load(&file, username, password) {
        Ok(records) => records,
        Err(err) => {
            handle_error(&err);
            return ExitCode::from(error_to_exit_code(&err));
        }
    };

    let delimiter = loader.config().delimiter_byte();
    if let Err(e) = write_records(io::stdout().lock(), &records, delimiter) {
        error!("Failed to write records: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
