//! Credential Ordered Loader
//!
//! Authenticates a user against a CSV credential list and returns every user
//! record ordered by account creation date.

pub mod auth;
pub mod config;
pub mod error;
pub mod loader;
pub mod records;
pub mod utils;

pub use config::{DuplicatePolicy, LoaderConfig};
pub use error::{ErrorKind, LoaderError};
pub use loader::{CredentialOrderedLoader, load};
pub use records::UserRecord;
