//! Credential-gated loading
//!
//! Reads a user list, authenticates against it and returns it in creation order.

pub mod operations;

pub use operations::{CredentialOrderedLoader, load, order_by_creation_date};
