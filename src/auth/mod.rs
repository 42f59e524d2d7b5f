//! Authentication
//!
//! Checks supplied credentials against a parsed record set.

pub mod results;
pub mod validator;

pub use results::CredentialMatch;
pub use validator::authenticate;
