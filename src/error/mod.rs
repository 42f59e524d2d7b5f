//! Error handling
//!
//! Defines the loader's error taxonomy and how the binary reports it.

pub mod handlers;
pub mod types;

pub use types::*;
