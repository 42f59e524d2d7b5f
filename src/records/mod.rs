//! User records
//!
//! The record shape, CSV parsing into records, and CSV output.

pub mod parser;
pub mod user;
pub mod writer;

pub use parser::{ColumnIndex, parse_records};
pub use user::UserRecord;
pub use writer::write_records;
