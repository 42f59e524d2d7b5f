//! CSV parsing into user records
//!
//! Rows are validated in file order and the first invalid row aborts the whole
//! parse. `creation_date` is checked before the credential columns so a bad
//! date is always the reported problem for its row.

use csv::{ReaderBuilder, StringRecord};
use log::{debug, warn};

use super::user::{UserRecord, parse_date};
use crate::config::LoaderConfig;
use crate::error::{LoaderError, ProcessingError};

pub const USERNAME_COLUMN: &str = "username";
pub const PASSWORD_COLUMN: &str = "password";
pub const CREATION_DATE_COLUMN: &str = "creation_date";

/// Placeholder used in errors when a row has no username
const UNKNOWN_USER: &str = "<unknown>";

/// Positions of the required columns within the header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub username: Option<usize>,
    pub password: Option<usize>,
    pub creation_date: Option<usize>,
}

impl ColumnIndex {
    /// Locate required columns by exact header name
    pub fn from_headers(headers: &StringRecord) -> Self {
        let position = |name: &str| headers.iter().position(|header| header == name);
        Self {
            username: position(USERNAME_COLUMN),
            password: position(PASSWORD_COLUMN),
            creation_date: position(CREATION_DATE_COLUMN),
        }
    }
}

/// Parse the full source into records
pub fn parse_records(source: &[u8], config: &LoaderConfig) -> Result<Vec<UserRecord>, LoaderError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(config.delimiter_byte())
        .has_headers(true)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(ProcessingError::NoColumns.into());
    }

    let columns = ColumnIndex::from_headers(&headers);
    debug!("Header columns: {:?} -> {:?}", headers, columns);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let line = row.position().map_or(0, |pos| pos.line());
        records.push(build_record(&row, &columns, line, &config.date_format)?);
    }

    debug!("Parsed {} user records", records.len());
    Ok(records)
}

fn build_record(
    row: &StringRecord,
    columns: &ColumnIndex,
    line: u64,
    date_format: &str,
) -> Result<UserRecord, LoaderError> {
    let username = cell(row, columns.username);
    let invalid = |field: &'static str| {
        let user = username.unwrap_or(UNKNOWN_USER).to_string();
        warn!("Rejecting record on line {}: bad {} for user {}", line, field, user);
        LoaderError::InvalidRecord { field, user, line }
    };

    let creation_date = cell(row, columns.creation_date)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| invalid(CREATION_DATE_COLUMN))?;
    let created_on =
        parse_date(creation_date, date_format).ok_or_else(|| invalid(CREATION_DATE_COLUMN))?;

    let username = username.ok_or_else(|| invalid(USERNAME_COLUMN))?;
    let password = cell(row, columns.password).ok_or_else(|| invalid(PASSWORD_COLUMN))?;

    Ok(UserRecord::from_parts(
        username.to_string(),
        password.to_string(),
        creation_date.to_string(),
        created_on,
    ))
}

fn cell(row: &StringRecord, index: Option<usize>) -> Option<&str> {
    index.and_then(|i| row.get(i))
}
