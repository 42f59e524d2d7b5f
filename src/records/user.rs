//! User record type

use chrono::NaiveDate;
use serde::Serialize;

/// One row of the credential list.
///
/// `creation_date` keeps the text exactly as read so output round-trips;
/// `created_on` is the parsed value used for ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    username: String,
    password: String,
    creation_date: String,
    #[serde(skip)]
    created_on: NaiveDate,
}

impl UserRecord {
    /// Build a record, parsing `creation_date` with the given chrono format.
    ///
    /// Returns `None` when the date does not match the format exactly.
    pub fn parse(
        username: impl Into<String>,
        password: impl Into<String>,
        creation_date: impl Into<String>,
        date_format: &str,
    ) -> Option<Self> {
        let creation_date = creation_date.into();
        let created_on = parse_date(&creation_date, date_format)?;
        Some(Self::from_parts(
            username.into(),
            password.into(),
            creation_date,
            created_on,
        ))
    }

    pub(crate) fn from_parts(
        username: String,
        password: String,
        creation_date: String,
        created_on: NaiveDate,
    ) -> Self {
        Self {
            username,
            password,
            creation_date,
            created_on,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Creation date as it appeared in the source
    pub fn creation_date(&self) -> &str {
        &self.creation_date
    }

    pub fn created_on(&self) -> NaiveDate {
        self.created_on
    }

    /// Exact, case-sensitive comparison of both credential fields
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

/// Parse a date that must render back to the same text.
///
/// chrono accepts padding, signs and single-digit fields that the fixed
/// format does not allow, so the value is re-formatted and compared.
pub(crate) fn parse_date(value: &str, date_format: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(value, date_format).ok()?;
    (date.format(date_format).to_string() == value).then_some(date)
}
