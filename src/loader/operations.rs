//! Loader operations
//!
//! Detection order: missing source, then per-row validation, then
//! authentication. Everything else surfaces as a processing failure.

use log::{debug, info, warn};
use std::fs;
use std::path::Path;

use crate::auth::authenticate;
use crate::config::LoaderConfig;
use crate::error::LoaderError;
use crate::records::{UserRecord, parse_records};

/// Loads a credential list and returns every record ordered by creation date
/// once the supplied credentials match at least one of them.
#[derive(Debug, Clone, Default)]
pub struct CredentialOrderedLoader {
    config: LoaderConfig,
}

impl CredentialOrderedLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Read `source`, validate every row, check credentials and return all
    /// records sorted ascending by creation date.
    pub fn load<P: AsRef<Path>>(
        &self,
        source: P,
        username: &str,
        password: &str,
    ) -> Result<Vec<UserRecord>, LoaderError> {
        let path = source.as_ref();
        let contents = read_source(path)?;
        debug!("Read {} bytes from {}", contents.len(), path.display());

        let mut records = parse_records(&contents, &self.config)?;

        let credential = authenticate(&records, username, password, self.config.duplicate_policy)
            .map_err(|e| {
                warn!("Authentication failed against {}: {}", path.display(), e);
                LoaderError::from(e)
            })?;
        debug!(
            "User {} matched {} record(s), first at index {}",
            credential.username, credential.match_count, credential.first_index
        );

        order_by_creation_date(&mut records);
        info!(
            "Loaded {} user records from {} for {}",
            records.len(),
            path.display(),
            credential.username
        );
        Ok(records)
    }
}

/// Load with the default configuration
pub fn load<P: AsRef<Path>>(
    source: P,
    username: &str,
    password: &str,
) -> Result<Vec<UserRecord>, LoaderError> {
    CredentialOrderedLoader::default().load(source, username, password)
}

/// Stable ascending sort by creation date; equal dates keep file order
pub fn order_by_creation_date(records: &mut [UserRecord]) {
    records.sort_by_key(UserRecord::created_on);
}

/// Read the whole source into memory
fn read_source(path: &Path) -> Result<Vec<u8>, LoaderError> {
    if !path.exists() {
        return Err(LoaderError::ResourceNotFound(path.display().to_string()));
    }
    Ok(fs::read(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn record(username: &str, date: &str) -> UserRecord {
        UserRecord::parse(username, "pw", date, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_order_is_ascending() {
        let mut records = vec![
            record("c", "2023-03-10"),
            record("a", "2022-12-25"),
            record("b", "2023-01-01"),
        ];
        order_by_creation_date(&mut records);

        let names: Vec<&str> = records.iter().map(UserRecord::username).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_order_is_stable_for_equal_dates() {
        let mut records = vec![
            record("late", "2024-01-01"),
            record("first", "2023-05-05"),
            record("second", "2023-05-05"),
            record("third", "2023-05-05"),
        ];
        order_by_creation_date(&mut records);

        let names: Vec<&str> = records.iter().map(UserRecord::username).collect();
        assert_eq!(names, vec!["first", "second", "third", "late"]);
    }

    #[test]
    fn test_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");

        let err = load(&path, "admin", "pw").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResourceNotFound);
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn test_directory_source_is_processing_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path(), "admin", "pw").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ProcessingFailure);
    }

    #[test]
    fn test_invalid_record_takes_priority_over_authentication() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.csv");
        fs::write(&path, "username,password,creation_date\nadmin,pw,bad\n").unwrap();

        let err = load(&path, "nobody", "nothing").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRecord);
    }
}
