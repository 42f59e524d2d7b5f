//! Credential validator
//!
//! Matches a username/password pair against every record in the set.
//! Comparison is exact: no trimming and no case folding.

use super::results::CredentialMatch;
use crate::config::DuplicatePolicy;
use crate::error::AuthError;
use crate::records::UserRecord;

/// Validates that at least one record carries exactly these credentials.
///
/// Under [`DuplicatePolicy::Strict`] more than one match is rejected as ambiguous.
pub fn authenticate(
    records: &[UserRecord],
    username: &str,
    password: &str,
    policy: DuplicatePolicy,
) -> Result<CredentialMatch, AuthError> {
    let mut matching = records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.matches(username, password))
        .map(|(index, _)| index);

    let Some(first_index) = matching.next() else {
        return Err(AuthError::NoMatch(username.to_string()));
    };
    let match_count = 1 + matching.count();

    if policy == DuplicatePolicy::Strict && match_count > 1 {
        return Err(AuthError::Ambiguous {
            username: username.to_string(),
            count: match_count,
        });
    }

    Ok(CredentialMatch {
        username: username.to_string(),
        match_count,
        first_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(username: &str, password: &str, date: &str) -> UserRecord {
        UserRecord::parse(username, password, date, "%Y-%m-%d").unwrap()
    }

    fn sample() -> Vec<UserRecord> {
        vec![
            record("admin", "password123", "2023-01-01"),
            record("user1", "pass1", "2023-02-15"),
            record("admin", "password123", "2021-06-01"),
        ]
    }

    #[test]
    fn test_valid_credentials() {
        let result =
            authenticate(&sample(), "user1", "pass1", DuplicatePolicy::Permissive).unwrap();
        assert_eq!(result.username, "user1");
        assert_eq!(result.match_count, 1);
        assert_eq!(result.first_index, 1);
    }

    #[test]
    fn test_wrong_password() {
        let err =
            authenticate(&sample(), "admin", "wrong", DuplicatePolicy::Permissive).unwrap_err();
        assert_eq!(err, AuthError::NoMatch("admin".to_string()));
    }

    #[test]
    fn test_password_of_another_user_is_rejected() {
        assert!(authenticate(&sample(), "admin", "pass1", DuplicatePolicy::Permissive).is_err());
    }

    #[test]
    fn test_empty_record_set() {
        assert!(authenticate(&[], "admin", "password123", DuplicatePolicy::Permissive).is_err());
    }

    #[test]
    fn test_duplicates_accepted_when_permissive() {
        let result =
            authenticate(&sample(), "admin", "password123", DuplicatePolicy::Permissive).unwrap();
        assert_eq!(result.match_count, 2);
        assert_eq!(result.first_index, 0);
    }

    #[test]
    fn test_duplicates_rejected_when_strict() {
        let err =
            authenticate(&sample(), "admin", "password123", DuplicatePolicy::Strict).unwrap_err();
        assert_eq!(
            err,
            AuthError::Ambiguous {
                username: "admin".to_string(),
                count: 2
            }
        );
        assert!(authenticate(&sample(), "user1", "pass1", DuplicatePolicy::Strict).is_ok());
    }
}
