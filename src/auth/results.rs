//! Authentication result types

/// Result of a successful credential check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialMatch {
    pub username: String,
    /// Number of records carrying the supplied username and password
    pub match_count: usize,
    /// Position of the first matching record in file order
    pub first_index: usize,
}
