//! Commit record type

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Number of characters kept in an abbreviated commit hash
pub const SHORT_HASH_LEN: usize = 7;

/// Display format for commit timestamps
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A single commit as read from a repository's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Abbreviated hash, always a prefix of `full_hash`
    pub short_hash: String,
    /// Full commit hash (40 hex characters for SHA-1 repositories)
    pub full_hash: String,
    /// Commit message with surrounding whitespace trimmed
    pub message: String,
    /// Author name
    pub author_name: String,
    /// Author email
    pub author_email: String,
    /// Commit timestamp in local time
    pub committed_at: DateTime<Local>,
}

impl CommitRecord {
    /// Build a record, deriving the short hash and trimming the message
    #[must_use]
    pub fn new(
        full_hash: impl Into<String>,
        message: &str,
        author_name: impl Into<String>,
        author_email: impl Into<String>,
        committed_at: DateTime<Local>,
    ) -> Self {
        let full_hash = full_hash.into();
        Self {
            short_hash: short_hash(&full_hash).to_string(),
            full_hash,
            message: message.trim().to_string(),
            author_name: author_name.into(),
            author_email: author_email.into(),
            committed_at,
        }
    }

    /// Timestamp formatted as `YYYY-MM-DD HH:MM`
    #[must_use]
    pub fn display_time(&self) -> String {
        self.committed_at.format(DISPLAY_TIME_FORMAT).to_string()
    }

    /// First line of the message
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}

/// First [`SHORT_HASH_LEN`] characters of a hash
#[must_use]
pub fn short_hash(full_hash: &str) -> &str {
    match full_hash.char_indices().nth(SHORT_HASH_LEN) {
        Some((idx, _)) => &full_hash[..idx],
        None => full_hash,
    }
}
