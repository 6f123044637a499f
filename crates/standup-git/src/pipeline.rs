// Copyright (c) 2026 - present Prayag Tushar
// SPDX-License-Identifier: MIT

//! End-to-end standup generation
//!
//! Resolves the reference, reads history, filters it and renders the summary.
//! A temporary clone is released before [`scan`] returns, whether it
//! succeeds or fails.
//!
//! # Example
//!
//! ```no_run
//! use standup_git::pipeline::{ScanRequest, scan};
//!
//! let standup = scan(&ScanRequest::new(".").days(7)).expect("scan repo");
//! println!("{}", standup.text);
//! ```

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::debug;

use crate::commit::CommitRecord;
use crate::error::GitError;
use crate::filter::CommitFilter;
use crate::history::GitRepo;
use crate::source::{ResolvedRepo, Resolver};
use crate::summary::{CategorizedCommits, group, render};

/// What to scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    /// Local path or remote reference
    pub reference: String,
    /// Look-back window in days
    pub days: u32,
    /// Optional case-insensitive author substring
    pub author: Option<String>,
}

impl ScanRequest {
    /// Scan `reference` over the last day for every author
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            days: 1,
            author: None,
        }
    }

    /// Set the look-back window
    #[must_use]
    pub fn days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    /// Restrict to authors whose name contains `author`
    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

/// Result of a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standup {
    /// Matching commits, newest first
    pub commits: Vec<CommitRecord>,
    /// The same commits grouped by category
    pub grouped: CategorizedCommits,
    /// Rendered summary text
    pub text: String,
}

impl Standup {
    /// Build from an already filtered commit list
    #[must_use]
    pub fn from_commits(commits: Vec<CommitRecord>) -> Self {
        let grouped = group(commits.iter().cloned());
        let text = render(&grouped);
        Self {
            commits,
            grouped,
            text,
        }
    }

    /// JSON form with commits, groups and text
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Run the full pipeline with the current time
///
/// # Errors
///
/// Returns `GitError` from resolution or history reading.
pub fn scan(request: &ScanRequest) -> Result<Standup, GitError> {
    scan_at(request, Local::now())
}

/// Run the full pipeline with an explicit reference instant
///
/// # Errors
///
/// Returns `GitError` from resolution or history reading.
pub fn scan_at(request: &ScanRequest, now: DateTime<Local>) -> Result<Standup, GitError> {
    scan_with(&Resolver::new(), request, now)
}

/// Run the full pipeline with a specific resolver
///
/// # Errors
///
/// Returns `GitError` from resolution or history reading.
pub fn scan_with(
    resolver: &Resolver,
    request: &ScanRequest,
    now: DateTime<Local>,
) -> Result<Standup, GitError> {
    let resolved = resolver.resolve(&request.reference)?;
    scan_resolved(resolved, request, now)
}

/// Read, filter and render an already resolved repository
///
/// Takes ownership of `resolved` so a temporary clone is removed on every
/// return path, including read errors.
///
/// # Errors
///
/// Returns `GitError` from history reading.
pub fn scan_resolved(
    resolved: ResolvedRepo,
    request: &ScanRequest,
    now: DateTime<Local>,
) -> Result<Standup, GitError> {
    let filter = CommitFilter::last_days_from(now, request.days, request.author.as_deref());

    let repo = GitRepo::open(resolved.path())?;
    let mut commits = Vec::new();
    for commit in repo.commits()? {
        let commit = commit?;
        if filter.matches(&commit) {
            commits.push(commit);
        }
    }
    drop(repo);
    resolved.cleanup();

    debug!(
        kept = commits.len(),
        cutoff = ?filter.cutoff(),
        "Filtered commit history"
    );
    Ok(Standup::from_commits(commits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = ScanRequest::new("/repo").days(3).author("jane");
        assert_eq!(request.reference, "/repo");
        assert_eq!(request.days, 3);
        assert_eq!(request.author.as_deref(), Some("jane"));
    }

    #[test]
    fn test_request_defaults() {
        let request = ScanRequest::new(".");
        assert_eq!(request.days, 1);
        assert!(request.author.is_none());
    }

    #[test]
    fn test_invalid_local_reference() {
        let result = scan(&ScanRequest::new("/nonexistent/standup/repo"));
        assert!(matches!(result, Err(GitError::InvalidReference { .. })));
    }

    #[test]
    fn test_standup_from_empty() {
        let standup = Standup::from_commits(Vec::new());
        assert!(standup.commits.is_empty());
        assert!(standup.grouped.is_empty());
        assert_eq!(standup.text, "");
    }
}
