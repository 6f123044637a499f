// Copyright (c) 2026 - present Prayag Tushar
// SPDX-License-Identifier: MIT

//! Error types for standup-git

use thiserror::Error;

/// Errors that can occur while resolving and reading a repository
#[derive(Debug, Error)]
pub enum GitError {
    /// Local path does not exist or is not a git repository
    #[error("'{reference}' is not a valid git repository")]
    InvalidReference {
        /// The reference string as given by the caller
        reference: String,
    },

    /// Remote repository could not be cloned
    #[error("Failed to clone repository {url}: {source}")]
    CloneFailure {
        /// The remote reference that was being cloned
        url: String,
        /// Underlying transport, auth, network or filesystem error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Path could not be opened as a repository at read time
    #[error("Not a git repository: {path}")]
    NotARepository {
        /// The path that failed to open
        path: String,
    },

    /// Any other failure while enumerating commit history
    #[error("Error reading git repo: {0}")]
    ReadFailure(#[from] git2::Error),
}

impl GitError {
    pub(crate) fn clone_failure(
        url: &str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::CloneFailure {
            url: url.to_string(),
            source: source.into(),
        }
    }
}
