// Copyright (c) 2026 - present Prayag Tushar
// SPDX-License-Identifier: MIT

//! standup-git: commit retrieval and categorization for standup summaries
//!
//! This library crate resolves a local or remote repository, reads its recent
//! history, and groups commits into a short categorized report.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use standup_git::{filter_commits, group, read_commits, render};
//!
//! let commits = read_commits(".").expect("read history");
//! let recent = filter_commits(commits, 1, Some("jane"));
//! println!("{}", render(&group(recent)));
//! ```

pub mod category;
pub mod commit;
pub mod error;
pub mod filter;
pub mod history;
pub mod pipeline;
pub mod source;
pub mod summary;

pub use category::{Category, categorize, extract_prefix};
pub use commit::CommitRecord;
pub use error::GitError;
pub use filter::{CommitFilter, filter_commits};
pub use history::{CommitIter, GitRepo, read_commits};
pub use pipeline::{ScanRequest, Standup, scan};
pub use source::{ResolvedRepo, Resolver, is_remote_reference, is_valid_repository, resolve};
pub use summary::{CategorizedCommits, clean_message, group, render};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::category::Category;
    pub use crate::commit::CommitRecord;
    pub use crate::error::GitError;
    pub use crate::pipeline::{ScanRequest, Standup};
    pub use crate::summary::CategorizedCommits;
}
