// Copyright (c) 2026 - present Prayag Tushar
// SPDX-License-Identifier: MIT

//! Time window and author filtering

use chrono::{DateTime, Local, TimeDelta};

use crate::commit::CommitRecord;

/// Keeps commits inside a look-back window, optionally by one author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitFilter {
    cutoff: Option<DateTime<Local>>,
    author: Option<String>,
}

impl CommitFilter {
    /// Window of `days` days ending now
    #[must_use]
    pub fn last_days(days: u32, author: Option<&str>) -> Self {
        Self::last_days_from(Local::now(), days, author)
    }

    /// Window of `days` days ending at `now`
    ///
    /// A window reaching back past the earliest representable instant has
    /// no lower bound.
    #[must_use]
    pub fn last_days_from(now: DateTime<Local>, days: u32, author: Option<&str>) -> Self {
        Self {
            cutoff: TimeDelta::try_days(i64::from(days)).and_then(|d| now.checked_sub_signed(d)),
            author: author
                .filter(|a| !a.is_empty())
                .map(str::to_lowercase),
        }
    }

    /// Earliest instant a commit may have and still pass, if bounded
    #[must_use]
    pub fn cutoff(&self) -> Option<DateTime<Local>> {
        self.cutoff
    }

    /// Lowercased author substring, if one is set
    #[must_use]
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Check a single commit against both conditions
    #[must_use]
    pub fn matches(&self, commit: &CommitRecord) -> bool {
        if self.cutoff.is_some_and(|cutoff| commit.committed_at < cutoff) {
            return false;
        }
        match &self.author {
            Some(needle) => commit.author_name.to_lowercase().contains(needle.as_str()),
            None => true,
        }
    }

    /// Keep matching commits, preserving input order
    pub fn apply<I>(&self, commits: I) -> Vec<CommitRecord>
    where
        I: IntoIterator<Item = CommitRecord>,
    {
        commits.into_iter().filter(|c| self.matches(c)).collect()
    }
}

/// Filter `commits` to the last `days` days and an optional author substring
pub fn filter_commits<I>(commits: I, days: u32, author: Option<&str>) -> Vec<CommitRecord>
where
    I: IntoIterator<Item = CommitRecord>,
{
    CommitFilter::last_days(days, author).apply(commits)
}
