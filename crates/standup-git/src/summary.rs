// Copyright (c) 2026 - present Prayag Tushar
// SPDX-License-Identifier: MIT

//! Grouping commits by category and rendering the standup text

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::category::{Category, categorize};
use crate::commit::CommitRecord;

/// Commits partitioned by [`Category`], each group in input order
///
/// Every category is present, possibly empty. Iteration always follows
/// [`Category::ALL`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorizedCommits {
    groups: [Vec<CommitRecord>; 4],
}

impl CategorizedCommits {
    /// Commits in one category
    #[must_use]
    pub fn get(&self, category: Category) -> &[CommitRecord] {
        &self.groups[category.index()]
    }

    /// Categories with their commits, in display order, including empty ones
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[CommitRecord])> {
        Category::ALL
            .into_iter()
            .map(move |c| (c, self.get(c)))
    }

    /// Categories that have at least one commit, with their counts
    pub fn counts(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        self.iter()
            .filter(|(_, commits)| !commits.is_empty())
            .map(|(c, commits)| (c, commits.len()))
    }

    /// Total number of commits across all categories
    #[must_use]
    pub fn total(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// True if no category holds a commit
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    fn push(&mut self, category: Category, commit: CommitRecord) {
        self.groups[category.index()].push(commit);
    }
}

impl Serialize for CategorizedCommits {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::ALL.len()))?;
        for (category, commits) in self.iter() {
            map.serialize_entry(category.label(), commits)?;
        }
        map.end()
    }
}

/// Partition commits into categories, keeping their order
pub fn group<I>(commits: I) -> CategorizedCommits
where
    I: IntoIterator<Item = CommitRecord>,
{
    let mut grouped = CategorizedCommits::default();
    for commit in commits {
        grouped.push(categorize(&commit.message), commit);
    }
    grouped
}

/// Message on a single line: trimmed, blank lines dropped, lines joined by a space
#[must_use]
pub fn clean_message(message: &str) -> String {
    message
        .trim()
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render grouped commits as standup text
///
/// Each populated category contributes a blank line, its header and one
/// `  - message` bullet per commit. Empty categories are skipped; with no
/// commits at all the result is empty.
#[must_use]
pub fn render(grouped: &CategorizedCommits) -> String {
    let mut lines = Vec::new();
    for (category, commits) in grouped.iter() {
        if commits.is_empty() {
            continue;
        }
        lines.push(format!("\n{}", category.label()));
        for commit in commits {
            lines.push(format!("  - {}", clean_message(&commit.message)));
        }
    }
    lines.join("\n")
}
