// Copyright (c) 2026 - present Prayag Tushar
// SPDX-License-Identifier: MIT

//! Commit categorization by message prefix
//!
//! Only the first whitespace-separated word of a message is inspected. It is
//! lowercased and a single trailing `:` is dropped, so `Feat:` and `feat`
//! both land in [`Category::Features`].

use std::fmt;

use serde::Serialize;

/// Kind of change a commit represents, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    /// New functionality
    Features,
    /// Bug fixes
    BugFixes,
    /// Docs, chores, refactors, style and tests
    Maintenance,
    /// Anything without a recognised prefix
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 4] = [
        Category::Features,
        Category::BugFixes,
        Category::Maintenance,
        Category::Other,
    ];

    /// Header used in rendered summaries
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Features => "✨ Features",
            Category::BugFixes => "🐛 Bug Fixes",
            Category::Maintenance => "🔧 Maintenance",
            Category::Other => "📝 Other Changes",
        }
    }

    /// Prefixes that select this category (empty for `Other`)
    #[must_use]
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Features => &["feat", "add", "new", "feature"],
            Category::BugFixes => &["fix", "bug", "hotfix", "bugfix"],
            Category::Maintenance => &["docs", "chore", "refactor", "style", "cleanup", "test"],
            Category::Other => &[],
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lowercased first word of a message with one trailing `:` removed
#[must_use]
pub fn extract_prefix(message: &str) -> String {
    let Some(first) = message.split_whitespace().next() else {
        return String::new();
    };
    let lower = first.to_lowercase();
    match lower.strip_suffix(':') {
        Some(stripped) => stripped.to_string(),
        None => lower,
    }
}

/// Pick the category for a commit message
#[must_use]
pub fn categorize(message: &str) -> Category {
    let prefix = extract_prefix(message);
    Category::ALL
        .into_iter()
        .find(|c| c.keywords().contains(&prefix.as_str()))
        .unwrap_or(Category::Other)
}
