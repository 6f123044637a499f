// Copyright (c) 2026 - present Prayag Tushar
// SPDX-License-Identifier: MIT

//! Plain-text rendering of scan results for the terminal

use standup_git::{CategorizedCommits, CommitRecord};

/// Messages longer than this are cut in the activity table
pub const MESSAGE_WIDTH: usize = 50;

const HEADERS: [&str; 4] = ["Hash", "Time", "Author", "Message"];

/// Message cut to [`MESSAGE_WIDTH`] characters, with `...` when cut
#[must_use]
pub fn truncate_message(message: &str) -> String {
    if message.chars().count() > MESSAGE_WIDTH {
        let head: String = message.chars().take(MESSAGE_WIDTH).collect();
        format!("{head}...")
    } else {
        message.to_string()
    }
}

/// "Recent Activity" table with one row per commit
#[must_use]
pub fn render_table(commits: &[CommitRecord]) -> String {
    let rows: Vec<[String; 4]> = commits
        .iter()
        .map(|c| {
            [
                c.short_hash.clone(),
                c.display_time(),
                c.author_name.clone(),
                truncate_message(&c.message.replace('\n', " ")),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = vec!["Recent Activity".to_string()];
    out.push(format_row(&HEADERS.map(String::from), &widths));
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in &rows {
        out.push(format_row(row, &widths));
    }
    out.join("\n")
}

fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    padded.join("  ").trim_end().to_string()
}

/// Total count followed by per-category counts for populated categories
#[must_use]
pub fn render_statistics(grouped: &CategorizedCommits) -> String {
    let mut lines = vec![format!("Total Commits: {}", grouped.total())];
    lines.extend(
        grouped
            .counts()
            .map(|(category, count)| format!("{category}: {count}")),
    );
    lines.join("\n")
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use proptest::prelude::*;

    proptest! {
        /// Property: a truncated message never exceeds the width plus "..."
        #[test]
        fn prop_truncate_bounded(message in "\\PC{0,120}") {
            let cut = truncate_message(&message);
            prop_assert!(cut.chars().count() <= MESSAGE_WIDTH + 3);
        }

        /// Property: the kept part is always a prefix of the original
        #[test]
        fn prop_truncate_keeps_prefix(message in "\\PC{0,120}") {
            let cut = truncate_message(&message);
            let head = cut.strip_suffix("...").filter(|_| cut != message).unwrap_or(&cut);
            prop_assert!(message.starts_with(head));
        }

        /// Property: the table has a title, header and rule, then one line per commit
        #[test]
        fn prop_table_line_count(messages in proptest::collection::vec("[a-z: ]{1,80}", 0..10)) {
            let at = Local.with_ymd_and_hms(2026, 1, 17, 9, 30, 0).unwrap();
            let commits: Vec<CommitRecord> = messages
                .iter()
                .enumerate()
                .map(|(i, m)| CommitRecord::new(format!("{i:040x}"), m, "Ann", "dev@example.com", at))
                .collect();
            prop_assert_eq!(render_table(&commits).lines().count(), commits.len() + 3);
        }
    }
}
