// Copyright (c) 2026 - present Prayag Tushar
// SPDX-License-Identifier: MIT

//! Command-line configuration for the standup binary
//!
//! Every option can also be supplied through a `STANDUP_*` environment
//! variable. Options left unset fall back to scanning the current directory
//! over the last day for all authors.

use clap::{Parser, Subcommand};
use standup_git::{ScanRequest, is_valid_repository};

/// Look-back window used when `--days` is not given
pub const DEFAULT_DAYS: u32 = 1;

/// Repository reference used when `--path` is not given
pub const DEFAULT_PATH: &str = ".";

/// Standup CLI - generate daily standup summaries from git commits
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "standup")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Subcommand to run (defaults to generating a summary)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the git repository, or a public remote URL
    ///
    /// Remote references (https://github.com/..., git@github.com:...,
    /// https://...*.git*, git://...) are cloned to a temporary directory
    /// that is removed after scanning.
    #[arg(short, long, env = "STANDUP_PATH")]
    pub path: Option<String>,

    /// Number of days to look back
    #[arg(short, long, env = "STANDUP_DAYS")]
    pub days: Option<u32>,

    /// Filter by author name (case-insensitive substring)
    #[arg(short, long, env = "STANDUP_AUTHOR")]
    pub author: Option<String>,

    /// Copy the summary to the clipboard
    #[arg(short, long, default_value = "false")]
    pub copy: bool,

    /// Print commits and summary as JSON instead of a table
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with the report.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Generate a standup summary from recent git commits
    Generate,

    /// Show the effective configuration
    Config,
}

impl Config {
    /// Repository reference, defaulting to the current directory
    #[must_use]
    pub fn reference(&self) -> &str {
        self.path.as_deref().unwrap_or(DEFAULT_PATH)
    }

    /// Look-back window in days
    #[must_use]
    pub fn days(&self) -> u32 {
        self.days.unwrap_or(DEFAULT_DAYS)
    }

    /// Author filter, treating an empty string as no filter
    #[must_use]
    pub fn author_filter(&self) -> Option<&str> {
        self.author.as_deref().filter(|a| !a.is_empty())
    }

    /// Build the scan request for the pipeline
    #[must_use]
    pub fn scan_request(&self) -> ScanRequest {
        let request = ScanRequest::new(self.reference()).days(self.days());
        match self.author_filter() {
            Some(author) => request.author(author),
            None => request,
        }
    }

    /// Validate the configuration before any history is read
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::RepositoryUnavailable` if a local reference is
    /// missing or not a git repository. Remote references are not checked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_repository(self.reference()) {
            return Err(ConfigError::RepositoryUnavailable(
                self.reference().to_string(),
            ));
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }

    /// Human-readable listing for the `config` subcommand
    #[must_use]
    pub fn describe(&self) -> String {
        let author = self.author_filter().unwrap_or("Optional (not set)");
        [
            "Standup CLI Configuration".to_string(),
            format!("  Default days: {DEFAULT_DAYS}"),
            format!("  Default path: {DEFAULT_PATH} (current directory)"),
            format!("  Days: {}", self.days()),
            format!("  Path: {}", self.reference()),
            format!("  Author filter: {author}"),
        ]
        .join("\n")
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Local reference missing or not a repository
    #[error("'{0}' is not a valid git repository")]
    RepositoryUnavailable(String),
}
