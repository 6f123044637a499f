// Copyright (c) 2026 - present Prayag Tushar
// SPDX-License-Identifier: MIT

//! Top-level command flow
//!
//! Writes the whole report to the given writer so the flow can be exercised
//! without a terminal.

use std::io::Write;

use anyhow::{Context, Result};
use standup_git::pipeline::scan;
use tracing::{debug, warn};

use crate::clipboard::copy_to_clipboard;
use crate::config::{Command, Config};
use crate::report::{render_statistics, render_table};

/// Execute the command selected by `config`
///
/// # Errors
///
/// Returns an error if the reference is not a repository, the scan fails, or
/// writing to `out` fails. Clipboard failures only produce a warning.
pub fn run(config: &Config, out: &mut impl Write) -> Result<()> {
    match config.command {
        Some(Command::Config) => {
            writeln!(out, "{}", config.describe())?;
            Ok(())
        }
        Some(Command::Generate) | None => generate(config, out),
    }
}

fn generate(config: &Config, out: &mut impl Write) -> Result<()> {
    config.validate()?;

    let request = config.scan_request();
    debug!(reference = %request.reference, days = request.days, "Scanning repository");
    if !config.json {
        writeln!(
            out,
            "Scanning repo at {} for the last {} day(s)...",
            request.reference, request.days
        )?;
    }

    let standup = scan(&request).with_context(|| format!("scanning {}", request.reference))?;

    if config.json {
        writeln!(out, "{}", standup.to_json()?)?;
    } else if standup.commits.is_empty() {
        writeln!(out, "No commits found for this period.")?;
        return Ok(());
    } else {
        writeln!(out, "Found {} commit(s)\n", standup.commits.len())?;
        writeln!(out, "{}", render_table(&standup.commits))?;
        writeln!(out, "\n--- Standup Summary ---")?;
        writeln!(out, "{}", standup.text)?;
        writeln!(out, "\n--- Statistics ---")?;
        writeln!(out, "{}", render_statistics(&standup.grouped))?;
    }

    // Nothing to paste when no commits matched
    if config.copy && !standup.commits.is_empty() {
        match copy_to_clipboard(&standup.text) {
            Ok(()) => writeln!(out, "\n✓ Copied to clipboard!")?,
            Err(e) => {
                warn!(error = %e, "Clipboard copy failed");
                writeln!(out, "Warning: Could not copy to clipboard: {e}")?;
            }
        }
    }

    Ok(())
}
