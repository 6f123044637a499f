// Copyright (c) 2026 - present Prayag Tushar
// SPDX-License-Identifier: MIT

//! System clipboard access for the rendered summary

use thiserror::Error;
use tracing::debug;

/// Clipboard errors
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard could be opened (e.g. headless session)
    #[error("Clipboard not available: {0}")]
    NotAvailable(String),

    /// The clipboard rejected the text
    #[error("Failed to copy to clipboard: {0}")]
    SetFailed(String),
}

/// Copy text to the system clipboard
///
/// # Errors
///
/// Returns `ClipboardError` if no clipboard is available or the copy fails.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ClipboardError::NotAvailable(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| ClipboardError::SetFailed(e.to_string()))?;
    debug!(bytes = text.len(), "Copied summary to clipboard");
    Ok(())
}
