//! Clipboard support for the `y` key
//!
//! Copies the plain number behind the display line, so pasting `1,234.5`
//! elsewhere yields `1234.5`. The clipboard handle is opened per copy and
//! dropped right after.

use crate::engine::{DisplayFormat, ERROR_SENTINEL};
use anyhow::{bail, Context, Result};
use arboard::Clipboard;

/// Text placed on the clipboard for a rendered display line
///
/// Fails on the error sentinel and on an empty line: there is no number to copy.
pub fn clipboard_text(current: &str, format: &DisplayFormat) -> Result<String> {
    if current.is_empty() || current == ERROR_SENTINEL {
        bail!("nothing to copy");
    }
    Ok(format.strip_grouping(current))
}

/// Copy the display line's number to the system clipboard, returning what was copied
pub fn copy_display_value(current: &str, format: &DisplayFormat) -> Result<String> {
    let text = clipboard_text(current, format)?;
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text.as_str())
        .context("Failed to set clipboard text")?;
    Ok(text)
}
