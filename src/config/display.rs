//! Display configuration
//!
//! `[display]` section: number grouping, flash timings, keypad visibility.

use crate::engine::DisplayFormat;
use serde::Deserialize;
use std::time::Duration;

/// Display settings
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySettings {
    /// Thousands separator; `None` disables grouping
    pub group_separator: Option<char>,
    /// How long the display border flashes after entering error mode
    pub error_flash_ms: u64,
    /// How long a pressed keypad button stays highlighted
    pub press_flash_ms: u64,
    /// Show the clickable keypad below the display
    pub show_keypad: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            group_separator: Some(','),
            error_flash_ms: 500,
            press_flash_ms: 100,
            show_keypad: true,
        }
    }
}

/// Display settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileDisplay {
    /// A single character, or an empty string to disable grouping
    pub group_separator: Option<String>,
    pub error_flash_ms: Option<u64>,
    pub press_flash_ms: Option<u64>,
    pub show_keypad: Option<bool>,
}

impl DisplaySettings {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileDisplay>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let group_separator = match file.group_separator {
            None => defaults.group_separator,
            Some(s) => parse_separator(&s).unwrap_or_else(|| {
                eprintln!(
                    "Warning: display.group_separator {:?} must be empty or one character other than a digit, '.' or '-', using ','",
                    s
                );
                defaults.group_separator
            }),
        };

        Self {
            group_separator,
            error_flash_ms: file.error_flash_ms.unwrap_or(defaults.error_flash_ms),
            press_flash_ms: file.press_flash_ms.unwrap_or(defaults.press_flash_ms),
            show_keypad: file.show_keypad.unwrap_or(defaults.show_keypad),
        }
    }

    pub fn format(&self) -> DisplayFormat {
        DisplayFormat {
            group_separator: self.group_separator,
        }
    }

    pub fn error_flash(&self) -> Duration {
        Duration::from_millis(self.error_flash_ms)
    }

    pub fn press_flash(&self) -> Duration {
        Duration::from_millis(self.press_flash_ms)
    }

    /// Separator as written to TOML
    pub fn separator_str(&self) -> String {
        self.group_separator.map(String::from).unwrap_or_default()
    }
}

/// `""` means no grouping; anything longer than one character is invalid
///
/// Digits, `.` and `-` already appear in operands, so they cannot separate
/// groups without changing the number.
fn parse_separator(s: &str) -> Option<Option<char>> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Some(None),
        (Some(c), None) if c.is_ascii_digit() || c == '.' || c == '-' => None,
        (Some(c), None) => Some(Some(c)),
        _ => None,
    }
}
