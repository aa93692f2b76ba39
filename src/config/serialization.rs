//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# tally configuration

# Theme: Dark, Light, Nord, Gruvbox, Monokai (press 't' in the TUI to cycle)
theme = "{theme}"

# ─────────────────────────────────────────────────────────────────────────────
# ENGINE
# ─────────────────────────────────────────────────────────────────────────────
# max_digits: digits per typed operand, decimal point not counted (1-15)
# decimal_precision: fractional digits kept after a computation (0-15)
# Env overrides: TALLY_MAX_DIGITS, TALLY_DECIMAL_PRECISION

[engine]
max_digits = {max_digits}
decimal_precision = {precision}

# ─────────────────────────────────────────────────────────────────────────────
# DISPLAY
# ─────────────────────────────────────────────────────────────────────────────
# group_separator: thousands separator, "" to disable grouping
# error_flash_ms: border flash after division by zero / overflow
# press_flash_ms: keypad button highlight after a press

[display]
group_separator = "{separator}"
error_flash_ms = {error_flash}
press_flash_ms = {press_flash}
show_keypad = {show_keypad}

# ─────────────────────────────────────────────────────────────────────────────
# LOGGING
# ─────────────────────────────────────────────────────────────────────────────
# RUST_LOG overrides level when set

[logging]
level = "{level}"
file_enabled = {file_enabled}
file_dir = "{file_dir}"
file_rotation = "{rotation}"
file_prefix = "{prefix}"
"#,
            theme = escape_toml(&self.theme),
            max_digits = self.engine.max_digits,
            precision = self.engine.decimal_precision,
            separator = escape_toml(&self.display.separator_str()),
            error_flash = self.display.error_flash_ms,
            press_flash = self.display.press_flash_ms,
            show_keypad = self.display.show_keypad,
            level = escape_toml(&self.logging.level),
            file_enabled = self.logging.file_enabled,
            file_dir = escape_toml(&self.logging.file_dir.display().to_string()),
            rotation = self.logging.file_rotation.as_str(),
            prefix = escape_toml(&self.logging.file_prefix),
        )
    }
}

/// Escape a value for a basic (double-quoted) TOML string
fn escape_toml(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
