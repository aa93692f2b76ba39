// Startup module - displays banner and effective settings
//
// Headless mode prints the banner to stderr (stdout carries results);
// TUI mode sends the same summary to the logs panel instead.

use crate::config::{Config, VERSION};

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
}

/// One effective setting for display
pub struct SettingLine {
    pub name: &'static str,
    pub value: String,
}

/// Summarize the settings a user is most likely to have changed
fn settings(config: &Config) -> Vec<SettingLine> {
    let grouping = match config.display.group_separator {
        Some(sep) => format!("{:?}", sep),
        None => "off".to_string(),
    };
    let file_logs = if config.logging.file_enabled {
        format!(
            "{} ({})",
            config.logging.file_dir.display(),
            config.logging.file_rotation.as_str()
        )
    } else {
        "off".to_string()
    };

    vec![
        SettingLine {
            name: "digits",
            value: config.engine.max_digits.to_string(),
        },
        SettingLine {
            name: "precision",
            value: config.engine.decimal_precision.to_string(),
        },
        SettingLine {
            name: "grouping",
            value: grouping,
        },
        SettingLine {
            name: "file logs",
            value: file_logs,
        },
    ]
}

/// Print the startup banner for headless mode
pub fn print_startup(config: &Config) {
    use colors::*;

    eprintln!();
    eprintln!("  {BOLD}{CYAN}tally{RESET} {DIM}v{VERSION}{RESET}");
    eprintln!("  {DIM}Type keys and press Enter; Ctrl+D to quit{RESET}");
    eprintln!();

    if let Some(path) = Config::config_path() {
        if path.exists() {
            eprintln!("  {DIM}Config:{RESET} {GREEN}✓{RESET} {}", path.display());
        } else {
            eprintln!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}");
        }
    }

    for line in settings(config) {
        eprintln!("    {DIM}{:<10}{RESET} {}", line.name, line.value);
    }
    eprintln!();
}

/// Log the startup summary (shown in the TUI logs panel)
pub fn log_startup(config: &Config) {
    tracing::info!("tally v{}", VERSION);
    for line in settings(config) {
        tracing::info!("  {} = {}", line.name, line.value);
    }
}
