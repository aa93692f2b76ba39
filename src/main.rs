// tally - keyboard-driven terminal calculator
//
// Architecture:
// - Engine: pure state machine turning key inputs into display lines
// - Keymap: the single key binding table, shared by every front end
// - TUI (ratatui): display, clickable keypad, logs panel, themes
// - Headless: stdin line mode and `tally eval` for scripting
// - Config: env > ~/.config/tally/config.toml > defaults

mod cli;
mod config;
mod engine;
mod headless;
mod keymap;
mod logging;
mod startup;
mod theme;
mod tui;
mod util;

use anyhow::Result;
use config::{Config, LogRotation, LoggingConfig};
use logging::{LogBuffer, TuiLogLayer};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (eval, config ...)
    // If a command was handled, exit early
    if cli::handle_cli()? {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Load configuration first to determine TUI vs headless mode
    let config = Config::from_env();

    // Log buffer feeds the TUI logs panel
    let log_buffer = LogBuffer::new();

    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _file_guard = init_tracing(&config, &log_buffer);

    if config.enable_tui {
        startup::log_startup(&config);
        tui::run_tui(config, log_buffer).await?;
    } else {
        startup::print_startup(&config);
        headless::run_headless(&config)?;
    }

    Ok(())
}

/// Initialize tracing with conditional output
///
/// In TUI mode: capture logs to the buffer (prevents garbling the display)
/// In headless mode: write logs to stderr (stdout carries results)
/// File logging: optionally also write JSON to rotating log files
///
/// Precedence: RUST_LOG env var > config file > default "info"
fn init_tracing(config: &Config, log_buffer: &LogBuffer) -> Option<WorkerGuard> {
    let default_filter = format!("tally={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let tui_layer = config
        .enable_tui
        .then(|| TuiLogLayer::new(log_buffer.clone()));
    let stderr_layer =
        (!config.enable_tui).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let (file_layer, guard) = match file_writer(&config.logging) {
        Some((writer, guard)) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false),
            ),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

/// Non-blocking rolling file writer, when file logging is enabled
fn file_writer(logging: &LoggingConfig) -> Option<(NonBlocking, WorkerGuard)> {
    if !logging.file_enabled {
        return None;
    }

    if let Err(e) = std::fs::create_dir_all(&logging.file_dir) {
        // Fall back to non-file logging
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            logging.file_dir, e
        );
        return None;
    }

    let file_appender = match logging.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Daily => {
            tracing_appender::rolling::daily(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Never => {
            tracing_appender::rolling::never(&logging.file_dir, &logging.file_prefix)
        }
    };

    // Writes happen on a background thread
    Some(tracing_appender::non_blocking(file_appender))
}
