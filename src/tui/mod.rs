// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, timer ticks)
// - Routing calculator keys to the engine and shell keys to the app

pub mod app;
pub mod clipboard;
pub mod components;
pub mod flash;
pub mod input;
pub mod layout;
pub mod views;

use crate::config::Config;
use crate::keymap;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Timer tick: expires flashes and toasts between inputs
const TICK: Duration = Duration::from_millis(50);

/// Run the TUI
///
/// This function sets up the terminal, runs the event loop, and cleans up
/// when done.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::with_config(&config, log_buffer);
    tracing::info!(theme = app.theme_kind.name(), "Calculator ready");

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on terminal input and a periodic tick with tokio::select!, redrawing
/// after whichever completes first.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(TICK);

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Release → Quit chord → Help → Calculator → Shell commands
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    let key = key_event.code;

    match key_event.kind {
        KeyEventKind::Release => {
            app.handle_key_release(key);
            return;
        }
        KeyEventKind::Press => {}
        // Calculator keys may repeat, shell commands may not
        KeyEventKind::Repeat => {
            if !app.show_help {
                if let Some(input) = keymap::input_for_key(key, key_event.modifiers) {
                    app.apply_input(input);
                }
            }
            return;
        }
    }

    // Ctrl+C always quits, even with help open
    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Help absorbs everything while open
    if app.show_help {
        if matches!(key, KeyCode::Char('?') | KeyCode::F(1) | KeyCode::Esc)
            && app.handle_key_press(key)
        {
            app.show_help = false;
        }
        return;
    }

    // Calculator keys go straight to the engine, no debounce
    if let Some(input) = keymap::input_for_key(key, key_event.modifiers) {
        app.apply_input(input);
        return;
    }

    handle_shell_keys(app, key);
}

/// Shell commands: trigger once per press (debounced)
fn handle_shell_keys(app: &mut App, key: KeyCode) {
    let is_command = matches!(
        key,
        KeyCode::Char('q' | 'Q' | 't' | 'y' | 'l' | '?') | KeyCode::F(1) | KeyCode::F(2)
    );
    if !is_command || !app.handle_key_press(key) {
        return;
    }

    match key {
        KeyCode::Char('q' | 'Q') => app.should_quit = true,
        KeyCode::Char('t') => app.cycle_theme(),
        KeyCode::Char('y') => app.copy_current(),
        KeyCode::Char('l') | KeyCode::F(2) => app.toggle_logs(),
        KeyCode::Char('?') | KeyCode::F(1) => app.toggle_help(),
        _ => {}
    }
}

/// Handle mouse input: a left click on a keypad button presses it
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    if app.show_help {
        return;
    }
    if let MouseEventKind::Down(MouseButton::Left) = mouse_event.kind {
        if let Some(input) = app.button_at(mouse_event.column, mouse_event.row) {
            app.apply_input(input);
        }
    }
}
