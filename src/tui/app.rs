// TUI application state
//
// Owns the calculator engine plus everything the shell layers on top of it:
// theme, panel toggles, timed feedback (press highlight, error flash, toast)
// and the keypad geometry from the last frame for mouse hit-testing.

use super::clipboard;
use super::components::{keypad, Toast};
use super::flash::{self, Flash};
use super::input::InputHandler;
use crate::config::Config;
use crate::engine::{CalculatorEngine, Display, DisplayFormat, Input, Mode, Operator};
use crate::logging::LogBuffer;
use crate::theme::{Theme, ThemeKind};
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use std::time::Duration;

/// Main application state for the TUI
pub struct App {
    pub engine: CalculatorEngine,

    /// Grouping rules for the display lines
    pub format: DisplayFormat,

    pub theme_kind: ThemeKind,
    pub theme: Theme,

    /// Keypad visibility (config `display.show_keypad`)
    pub show_keypad: bool,

    /// Logs panel toggled with `l` / F2
    pub show_logs: bool,

    /// Help overlay toggled with `?` / F1
    pub show_help: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Log buffer for the logs panel
    pub log_buffer: LogBuffer,

    pub toast: Option<Toast>,

    /// Display border flashes while this is live
    pub error_flash: Option<Flash<()>>,

    /// Most recent input, highlighted on the keypad while live
    pub pressed: Option<Flash<Input>>,

    /// Keypad area from the last frame (None when hidden)
    pub keypad_area: Option<Rect>,

    error_flash_duration: Duration,
    press_flash_duration: Duration,

    /// Debounce for shell command keys
    input_handler: InputHandler,
}

impl App {
    pub fn with_config(config: &Config, log_buffer: LogBuffer) -> Self {
        let theme_kind = ThemeKind::from_name(&config.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %config.theme, "Unknown theme, using Dark");
            ThemeKind::default()
        });

        Self {
            engine: CalculatorEngine::new(config.engine.engine_config()),
            format: config.display.format(),
            theme_kind,
            theme: theme_kind.theme(),
            show_keypad: config.display.show_keypad,
            show_logs: false,
            show_help: false,
            should_quit: false,
            log_buffer,
            toast: None,
            error_flash: None,
            pressed: None,
            keypad_area: None,
            error_flash_duration: config.display.error_flash(),
            press_flash_duration: config.display.press_flash(),
            input_handler: InputHandler::new(),
        }
    }

    /// Forward an input to the engine and start the matching visual feedback
    pub fn apply_input(&mut self, input: Input) {
        let was_error = self.engine.mode() == Mode::Error;
        self.engine.apply(input);

        self.pressed = Some(Flash::new(input, self.press_flash_duration));
        if !was_error && self.engine.mode() == Mode::Error {
            self.error_flash = Some(Flash::new((), self.error_flash_duration));
        }
    }

    /// Current display lines, formatted for this session
    pub fn display(&self) -> Display {
        self.engine.render_with(&self.format)
    }

    /// Drop expired feedback; called on every timer tick
    pub fn tick(&mut self) {
        flash::expire(&mut self.pressed);
        flash::expire(&mut self.error_flash);
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    pub fn is_pressed(&self, input: Input) -> bool {
        self.pressed.as_ref().is_some_and(|p| *p.value() == input)
    }

    /// Operator waiting for its right operand, until the first key of it
    pub fn armed_operator(&self) -> Option<Operator> {
        self.engine
            .pending_operator()
            .filter(|_| self.engine.current_operand().is_empty())
    }

    pub fn is_error_flashing(&self) -> bool {
        self.error_flash.is_some()
    }

    pub fn cycle_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
        tracing::debug!(theme = self.theme_kind.name(), "Theme changed");
        self.show_toast(format!("Theme: {}", self.theme_kind.name()));
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Copy the current display value to the system clipboard
    pub fn copy_current(&mut self) {
        let current = self.display().current;
        match clipboard::copy_display_value(&current, &self.format) {
            Ok(text) => self.show_toast(format!("✓ Copied {}", text)),
            Err(e) => {
                tracing::warn!(error = %e, "Copy failed");
                self.show_toast(format!("✗ {}", e));
            }
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// The input behind the keypad button at a terminal cell, if any
    pub fn button_at(&self, column: u16, row: u16) -> Option<Input> {
        let area = self.keypad_area?;
        keypad::button_at(area, column, row).and_then(|b| b.input())
    }

    /// Handle a key press - returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Digit, Operator};

    fn app() -> App {
        App::with_config(&Config::default(), LogBuffer::new())
    }

    fn digit(c: char) -> Input {
        Input::Digit(Digit::new(c).unwrap())
    }

    #[test]
    fn inputs_reach_engine_with_grouping() {
        let mut app = app();
        for c in "1234567".chars() {
            app.apply_input(digit(c));
        }
        assert_eq!(app.display().current, "1,234,567");
        assert!(app.is_pressed(digit('7')));
        assert!(!app.is_pressed(digit('6')));
    }

    #[test]
    fn error_transition_starts_flash_once() {
        let mut app = app();
        app.apply_input(digit('8'));
        app.apply_input(Input::Operator(Operator::Divide));
        app.apply_input(digit('0'));
        assert!(!app.is_error_flashing());

        app.apply_input(Input::Equals);
        assert_eq!(app.display().current, "Error");
        assert!(app.is_error_flashing());

        // Equals in error mode does not restart the flash
        app.error_flash = None;
        app.apply_input(Input::Equals);
        assert!(!app.is_error_flashing());
    }

    #[test]
    fn tick_expires_zero_length_feedback() {
        let mut config = Config::default();
        config.display.press_flash_ms = 0;
        config.display.error_flash_ms = 0;
        let mut app = App::with_config(&config, LogBuffer::new());

        app.apply_input(digit('1'));
        app.apply_input(Input::Operator(Operator::Divide));
        app.apply_input(digit('0'));
        app.apply_input(Input::Equals);
        assert!(app.pressed.is_some());
        assert!(app.error_flash.is_some());

        app.tick();
        assert!(app.pressed.is_none());
        assert!(app.error_flash.is_none());
    }

    #[test]
    fn theme_from_config_and_cycle() {
        let mut config = Config::default();
        config.theme = "gruvbox".to_string();
        let mut app = App::with_config(&config, LogBuffer::new());
        assert_eq!(app.theme_kind, ThemeKind::Gruvbox);

        app.cycle_theme();
        assert_eq!(app.theme_kind, ThemeKind::Monokai);
        assert_eq!(app.toast.as_ref().unwrap().message(), "Theme: Monokai");
    }

    #[test]
    fn unknown_theme_falls_back_to_dark() {
        let mut config = Config::default();
        config.theme = "Solarized".to_string();
        let app = App::with_config(&config, LogBuffer::new());
        assert_eq!(app.theme_kind, ThemeKind::Dark);
    }

    #[test]
    fn copy_in_error_mode_reports_failure() {
        let mut app = app();
        app.apply_input(digit('1'));
        app.apply_input(Input::Operator(Operator::Divide));
        app.apply_input(digit('0'));
        app.apply_input(Input::Equals);

        app.copy_current();
        assert_eq!(app.toast.as_ref().unwrap().message(), "✗ nothing to copy");
    }

    #[test]
    fn engine_limits_come_from_config() {
        let mut config = Config::default();
        config.engine.max_digits = 3;
        let mut app = App::with_config(&config, LogBuffer::new());
        for c in "98765".chars() {
            app.apply_input(digit(c));
        }
        assert_eq!(app.display().current, "987");
    }

    #[test]
    fn button_at_requires_rendered_keypad() {
        let mut app = app();
        assert_eq!(app.button_at(1, 1), None);

        app.keypad_area = Some(Rect::new(0, 0, 40, 15));
        // Top-left button is AC
        assert_eq!(app.button_at(1, 1), Some(Input::Clear));
        // Bottom-right button is =
        assert_eq!(app.button_at(39, 14), Some(Input::Equals));
        assert_eq!(app.button_at(45, 1), None);
    }
}
