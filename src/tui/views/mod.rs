// Views module - screen-level rendering
//
// The calculator has a single screen: display, keypad, optional logs and a
// status line, with the help overlay and toast drawn last.

use super::app::App;
use super::components::{display_panel, help, keypad, logs_panel, status_bar};
use super::layout::ShellLayout;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
///
/// Records where the keypad landed so mouse clicks can be hit-tested.
pub fn draw(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(
        Style::default()
            .bg(app.theme.background)
            .fg(app.theme.foreground),
    );
    f.render_widget(bg_block, f.area());

    let layout = ShellLayout::compute(f.area(), app.show_keypad, app.show_logs);

    display_panel::render(f, layout.display, app);

    app.keypad_area = layout.keypad;
    if let Some(area) = layout.keypad {
        keypad::render(f, area, app);
    }

    if let Some(area) = layout.logs {
        logs_panel::render(f, area, app);
    }

    status_bar::render(f, layout.status, app);

    if app.show_help {
        help::render(f, app);
    }

    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::engine::Input;
    use crate::logging::LogBuffer;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn full_screen_records_keypad_area() {
        let mut app = App::with_config(&Config::default(), LogBuffer::new());
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let keypad = app.keypad_area.expect("keypad drawn");
        assert_eq!(keypad.height, 24 - 4 - 1);
        assert!(screen_text(&terminal).contains("tally"));

        // Clicking the centre of the top-left button clears
        assert_eq!(app.button_at(keypad.x + 2, keypad.y + 1), Some(Input::Clear));
    }

    #[test]
    fn hidden_keypad_disables_clicks() {
        let mut config = Config::default();
        config.display.show_keypad = false;
        let mut app = App::with_config(&config, LogBuffer::new());
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        assert!(app.keypad_area.is_none());
        assert_eq!(app.button_at(5, 6), None);
    }

    #[test]
    fn overlays_draw_on_top() {
        let mut app = App::with_config(&Config::default(), LogBuffer::new());
        app.show_help = true;
        app.show_logs = true;
        app.show_toast("hello toast");
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Help"));
        assert!(text.contains("Logs"));
        assert!(text.contains("hello toast"));
    }
}
