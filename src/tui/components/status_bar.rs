// Status bar component
//
// One line of key hints at the bottom, shortened for narrow terminals.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Hint text for a given terminal width
pub fn hints(width: u16, theme_name: &str) -> String {
    let bp = Breakpoint::from_width(width);
    if bp.at_least(Breakpoint::Wide) {
        format!(
            " q quit │ t theme: {} │ y copy │ l logs │ ? help",
            theme_name
        )
    } else if bp.at_least(Breakpoint::Normal) {
        format!(" q quit │ t {} │ y copy │ ? help", theme_name)
    } else {
        " ? help".to_string()
    }
}

/// Render the status bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let status = Paragraph::new(hints(area.width, app.theme_kind.name()))
        .style(Style::default().fg(app.theme.muted));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_shrink_with_width() {
        assert!(hints(80, "Nord").contains("theme: Nord"));
        assert!(hints(80, "Nord").contains("l logs"));
        assert!(!hints(40, "Nord").contains("l logs"));
        assert!(hints(40, "Nord").contains("t Nord"));
        assert_eq!(hints(20, "Nord"), " ? help");
    }
}
