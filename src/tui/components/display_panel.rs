// Display panel component
//
// Two right-aligned lines: the pending expression (muted) above the operand
// being typed or the result (bold). Long numbers lose digits on the left so
// the least significant end stays readable.

use crate::engine::ERROR_SENTINEL;
use crate::tui::app::App;
use crate::util::elide_start;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the display panel
///
/// The border takes the error color while an error flash is live.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let display = app.display();
    let width = usize::from(area.width.saturating_sub(2));

    let border_color = if app.is_error_flashing() {
        theme.error
    } else {
        theme.border
    };

    // Results stand out from typed operands
    let current_color = if display.current == ERROR_SENTINEL {
        theme.error
    } else if app.engine.awaiting_fresh_entry() {
        theme.highlight
    } else {
        theme.foreground
    };
    let current_style = Style::default()
        .fg(current_color)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::styled(
            elide_start(&display.previous, width),
            Style::default().fg(theme.muted),
        )
        .right_aligned(),
        Line::styled(elide_start(&display.current, width), current_style).right_aligned(),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(border_color))
            .title(" tally "),
    );

    f.render_widget(paragraph, area);
}
