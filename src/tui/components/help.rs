//! Help overlay
//!
//! Key bindings for both the calculator and the shell. While open it absorbs
//! all input; `?`, F1 or Esc closes it.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Render the help overlay centered over the whole frame
pub fn render(f: &mut Frame, app: &App) {
    let limits = app.engine.config();
    let key_style = Style::default().fg(app.theme.operator_key);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);

    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::from(Span::styled(" Calculator", header_style)),
        kb("0-9 .", "Digits and decimal point"),
        kb("+ - * x /", "Operators"),
        kb("Enter, =", "Compute"),
        kb("%", "Percent"),
        kb("Backspace, <", "Delete last digit"),
        kb("Esc, c", "Clear all"),
        Line::raw(""),
        Line::from(Span::styled(" Shell", header_style)),
        kb("y", "Copy value"),
        kb("t", "Next theme"),
        kb("l, F2", "Toggle logs"),
        kb("?, F1", "Toggle this help"),
        kb("q, Ctrl+C", "Quit"),
        kb("Mouse", "Click keypad buttons"),
        Line::raw(""),
        Line::from(vec![
            Span::styled(" Limits: ", desc_style),
            Span::styled(
                format!(
                    "{} digits, {} decimals",
                    limits.max_digits, limits.decimal_precision
                ),
                key_style,
            ),
        ]),
    ]);

    let area = centered_rect(40, 20, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .border_type(app.theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}
