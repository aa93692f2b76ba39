//! Toast notification component
//!
//! A non-blocking overlay that auto-dismisses after two seconds.
//! Renders in the bottom-right corner on top of all other content.

use crate::theme::Theme;
use crate::tui::flash::Flash;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

const TOAST_DURATION: Duration = Duration::from_secs(2);

/// A toast notification that auto-dismisses
pub struct Toast {
    message: Flash<String>,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Flash::new(message.into(), TOAST_DURATION),
        }
    }

    pub fn message(&self) -> &str {
        self.message.value()
    }

    /// Check if the toast has expired and should be removed
    pub fn is_expired(&self) -> bool {
        self.message.is_expired()
    }

    /// Render the toast in the bottom-right corner, above the status bar
    ///
    /// Uses `Clear` widget to ensure toast is visible on top of other content.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        // 2 chars padding plus borders
        let width = (self.message().width() as u16 + 4).min(area.width);
        let height = 3u16.min(area.height);

        let x = area.right().saturating_sub(width + 1).max(area.x);
        let y = area.bottom().saturating_sub(height + 1).max(area.y);
        let toast_area = Rect::new(x, y, width, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.highlight))
            .style(Style::default().bg(theme.background));

        let text = Paragraph::new(self.message())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.foreground))
            .block(block);

        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}
