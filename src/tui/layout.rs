/// Responsive layout for the calculator shell.
///
/// Single source of truth for size thresholds - no magic numbers scattered in render code.
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Display panel height: two text lines plus borders
pub const DISPLAY_HEIGHT: u16 = 4;

/// Logs panel height when shown
pub const LOGS_HEIGHT: u16 = 8;

/// The calculator column never grows wider than this
pub const MAX_COLUMN_WIDTH: u16 = 44;

/// Keypad rows; each needs at least one terminal row
pub const KEYPAD_ROWS: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 30 cols: help hint only
    Compact,
    /// 30-59 cols: standard calculator
    Normal,
    /// 60+ cols: full status hints
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=29 => Breakpoint::Compact,
            30..=59 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
        }
    }
}

/// Areas for each shell panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    pub display: Rect,
    /// None when hidden by config or too little height
    pub keypad: Option<Rect>,
    pub logs: Option<Rect>,
    pub status: Rect,
}

impl ShellLayout {
    /// Stack display, keypad, logs and status bar top to bottom
    ///
    /// Display and keypad share a centered column; logs and status bar span
    /// the full width. Logs win over the keypad when height is short.
    pub fn compute(area: Rect, show_keypad: bool, show_logs: bool) -> Self {
        let status_height = 1;
        let mut remaining = area
            .height
            .saturating_sub(DISPLAY_HEIGHT)
            .saturating_sub(status_height);

        let logs_height = if show_logs {
            let h = remaining.min(LOGS_HEIGHT);
            remaining -= h;
            h
        } else {
            0
        };

        let keypad_height = if show_keypad && remaining >= KEYPAD_ROWS {
            remaining
        } else {
            0
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(DISPLAY_HEIGHT),
                Constraint::Length(keypad_height),
                Constraint::Min(0),
                Constraint::Length(logs_height),
                Constraint::Length(status_height),
            ])
            .split(area);

        Self {
            display: centered_column(rows[0]),
            keypad: (keypad_height > 0).then(|| centered_column(rows[1])),
            logs: (logs_height > 0).then_some(rows[3]),
            status: rows[4],
        }
    }
}

/// Horizontally center a column of at most `MAX_COLUMN_WIDTH`
fn centered_column(area: Rect) -> Rect {
    let width = area.width.min(MAX_COLUMN_WIDTH);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}
