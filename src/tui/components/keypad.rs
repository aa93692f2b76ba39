//! Keypad component
//!
//! A clickable 4-column button grid. Each button is bound to the same key a
//! keyboard user would press, so keyboard and mouse go through one keymap
//! and the press highlight lights up whichever way the input arrived.

use crate::engine::Input;
use crate::keymap;
use crate::tui::app::App;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Grid width in button columns
const COLUMNS: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Digit,
    Operator,
    Action,
    Equals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    /// Keyboard key with the same effect
    pub key: KeyCode,
    pub kind: ButtonKind,
    /// Columns occupied
    pub span: u16,
}

impl Button {
    const fn new(label: &'static str, key: KeyCode, kind: ButtonKind) -> Self {
        Self {
            label,
            key,
            kind,
            span: 1,
        }
    }

    const fn wide(self) -> Self {
        Self { span: 2, ..self }
    }

    pub fn input(&self) -> Option<Input> {
        keymap::input_for_key(self.key, KeyModifiers::NONE)
    }
}

const fn key(label: &'static str, c: char, kind: ButtonKind) -> Button {
    Button::new(label, KeyCode::Char(c), kind)
}

/// Button rows, top to bottom
pub static ROWS: [&[Button]; 5] = [
    &[
        Button::new("AC", KeyCode::Esc, ButtonKind::Action),
        Button::new("⌫", KeyCode::Backspace, ButtonKind::Action),
        key("%", '%', ButtonKind::Action),
        key("÷", '/', ButtonKind::Operator),
    ],
    &[
        key("7", '7', ButtonKind::Digit),
        key("8", '8', ButtonKind::Digit),
        key("9", '9', ButtonKind::Digit),
        key("×", '*', ButtonKind::Operator),
    ],
    &[
        key("4", '4', ButtonKind::Digit),
        key("5", '5', ButtonKind::Digit),
        key("6", '6', ButtonKind::Digit),
        key("−", '-', ButtonKind::Operator),
    ],
    &[
        key("1", '1', ButtonKind::Digit),
        key("2", '2', ButtonKind::Digit),
        key("3", '3', ButtonKind::Digit),
        key("+", '+', ButtonKind::Operator),
    ],
    &[
        key("0", '0', ButtonKind::Digit).wide(),
        key(".", '.', ButtonKind::Digit),
        Button::new("=", KeyCode::Enter, ButtonKind::Equals),
    ],
];

/// Screen rectangle of every button when the keypad fills `area`
pub fn button_rects(area: Rect) -> Vec<(Rect, Button)> {
    let row_areas =
        Layout::vertical(ROWS.iter().map(|_| Constraint::Ratio(1, ROWS.len() as u32))).split(area);

    let mut rects = Vec::with_capacity(20);
    for (buttons, row_area) in ROWS.iter().zip(row_areas.iter()) {
        let cells = Layout::horizontal(
            buttons
                .iter()
                .map(|b| Constraint::Ratio(u32::from(b.span), COLUMNS)),
        )
        .split(*row_area);
        rects.extend(cells.iter().copied().zip(buttons.iter().copied()));
    }
    rects
}

/// Button under a terminal cell
pub fn button_at(area: Rect, column: u16, row: u16) -> Option<Button> {
    let position = Position::new(column, row);
    button_rects(area)
        .into_iter()
        .find(|(rect, _)| rect.contains(position))
        .map(|(_, button)| button)
}

/// Render the keypad grid
///
/// Buttons get their own borders once rows are at least three cells tall;
/// shorter grids draw bare labels. The operator of a pending operation stays
/// reversed until its right operand is started.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    for (rect, button) in button_rects(area) {
        render_button(f, rect, &button, app);
    }
}

fn render_button(f: &mut Frame, rect: Rect, button: &Button, app: &App) {
    let theme = &app.theme;
    let input = button.input();
    let pressed = input.is_some_and(|input| app.is_pressed(input));
    let armed = matches!(
        (input, app.armed_operator()),
        (Some(Input::Operator(op)), Some(armed)) if op == armed
    );

    let fg = match button.kind {
        ButtonKind::Digit => theme.digit_key,
        ButtonKind::Operator => theme.operator_key,
        ButtonKind::Action => theme.action_key,
        ButtonKind::Equals => theme.equals_key,
    };
    let mut style = Style::default().fg(fg).add_modifier(Modifier::BOLD);
    if pressed {
        style = style.bg(theme.pressed_bg);
    } else if armed {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let bordered = rect.height >= 3 && rect.width >= 4;
    let inner_height = if bordered {
        rect.height - 2
    } else {
        rect.height
    };

    // Center the label vertically
    let mut lines = vec![Line::raw(""); usize::from(inner_height.saturating_sub(1) / 2)];
    lines.push(Line::raw(button.label));

    let mut paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(style);
    if bordered {
        let border_color = if pressed || armed { fg } else { theme.border };
        paragraph = paragraph.block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(border_color)),
        );
    }

    f.render_widget(paragraph, rect);
}
