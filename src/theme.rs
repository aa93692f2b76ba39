// Theme system for the TUI
//
// A small fixed set of themes, switchable at runtime with 't'.
// Each theme defines colors for every calculator widget.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Nord,
    Gruvbox,
    Monokai,
}

impl ThemeKind {
    /// Get all available themes
    pub fn all() -> &'static [ThemeKind] {
        &[
            ThemeKind::Dark,
            ThemeKind::Light,
            ThemeKind::Nord,
            ThemeKind::Gruvbox,
            ThemeKind::Monokai,
        ]
    }

    /// Look up a theme by its display name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Nord => "Nord",
            ThemeKind::Gruvbox => "Gruvbox",
            ThemeKind::Monokai => "Monokai",
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Nord => Theme::nord(),
            ThemeKind::Gruvbox => Theme::gruvbox(),
            ThemeKind::Monokai => Theme::monokai(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    /// Secondary text: previous operand line, hints
    pub muted: Color,
    pub border: Color,
    pub border_type: BorderType,
    /// Title, toast border, focused elements
    pub highlight: Color,

    // Keypad
    pub digit_key: Color,
    pub operator_key: Color,
    pub action_key: Color,
    pub equals_key: Color,
    pub pressed_bg: Color,

    /// Error flash and the `Error` sentinel
    pub error: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default): terminal colors on the terminal's own background
    pub fn dark() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            muted: Color::Gray,
            border: Color::DarkGray,
            border_type: BorderType::Rounded,
            highlight: Color::Cyan,

            digit_key: Color::White,
            operator_key: Color::Yellow,
            action_key: Color::LightMagenta,
            equals_key: Color::Cyan,
            pressed_bg: Color::DarkGray,

            error: Color::Red,

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            muted: Color::DarkGray,
            border: Color::Gray,
            border_type: BorderType::Plain,
            highlight: Color::Blue,

            digit_key: Color::Black,
            operator_key: Color::Rgb(184, 134, 11), // Dark goldenrod
            action_key: Color::Magenta,
            equals_key: Color::Blue,
            pressed_bg: Color::Rgb(210, 210, 210),

            error: Color::Red,

            log_error: Color::Red,
            log_warn: Color::Rgb(184, 134, 11),
            log_info: Color::Blue,
            log_debug: Color::Gray,
        }
    }

    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),
            foreground: Color::Rgb(236, 239, 244),
            muted: Color::Rgb(129, 161, 193),
            border: Color::Rgb(76, 86, 106),
            border_type: BorderType::Rounded,
            highlight: Color::Rgb(136, 192, 208),

            digit_key: Color::Rgb(229, 233, 240),
            operator_key: Color::Rgb(235, 203, 139),
            action_key: Color::Rgb(180, 142, 173),
            equals_key: Color::Rgb(143, 188, 187),
            pressed_bg: Color::Rgb(67, 76, 94),

            error: Color::Rgb(191, 97, 106),

            log_error: Color::Rgb(191, 97, 106),
            log_warn: Color::Rgb(235, 203, 139),
            log_info: Color::Rgb(129, 161, 193),
            log_debug: Color::Rgb(76, 86, 106),
        }
    }

    pub fn gruvbox() -> Self {
        Self {
            background: Color::Rgb(40, 40, 40),
            foreground: Color::Rgb(235, 219, 178),
            muted: Color::Rgb(168, 153, 132),
            border: Color::Rgb(102, 92, 84),
            border_type: BorderType::Plain,
            highlight: Color::Rgb(131, 165, 152),

            digit_key: Color::Rgb(235, 219, 178),
            operator_key: Color::Rgb(250, 189, 47),
            action_key: Color::Rgb(211, 134, 155),
            equals_key: Color::Rgb(184, 187, 38),
            pressed_bg: Color::Rgb(80, 73, 69),

            error: Color::Rgb(251, 73, 52),

            log_error: Color::Rgb(251, 73, 52),
            log_warn: Color::Rgb(250, 189, 47),
            log_info: Color::Rgb(131, 165, 152),
            log_debug: Color::Rgb(146, 131, 116),
        }
    }

    pub fn monokai() -> Self {
        Self {
            background: Color::Rgb(39, 40, 34),
            foreground: Color::Rgb(248, 248, 242),
            muted: Color::Rgb(117, 113, 94),
            border: Color::Rgb(73, 72, 62),
            border_type: BorderType::Double,
            highlight: Color::Rgb(102, 217, 239),

            digit_key: Color::Rgb(248, 248, 242),
            operator_key: Color::Rgb(253, 151, 31),
            action_key: Color::Rgb(174, 129, 255),
            equals_key: Color::Rgb(166, 226, 46),
            pressed_bg: Color::Rgb(73, 72, 62),

            error: Color::Rgb(249, 38, 114),

            log_error: Color::Rgb(249, 38, 114),
            log_warn: Color::Rgb(230, 219, 116),
            log_info: Color::Rgb(102, 217, 239),
            log_debug: Color::Rgb(117, 113, 94),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in ThemeKind::all() {
            assert_eq!(ThemeKind::from_name(kind.name()), Some(*kind));
        }
        assert_eq!(ThemeKind::from_name(" nord "), Some(ThemeKind::Nord));
        assert_eq!(ThemeKind::from_name("Solarized"), None);
    }

    #[test]
    fn next_cycles_through_all() {
        let mut kind = ThemeKind::default();
        for _ in 0..ThemeKind::all().len() {
            kind = kind.next();
        }
        assert_eq!(kind, ThemeKind::default());
    }
}
