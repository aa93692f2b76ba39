// Keymap - translate physical keys into calculator inputs
//
// Shared by the TUI (crossterm key events) and the headless/eval paths
// (plain characters). Bindings:
//   0-9 digits, . decimal, + - * x / operators, Enter or = equals,
//   Esc or c clear, Backspace or < delete, % percent

use crate::engine::{Digit, Input, Operator};
use anyhow::{bail, Result};
use crossterm::event::{KeyCode, KeyModifiers};

/// Map a single typed character to an input
pub fn input_for_char(c: char) -> Option<Input> {
    let input = match c {
        '0'..='9' => Input::Digit(Digit::new(c)?),
        '.' => Input::Decimal,
        '+' => Input::Operator(Operator::Add),
        '-' => Input::Operator(Operator::Subtract),
        '*' | 'x' => Input::Operator(Operator::Multiply),
        '/' => Input::Operator(Operator::Divide),
        '=' => Input::Equals,
        '%' => Input::Percent,
        'c' | 'C' => Input::Clear,
        '<' => Input::Delete,
        _ => return None,
    };
    Some(input)
}

/// Map a terminal key event to an input
///
/// Control/Alt chords never map, so `Ctrl+C` stays available for quitting.
pub fn input_for_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Input> {
    if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    match code {
        KeyCode::Char(c) => input_for_char(c),
        KeyCode::Enter => Some(Input::Equals),
        KeyCode::Esc => Some(Input::Clear),
        KeyCode::Backspace => Some(Input::Delete),
        _ => None,
    }
}

/// Parse a key string (as typed on the command line) into inputs
///
/// Whitespace is skipped; any other unmapped character is an error.
pub fn parse_keys(keys: &str) -> Result<Vec<Input>> {
    let mut inputs = Vec::with_capacity(keys.len());
    for (pos, c) in keys.chars().enumerate() {
        if c.is_whitespace() {
            continue;
        }
        match input_for_char(c) {
            Some(input) => inputs.push(input),
            None => bail!("unmapped key {:?} at position {}", c, pos),
        }
    }
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_digit_inputs() {
        for c in '0'..='9' {
            assert_eq!(
                input_for_char(c),
                Some(Input::Digit(Digit::new(c).unwrap()))
            );
        }
    }

    #[test]
    fn both_multiply_keys_map() {
        let mul = Some(Input::Operator(Operator::Multiply));
        assert_eq!(input_for_char('*'), mul);
        assert_eq!(input_for_char('x'), mul);
    }

    #[test]
    fn action_keys_map() {
        let none = KeyModifiers::NONE;
        assert_eq!(input_for_key(KeyCode::Enter, none), Some(Input::Equals));
        assert_eq!(input_for_key(KeyCode::Char('='), none), Some(Input::Equals));
        assert_eq!(input_for_key(KeyCode::Esc, none), Some(Input::Clear));
        assert_eq!(input_for_key(KeyCode::Backspace, none), Some(Input::Delete));
        assert_eq!(input_for_key(KeyCode::Char('%'), none), Some(Input::Percent));
    }

    #[test]
    fn clear_and_delete_have_character_keys() {
        assert_eq!(input_for_char('c'), Some(Input::Clear));
        assert_eq!(input_for_char('C'), Some(Input::Clear));
        assert_eq!(input_for_char('<'), Some(Input::Delete));
        assert_eq!(
            parse_keys("12<C").unwrap()[2..],
            [Input::Delete, Input::Clear]
        );
    }

    #[test]
    fn shifted_symbols_still_map() {
        assert_eq!(
            input_for_key(KeyCode::Char('+'), KeyModifiers::SHIFT),
            Some(Input::Operator(Operator::Add))
        );
    }

    #[test]
    fn control_chords_do_not_map() {
        assert_eq!(input_for_key(KeyCode::Char('c'), KeyModifiers::CONTROL), None);
        assert_eq!(input_for_key(KeyCode::Char('1'), KeyModifiers::ALT), None);
    }

    #[test]
    fn unbound_keys_do_not_map() {
        assert_eq!(input_for_char('q'), None);
        assert_eq!(input_for_key(KeyCode::Tab, KeyModifiers::NONE), None);
    }

    #[test]
    fn parse_keys_skips_whitespace() {
        let inputs = parse_keys("7 + 3 =").unwrap();
        assert_eq!(inputs.len(), 4);
        assert_eq!(inputs[1], Input::Operator(Operator::Add));
        assert_eq!(inputs[3], Input::Equals);
    }

    #[test]
    fn parse_keys_rejects_unknown() {
        let err = parse_keys("7+q").unwrap_err();
        assert!(err.to_string().contains("'q'"));
    }
}
