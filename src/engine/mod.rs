//! Calculator engine - the state machine behind the display
//!
//! The engine consumes abstract [`Input`] events and exposes a [`Display`]
//! query. It performs no I/O and knows nothing about keys, buttons or
//! terminals; the shell maps those to inputs and draws the strings it gets
//! back.
//!
//! # States
//!
//! ```text
//!            digit / point / operator
//!   ┌──────────────────────────────────────────┐
//!   ▼                                          │
//! Entry ──── = ────▶ PostResult ──── digit ────┘
//!   │  ▲                 │
//!   │  └─── operator ────┘
//!   │
//!   └── ÷0 / overflow ──▶ Error ── any input but = ──▶ Entry
//! ```
//!
//! Chained operators reduce strictly left to right: `1 + 2 × 3 =` is `9`.

mod format;
mod number;

pub use format::DisplayFormat;

use serde::Serialize;

/// Text shown in place of the current operand while in error mode
pub const ERROR_SENTINEL: &str = "Error";

/// Default maximum number of typed digits per operand
pub const DEFAULT_MAX_DIGITS: usize = 12;

/// Default fractional digits kept after rounding a computed result
pub const DEFAULT_DECIMAL_PRECISION: u32 = 10;

// ─────────────────────────────────────────────────────────────────────────────
// Inputs
// ─────────────────────────────────────────────────────────────────────────────

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Glyph shown after the previous operand
    pub fn glyph(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Apply the operator, `None` on division by exactly zero
    fn apply(self, left: f64, right: f64) -> Option<f64> {
        match self {
            Operator::Add => Some(left + right),
            Operator::Subtract => Some(left - right),
            Operator::Multiply => Some(left * right),
            Operator::Divide if right == 0.0 => None,
            Operator::Divide => Some(left / right),
        }
    }
}

/// A single decimal digit, 0 through 9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Build from a character, `None` unless it is `'0'..='9'`
    pub fn new(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

/// Abstract input event forwarded by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    Delete,
    Percent,
}

// ─────────────────────────────────────────────────────────────────────────────
// Outputs
// ─────────────────────────────────────────────────────────────────────────────

/// Render-ready display lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Display {
    /// Previous operand and operator glyph, empty when nothing is pending
    pub previous: String,
    /// Current operand, or `Error`
    pub current: String,
}

/// Logical phase of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Composing the current operand
    Entry,
    /// Showing a computed result; the next digit starts a new operand
    PostResult,
    /// Division by zero or overflow; the next input clears
    Error,
}

/// Engine limits, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum typed digits per operand (point and sign not counted)
    pub max_digits: usize,
    /// Fractional digits kept when a computation completes
    pub decimal_precision: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_digits: DEFAULT_MAX_DIGITS,
            decimal_precision: DEFAULT_DECIMAL_PRECISION,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// State
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
struct Pending {
    left: String,
    op: Operator,
}

#[derive(Debug, Clone, PartialEq)]
enum State {
    /// `current` is empty only right after an operator was chosen
    Entry {
        current: String,
        pending: Option<Pending>,
    },
    PostResult {
        current: String,
    },
    Error,
}

impl State {
    fn cleared() -> Self {
        State::Entry {
            current: "0".to_string(),
            pending: None,
        }
    }
}

/// The calculator state machine
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    config: EngineConfig,
    state: State,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl CalculatorEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            state: State::cleared(),
        }
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    pub fn mode(&self) -> Mode {
        match self.state {
            State::Entry { .. } => Mode::Entry,
            State::PostResult { .. } => Mode::PostResult,
            State::Error => Mode::Error,
        }
    }

    /// Raw current operand (unformatted)
    pub fn current_operand(&self) -> &str {
        match &self.state {
            State::Entry { current, .. } | State::PostResult { current } => current,
            State::Error => ERROR_SENTINEL,
        }
    }

    /// Raw previous operand, empty when nothing is pending
    pub fn previous_operand(&self) -> &str {
        match &self.state {
            State::Entry {
                pending: Some(pending),
                ..
            } => &pending.left,
            _ => "",
        }
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        match &self.state {
            State::Entry {
                pending: Some(pending),
                ..
            } => Some(pending.op),
            _ => None,
        }
    }

    pub fn awaiting_fresh_entry(&self) -> bool {
        matches!(self.state, State::PostResult { .. })
    }

    /// Apply one input event and return the resulting display
    pub fn apply(&mut self, input: Input) -> Display {
        match input {
            Input::Digit(digit) => self.append_digit(digit),
            Input::Decimal => self.append_decimal_point(),
            Input::Operator(op) => self.choose_operator(op),
            Input::Equals => self.compute(),
            Input::Clear => self.clear(),
            Input::Delete => self.delete(),
            Input::Percent => self.percent(),
        }
        self.render()
    }

    pub fn clear(&mut self) {
        self.state = State::cleared();
    }

    /// Remove the last typed character; a single character becomes `0`
    pub fn delete(&mut self) {
        match &mut self.state {
            State::Error => self.clear(),
            State::Entry { current, .. } | State::PostResult { current } => {
                if current.chars().count() <= 1 {
                    *current = "0".to_string();
                    return;
                }
                current.pop();
                if current == "-" {
                    *current = "0".to_string();
                }
            }
        }
    }

    pub fn append_digit(&mut self, digit: Digit) {
        let max_digits = self.config.max_digits;
        let current = self.entry_operand();

        if current == "0" {
            current.clear();
            current.push(digit.as_char());
            return;
        }

        if number::digit_count(current) >= max_digits {
            tracing::trace!(max_digits, "digit limit reached, ignoring digit");
            return;
        }
        current.push(digit.as_char());
    }

    pub fn append_decimal_point(&mut self) {
        let max_digits = self.config.max_digits;
        let current = self.entry_operand();

        if current.contains('.') {
            return;
        }
        if current.is_empty() {
            current.push_str("0.");
            return;
        }
        if number::digit_count(current) >= max_digits {
            tracing::trace!(max_digits, "digit limit reached, ignoring decimal point");
            return;
        }
        current.push('.');
    }

    /// Select an operator, collapsing any pending operation first
    pub fn choose_operator(&mut self, op: Operator) {
        match &self.state {
            State::Error => {
                self.clear();
                return;
            }
            State::Entry { current, .. } if current.is_empty() => return,
            _ => {}
        }

        if self.pending_operator().is_some() {
            self.compute();
        }

        let left = match std::mem::replace(&mut self.state, State::Error) {
            State::Entry { current, .. } | State::PostResult { current } => current,
            // the chained computation failed; stay in error
            State::Error => return,
        };

        self.state = State::Entry {
            current: String::new(),
            pending: Some(Pending { left, op }),
        };
    }

    /// Apply the pending operator to both operands
    ///
    /// A no-op unless an operator is pending and both operands parse.
    pub fn compute(&mut self) {
        let State::Entry {
            current,
            pending: Some(pending),
        } = &self.state
        else {
            return;
        };

        let (Some(left), Some(right)) = (
            number::parse_operand(&pending.left),
            number::parse_operand(current),
        ) else {
            tracing::trace!(
                left = %pending.left,
                right = %current,
                "operands not parseable, ignoring compute"
            );
            return;
        };

        let op = pending.op;
        let result = match op.apply(left, right) {
            Some(value) if value.is_finite() => value,
            Some(_) => {
                tracing::debug!(left, right, op = op.glyph(), "result overflowed");
                self.state = State::Error;
                return;
            }
            None => {
                tracing::debug!(left, "division by zero");
                self.state = State::Error;
                return;
            }
        };

        let rounded = number::round_to_precision(result, self.config.decimal_precision);
        let current = number::canonical(rounded);
        tracing::debug!(left, right, op = op.glyph(), result = %current, "computed");

        self.state = State::PostResult { current };
    }

    /// Divide the current operand by 100 in place
    pub fn percent(&mut self) {
        match &mut self.state {
            State::Error => self.clear(),
            State::Entry { current, .. } | State::PostResult { current } => {
                if let Some(value) = number::parse_operand(current) {
                    *current = number::canonical(value / 100.0);
                }
            }
        }
    }

    /// Display lines using the default format
    pub fn render(&self) -> Display {
        self.render_with(&DisplayFormat::default())
    }

    pub fn render_with(&self, format: &DisplayFormat) -> Display {
        match &self.state {
            State::Error => Display {
                previous: String::new(),
                current: ERROR_SENTINEL.to_string(),
            },
            State::PostResult { current } => Display {
                previous: String::new(),
                current: format.format_operand(current),
            },
            State::Entry { current, pending } => Display {
                previous: pending
                    .as_ref()
                    .map(|p| format!("{} {}", format.format_operand(&p.left), p.op.glyph()))
                    .unwrap_or_default(),
                current: format.format_operand(current),
            },
        }
    }

    /// Operand being typed, leaving error and post-result modes first
    fn entry_operand(&mut self) -> &mut String {
        if !matches!(self.state, State::Entry { .. }) {
            self.state = State::cleared();
        }
        match &mut self.state {
            State::Entry { current, .. } => current,
            _ => unreachable!("non-entry state replaced above"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feed a key string into the engine: digits, `.`, `+ - * /`, `=`, `%`,
    /// `C` (clear), `<` (delete)
    fn press(engine: &mut CalculatorEngine, keys: &str) -> Display {
        for c in keys.chars() {
            let input = match c {
                '.' => Input::Decimal,
                '+' => Input::Operator(Operator::Add),
                '-' => Input::Operator(Operator::Subtract),
                '*' => Input::Operator(Operator::Multiply),
                '/' => Input::Operator(Operator::Divide),
                '=' => Input::Equals,
                '%' => Input::Percent,
                'C' => Input::Clear,
                '<' => Input::Delete,
                d => Input::Digit(Digit::new(d).expect("test key")),
            };
            engine.apply(input);
        }
        engine.render()
    }

    fn run(keys: &str) -> Display {
        press(&mut CalculatorEngine::default(), keys)
    }

    fn display(previous: &str, current: &str) -> Display {
        Display {
            previous: previous.to_string(),
            current: current.to_string(),
        }
    }

    #[test]
    fn starts_cleared() {
        let engine = CalculatorEngine::default();
        assert_eq!(engine.render(), display("", "0"));
        assert_eq!(engine.mode(), Mode::Entry);
        assert_eq!(engine.pending_operator(), None);
        assert!(!engine.awaiting_fresh_entry());
    }

    #[test]
    fn typed_digits_round_trip() {
        let display = run("123456789012");
        assert_eq!(display.current, "123,456,789,012");
        assert_eq!(display.current.replace(',', ""), "123456789012");
    }

    #[test]
    fn leading_zeros_do_not_accumulate() {
        assert_eq!(run("0007").current, "7");
        assert_eq!(run("000").current, "0");
    }

    #[test]
    fn digits_beyond_limit_are_ignored() {
        let mut engine = CalculatorEngine::default();
        press(&mut engine, "123456789012");
        let before = engine.clone();
        press(&mut engine, "3");
        assert_eq!(engine.current_operand(), before.current_operand());
        assert_eq!(engine.mode(), before.mode());
    }

    #[test]
    fn limit_follows_config() {
        let mut engine = CalculatorEngine::new(EngineConfig {
            max_digits: 3,
            ..EngineConfig::default()
        });
        assert_eq!(press(&mut engine, "12345").current, "123");
    }

    #[test]
    fn decimal_point_not_counted_toward_limit() {
        let mut engine = CalculatorEngine::default();
        press(&mut engine, "12345678901.1");
        assert_eq!(engine.current_operand(), "12345678901.1");
        press(&mut engine, "9");
        assert_eq!(engine.current_operand(), "12345678901.1");
    }

    #[test]
    fn decimal_point_ignored_at_digit_limit() {
        let mut engine = CalculatorEngine::default();
        press(&mut engine, "123456789012.");
        assert_eq!(engine.current_operand(), "123456789012");
    }

    #[test]
    fn second_decimal_point_is_ignored() {
        let mut engine = CalculatorEngine::default();
        press(&mut engine, ".");
        assert_eq!(engine.current_operand(), "0.");
        press(&mut engine, "..5.");
        assert_eq!(engine.current_operand(), "0.5");
    }

    #[test]
    fn decimal_point_after_operator_gets_leading_zero() {
        let mut engine = CalculatorEngine::default();
        press(&mut engine, "5+.");
        assert_eq!(engine.current_operand(), "0.");
        assert_eq!(press(&mut engine, "5=").current, "5.5");
    }

    #[test]
    fn delete_on_zero_stays_zero() {
        let mut engine = CalculatorEngine::default();
        engine.delete();
        assert_eq!(engine.current_operand(), "0");
    }

    #[test]
    fn repeated_delete_settles_at_zero() {
        let mut engine = CalculatorEngine::default();
        press(&mut engine, "12.5");
        let seen: Vec<String> = (0..6)
            .map(|_| {
                engine.delete();
                engine.current_operand().to_string()
            })
            .collect();
        assert_eq!(seen, ["12.", "12", "1", "0", "0", "0"]);
    }

    #[test]
    fn delete_never_leaves_a_bare_sign() {
        let mut engine = CalculatorEngine::default();
        press(&mut engine, "2-7=");
        assert_eq!(engine.current_operand(), "-5");
        engine.delete();
        assert_eq!(engine.current_operand(), "0");
    }

    #[test]
    fn simple_addition() {
        assert_eq!(run("7+3="), display("", "10"));
    }

    #[test]
    fn subtraction_is_previous_minus_current() {
        assert_eq!(run("3-10=").current, "-7");
    }

    #[test]
    fn pending_operator_is_rendered() {
        assert_eq!(run("1234*"), display("1,234 ×", ""));
        assert_eq!(run("9/"), display("9 ÷", ""));
        assert_eq!(run("9/4"), display("9 ÷", "4"));
    }

    #[test]
    fn chained_operators_reduce_left_to_right() {
        assert_eq!(run("1+2+3=").current, "6");
        assert_eq!(run("1+2*3=").current, "9");
    }

    #[test]
    fn chained_operator_shows_intermediate_result() {
        assert_eq!(run("1+2*"), display("3 ×", ""));
    }

    #[test]
    fn repeated_operator_keeps_left_operand() {
        assert_eq!(run("5+*"), display("5 +", ""));
    }

    #[test]
    fn equals_without_pending_operator_is_noop() {
        let mut engine = CalculatorEngine::default();
        press(&mut engine, "42=");
        assert_eq!(engine.current_operand(), "42");
        assert_eq!(engine.mode(), Mode::Entry);
    }

    #[test]
    fn equals_without_right_operand_is_noop() {
        assert_eq!(run("42+="), display("42 +", ""));
    }

    #[test]
    fn division_by_zero_enters_error() {
        let mut engine = CalculatorEngine::default();
        let display = press(&mut engine, "10/0=");
        assert_eq!(display.current, "Error");
        assert_eq!(display.previous, "");
        assert_eq!(engine.mode(), Mode::Error);
        assert_eq!(engine.pending_operator(), None);
        assert_eq!(engine.previous_operand(), "");
    }

    #[test]
    fn division_by_typed_zero_fraction_is_error() {
        assert_eq!(run("1/0.000=").current, "Error");
    }

    #[test]
    fn clear_after_error_restores_initial_state() {
        assert_eq!(run("10/0=C"), display("", "0"));
    }

    #[test]
    fn inputs_recover_from_error() {
        assert_eq!(run("1/0=7"), display("", "7"));
        assert_eq!(run("1/0=."), display("", "0."));
        assert_eq!(run("1/0=+"), display("", "0"));
        assert_eq!(run("1/0=<"), display("", "0"));
        assert_eq!(run("1/0=%"), display("", "0"));
    }

    #[test]
    fn equals_in_error_stays_in_error() {
        let mut engine = CalculatorEngine::default();
        press(&mut engine, "1/0==");
        assert_eq!(engine.mode(), Mode::Error);
    }

    #[test]
    fn chained_division_by_zero_stays_clean() {
        let mut engine = CalculatorEngine::default();
        press(&mut engine, "8/0+");
        assert_eq!(engine.mode(), Mode::Error);
        assert_eq!(engine.pending_operator(), None);
        assert_eq!(engine.render(), display("", "Error"));
    }

    #[test]
    fn overflow_enters_error() {
        let mut engine = CalculatorEngine::default();
        press(&mut engine, "999999999999");
        for _ in 0..40 {
            press(&mut engine, "*999999999999=");
            if engine.mode() == Mode::Error {
                break;
            }
        }
        assert_eq!(engine.mode(), Mode::Error);
        assert_eq!(engine.render().current, "Error");
    }

    #[test]
    fn percent_divides_by_hundred() {
        assert_eq!(run("50%").current, "0.5");
        assert_eq!(run("5%").current, "0.05");
    }

    #[test]
    fn percent_keeps_pending_operation() {
        let mut engine = CalculatorEngine::default();
        assert_eq!(press(&mut engine, "200+10%"), display("200 +", "0.1"));
        assert_eq!(press(&mut engine, "=").current, "200.1");
    }

    #[test]
    fn percent_without_operand_is_noop() {
        assert_eq!(run("7+%"), display("7 +", ""));
    }

    #[test]
    fn result_is_rounded_to_precision() {
        let mut engine = CalculatorEngine::default();
        press(&mut engine, "1/3=");
        let (_, fraction) = engine.current_operand().split_once('.').expect("fraction");
        assert_eq!(fraction.len(), 10);
        assert_eq!(engine.current_operand(), "0.3333333333");

        assert_eq!(run("2/3=").current, "0.6666666667");
        assert_eq!(run(".1+.2=").current, "0.3");
    }

    #[test]
    fn precision_follows_config() {
        let mut engine = CalculatorEngine::new(EngineConfig {
            decimal_precision: 4,
            ..EngineConfig::default()
        });
        assert_eq!(press(&mut engine, "10/3=").current, "3.3333");
    }

    #[test]
    fn digit_after_result_starts_fresh() {
        let mut engine = CalculatorEngine::default();
        press(&mut engine, "2+3=");
        assert!(engine.awaiting_fresh_entry());
        assert_eq!(press(&mut engine, "4").current, "4");
        assert!(!engine.awaiting_fresh_entry());
    }

    #[test]
    fn decimal_after_result_starts_fresh() {
        assert_eq!(run("2+3=.").current, "0.");
    }

    #[test]
    fn operator_after_result_continues_from_it() {
        assert_eq!(run("2+3=*4="), display("", "20"));
    }

    #[test]
    fn percent_after_result_keeps_fresh_entry() {
        let mut engine = CalculatorEngine::default();
        press(&mut engine, "2+3=%");
        assert_eq!(engine.current_operand(), "0.05");
        assert!(engine.awaiting_fresh_entry());
        assert_eq!(press(&mut engine, "7").current, "7");
    }

    #[test]
    fn delete_after_result_edits_result() {
        let mut engine = CalculatorEngine::default();
        press(&mut engine, "100+23=<");
        assert_eq!(engine.current_operand(), "12");
        assert_eq!(engine.mode(), Mode::PostResult);
    }

    #[test]
    fn delete_of_empty_right_operand_gives_zero() {
        assert_eq!(run("5+<"), display("5 +", "0"));
        assert_eq!(run("5+<=").current, "5");
    }

    #[test]
    fn large_results_are_grouped() {
        assert_eq!(run("999999*999999=").current, "999,998,000,001");
    }

    #[test]
    fn custom_format_applies_to_both_lines() {
        let mut engine = CalculatorEngine::default();
        press(&mut engine, "1234567+");
        let format = DisplayFormat {
            group_separator: Some(' '),
        };
        assert_eq!(engine.render_with(&format), display("1 234 567 +", ""));
    }

    #[test]
    fn digit_rejects_non_digits() {
        assert_eq!(Digit::new('7').map(Digit::as_char), Some('7'));
        assert!(Digit::new('a').is_none());
        assert!(Digit::new('.').is_none());
    }
}
