//! Display formatting for operand strings
//!
//! Formatting never touches engine state: it takes the stored operand and
//! produces the text the shell draws.

use super::ERROR_SENTINEL;

/// How operands are rendered for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFormat {
    /// Thousands separator for the integer part (`None` = no grouping)
    pub group_separator: Option<char>,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            group_separator: Some(','),
        }
    }
}

impl DisplayFormat {
    /// Format an operand: group the integer part, keep the fraction as typed
    ///
    /// The sentinel `Error` and the empty operand pass through unchanged.
    pub fn format_operand(&self, operand: &str) -> String {
        if operand.is_empty() || operand == ERROR_SENTINEL {
            return operand.to_string();
        }

        let (sign, unsigned) = match operand.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", operand),
        };

        let (integer, fraction) = match unsigned.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (unsigned, None),
        };

        let mut out = String::with_capacity(operand.len() + operand.len() / 3);
        out.push_str(sign);
        match self.group_separator {
            Some(sep) => out.push_str(&group_digits(integer, sep)),
            None => out.push_str(integer),
        }
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }

    /// Strip grouping separators back out of a formatted operand
    pub fn strip_grouping(&self, formatted: &str) -> String {
        match self.group_separator {
            Some(sep) => formatted.chars().filter(|&c| c != sep).collect(),
            None => formatted.to_string(),
        }
    }
}

/// Insert `sep` between every group of three digits, counting from the right
fn group_digits(digits: &str, sep: char) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}
