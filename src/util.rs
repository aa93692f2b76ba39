//! Shared utility functions

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Fit `s` into `max_width` display columns by dropping characters from the start.
///
/// Numbers are read from the right, so the least significant digits stay
/// visible and the cut is marked with a leading `…`. Widths are measured in
/// terminal columns, not bytes.
pub fn elide_start(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // Leave one column for the ellipsis
    let target_width = max_width - 1;
    let mut current_width = 0;
    let mut keep_from = s.len();
    for (i, c) in s.char_indices().rev() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > target_width {
            break;
        }
        current_width += char_width;
        keep_from = i;
    }

    format!("…{}", &s[keep_from..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elide_fits_unchanged() {
        assert_eq!(elide_start("1,234", 5), "1,234");
        assert_eq!(elide_start("", 3), "");
    }

    #[test]
    fn test_elide_keeps_rightmost_digits() {
        assert_eq!(elide_start("123,456,789", 6), "…6,789");
        assert_eq!(elide_start("123,456,789", 6).width(), 6);
    }

    #[test]
    fn test_elide_wide_characters() {
        // Each CJK character is two columns wide
        let elided = elide_start("日本語", 4);
        assert_eq!(elided, "…語");
        assert!(elided.width() <= 4);
    }

    #[test]
    fn test_elide_to_zero_and_one() {
        assert_eq!(elide_start("12345", 0), "");
        assert_eq!(elide_start("12345", 1), "…");
    }
}
