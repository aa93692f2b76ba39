//! Numeric helpers: operand parsing, result rounding, canonical string form

/// Parse an operand string as a finite decimal number
///
/// Accepts partially typed literals such as `"5."` and `"0.25"`.
/// Returns `None` for the empty string, the error sentinel, a lone sign,
/// and anything that would parse to a non-finite value (`"inf"`, `"NaN"`).
pub fn parse_operand(operand: &str) -> Option<f64> {
    if operand.is_empty() {
        return None;
    }
    operand.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Round half away from zero to `precision` fractional digits
///
/// Values too large to scale are returned unchanged: at that magnitude an
/// `f64` has no fractional part left to round.
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Minimal decimal representation without exponent or trailing zeros
///
/// Negative zero collapses to `"0"`.
pub fn canonical(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Number of decimal digits in an operand (sign and point excluded)
pub fn digit_count(operand: &str) -> usize {
    operand.chars().filter(char::is_ascii_digit).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_partial_literals() {
        assert_eq!(parse_operand("5."), Some(5.0));
        assert_eq!(parse_operand("0.25"), Some(0.25));
        assert_eq!(parse_operand("-12"), Some(-12.0));
    }

    #[test]
    fn parse_rejects_non_numbers() {
        assert_eq!(parse_operand(""), None);
        assert_eq!(parse_operand("Error"), None);
        assert_eq!(parse_operand("-"), None);
        assert_eq!(parse_operand("."), None);
        assert_eq!(parse_operand("inf"), None);
        assert_eq!(parse_operand("NaN"), None);
    }

    #[test]
    fn rounding_suppresses_float_noise() {
        assert_eq!(canonical(round_to_precision(0.1 + 0.2, 10)), "0.3");
        assert_eq!(canonical(round_to_precision(1.0 / 3.0, 10)), "0.3333333333");
        assert_eq!(canonical(round_to_precision(2.0 / 3.0, 10)), "0.6666666667");
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round_to_precision(2.5, 0), 3.0);
        assert_eq!(round_to_precision(-2.5, 0), -3.0);
        assert_eq!(round_to_precision(0.125, 2), 0.13);
    }

    #[test]
    fn rounding_leaves_huge_values_alone() {
        let huge = 1e305;
        assert_eq!(round_to_precision(huge, 10), huge);
    }

    #[test]
    fn canonical_has_no_exponent_or_trailing_zeros() {
        assert_eq!(canonical(10.0), "10");
        assert_eq!(canonical(0.5), "0.5");
        assert_eq!(canonical(1e21), "1000000000000000000000");
        assert_eq!(canonical(1e-7), "0.0000001");
        assert_eq!(canonical(-0.0), "0");
    }

    #[test]
    fn digit_count_ignores_point_and_sign() {
        assert_eq!(digit_count("-12.5"), 3);
        assert_eq!(digit_count("0."), 1);
        assert_eq!(digit_count(""), 0);
    }
}
