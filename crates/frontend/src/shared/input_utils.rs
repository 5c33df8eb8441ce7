//! Parsing helpers for the numeric text inputs (quantity, discount, payment).

/// Parse a free-form numeric input, falling back when it is blank or not a
/// number. Decimals are truncated toward zero.
pub fn parse_int_safe(raw: &str, fallback: i64) -> i64 {
    let s = raw.trim();
    if s.is_empty() {
        return fallback;
    }
    if let Ok(n) = s.parse::<i64>() {
        return n;
    }
    match s.parse::<f64>() {
        Ok(f) if f.is_finite() => f.trunc() as i64,
        _ => fallback,
    }
}

/// Parse a quantity input into the 1..=u32::MAX range. Values past
/// `u32::MAX` saturate instead of wrapping.
pub fn parse_quantity(raw: &str, fallback: u32) -> u32 {
    parse_int_safe(raw, i64::from(fallback)).clamp(1, i64::from(u32::MAX)) as u32
}

/// Strip everything but ASCII digits (keeps scanner input and pasted text
/// usable in quantity fields).
pub fn only_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_uses_fallback() {
        assert_eq!(parse_int_safe("", 3), 3);
        assert_eq!(parse_int_safe("   ", 7), 7);
    }

    #[test]
    fn garbage_input_uses_fallback() {
        assert_eq!(parse_int_safe("abc", 1), 1);
        assert_eq!(parse_int_safe("12x", 1), 1);
    }

    #[test]
    fn integers_parse_and_decimals_truncate() {
        assert_eq!(parse_int_safe("42", 0), 42);
        assert_eq!(parse_int_safe(" 15 ", 0), 15);
        assert_eq!(parse_int_safe("9.9", 0), 9);
        assert_eq!(parse_int_safe("-3.7", 0), -3);
    }

    #[test]
    fn quantity_stays_in_range() {
        assert_eq!(parse_quantity("5", 1), 5);
        assert_eq!(parse_quantity("0", 1), 1);
        assert_eq!(parse_quantity("-2", 1), 1);
        assert_eq!(parse_quantity("abc", 4), 4);
        assert_eq!(parse_quantity("", 2), 2);
    }

    #[test]
    fn oversized_quantity_saturates() {
        assert_eq!(parse_quantity("999999999999", 1), u32::MAX);
        assert_eq!(parse_quantity(&u64::MAX.to_string(), 1), u32::MAX);
    }

    #[test]
    fn only_digits_strips_everything_else() {
        assert_eq!(only_digits("12a3-4 "), "1234");
        assert_eq!(only_digits("$1,250"), "1250");
        assert_eq!(only_digits(""), "");
    }
}
