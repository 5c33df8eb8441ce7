//! Money display formatting.
//!
//! Amounts are whole currency units (MXN, no cents at this counter), shown
//! with a thousands separator.

/// Format an amount as "$1,250" (or "-$1,250").
pub fn format_money(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();

    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if negative {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_money(0), "$0");
        assert_eq!(format_money(150), "$150");
        assert_eq!(format_money(1250), "$1,250");
        assert_eq!(format_money(1234567), "$1,234,567");
    }

    #[test]
    fn negative_amounts_keep_the_sign_outside() {
        assert_eq!(format_money(-1250), "-$1,250");
    }
}
