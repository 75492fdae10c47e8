//! Decimal parsing and formatting helpers.
//!
//! Records and preference stores keep numbers as strings. These helpers are
//! the single place that turns those strings into [`Decimal`] and back.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Parse a user- or store-provided decimal string.
///
/// Accepts either `.` or `,` as the decimal separator and ignores
/// surrounding whitespace. Returns `None` for empty or malformed input.
#[must_use]
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(&trimmed.replace(',', ".")).ok()
}

/// Round half-up to `fraction_digits` places.
#[must_use]
pub fn round(value: Decimal, fraction_digits: u32) -> Decimal {
    value.round_dp_with_strategy(fraction_digits, RoundingStrategy::MidpointAwayFromZero)
}

/// Format with exactly `fraction_digits` places.
#[must_use]
pub fn format_fixed(value: Decimal, fraction_digits: u32) -> String {
    let mut rounded = round(value, fraction_digits);
    rounded.rescale(fraction_digits);
    rounded.to_string()
}

/// Format with at most `fraction_digits` places and no trailing zeros.
#[must_use]
pub fn format_trimmed(value: Decimal, fraction_digits: u32) -> String {
    round(value, fraction_digits).normalize().to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_separators() {
        assert_eq!(parse_decimal("12.5"), Some(Decimal::new(125, 1)));
        assert_eq!(parse_decimal(" 12,5 "), Some(Decimal::new(125, 1)));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("twelve"), None);
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(Decimal::new(125, 1), 2), "12.50");
        assert_eq!(format_fixed(Decimal::new(12345, 3), 2), "12.35");
        assert_eq!(format_fixed(Decimal::new(7, 0), 0), "7");
    }

    #[test]
    fn test_format_trimmed() {
        assert_eq!(format_trimmed(Decimal::new(1500, 3), 3), "1.5");
        assert_eq!(format_trimmed(Decimal::new(2000, 3), 3), "2");
    }
}
