//! Product quantity with a unit symbol.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::decimal;

/// Fraction digits used when no preference is available.
pub const DEFAULT_FRACTION_DIGITS: u32 = 3;

/// An amount of something, e.g. `1.5 kg` or `3` (no unit).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Quantity {
    /// Decimal amount.
    pub value: Decimal,
    /// Unit symbol, empty when unitless.
    pub symbol: String,
}

impl Quantity {
    #[must_use]
    pub fn new(value: Decimal, symbol: impl Into<String>) -> Self {
        Self {
            value,
            symbol: symbol.into(),
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Format without trailing zeros (e.g., "1.5 kg").
    #[must_use]
    pub fn format(&self, fraction_digits: u32) -> String {
        let amount = decimal::format_trimmed(self.value, fraction_digits);
        if self.symbol.is_empty() {
            amount
        } else {
            format!("{amount} {}", self.symbol)
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DEFAULT_FRACTION_DIGITS))
    }
}
