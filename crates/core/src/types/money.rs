//! Type-safe money representation using decimal arithmetic.
//!
//! A [`Money`] value is either an amount in some [`Currency`] or, when
//! `as_percent` is set, a percentage (used for discounts and tax rates).
//!
//! Amounts come from untrusted records, so arithmetic saturates at the
//! [`Decimal`] bounds instead of overflowing.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::decimal;

/// Fraction digits used when no preference is available.
pub const DEFAULT_FRACTION_DIGITS: u32 = 2;

/// Currency display information.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency {
    /// Symbol shown next to the amount (may be empty).
    pub symbol: String,
    /// Whether the symbol precedes the amount.
    pub display_to_left: bool,
}

impl Currency {
    /// Create a currency.
    #[must_use]
    pub fn new(symbol: impl Into<String>, display_to_left: bool) -> Self {
        Self {
            symbol: symbol.into(),
            display_to_left,
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::new("$", true)
    }
}

/// A money amount or percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    value: Decimal,
    currency: Currency,
    as_percent: bool,
}

impl Money {
    /// Create a money amount.
    #[must_use]
    pub const fn new(value: Decimal, currency: Currency) -> Self {
        Self {
            value,
            currency,
            as_percent: false,
        }
    }

    /// Create a percentage.
    #[must_use]
    pub const fn percent(value: Decimal, currency: Currency) -> Self {
        Self {
            value,
            currency,
            as_percent: true,
        }
    }

    /// Zero in the given currency.
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.value
    }

    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    #[must_use]
    pub const fn is_percent(&self) -> bool {
        self.as_percent
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Sum of two amounts, keeping this value's currency.
    #[must_use]
    pub fn plus(&self, other: &Self) -> Self {
        Self::new(self.value.saturating_add(other.value), self.currency.clone())
    }

    /// Difference of two amounts, keeping this value's currency.
    #[must_use]
    pub fn minus(&self, other: &Self) -> Self {
        Self::new(self.value.saturating_sub(other.value), self.currency.clone())
    }

    /// Amount multiplied by a quantity.
    #[must_use]
    pub fn times(&self, quantity: Decimal) -> Self {
        Self::new(self.value.saturating_mul(quantity), self.currency.clone())
    }

    /// Resolve this value against `base`.
    ///
    /// A percentage yields `base * value / 100`; an absolute amount is
    /// returned unchanged. A product too large to represent is scaled down
    /// first and then saturates.
    #[must_use]
    pub fn applied_to(&self, base: &Self) -> Self {
        if self.as_percent {
            let value = base
                .value
                .checked_mul(self.value)
                .map_or_else(
                    || base.value.saturating_mul(self.value / Decimal::ONE_HUNDRED),
                    |product| product / Decimal::ONE_HUNDRED,
                );
            Self::new(value, base.currency.clone())
        } else {
            Self::new(self.value, base.currency.clone())
        }
    }

    /// Round half-up to `fraction_digits` places.
    #[must_use]
    pub fn rounded(&self, fraction_digits: u32) -> Self {
        Self {
            value: decimal::round(self.value, fraction_digits),
            currency: self.currency.clone(),
            as_percent: self.as_percent,
        }
    }

    /// Format for display (e.g., "$19.99", "19.99 ₽", "10 %").
    #[must_use]
    pub fn format(&self, fraction_digits: u32) -> String {
        if self.as_percent {
            return format!("{} %", decimal::format_trimmed(self.value, fraction_digits));
        }

        let amount = decimal::format_fixed(self.value, fraction_digits);
        if self.currency.symbol.is_empty() {
            amount
        } else if self.currency.display_to_left {
            format!("{}{amount}", self.currency.symbol)
        } else {
            format!("{amount} {}", self.currency.symbol)
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DEFAULT_FRACTION_DIGITS))
    }
}
