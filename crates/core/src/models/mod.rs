//! Typed shopping list entities.
//!
//! These are the typed views of the backup records. Converting a record
//! follows the same policy as settings: a field that is empty or malformed
//! takes its default instead of failing the conversion.

pub mod autocomplete;
pub mod product;
pub mod shopping;

pub use autocomplete::Autocomplete;
pub use product::Product;
pub use shopping::Shopping;

use rust_decimal::Decimal;

use crate::prefs::PrefValue;
use crate::types::{Currency, Money};

/// Parse a stored field, or take `default`.
fn field_or<T: PrefValue>(raw: &str, default: T) -> T {
    if raw.trim().is_empty() {
        return default;
    }
    T::decode(raw).unwrap_or(default)
}

/// Parse a stored money field.
fn money_field(raw: &str, as_percent: &str, currency: &Currency) -> Money {
    let value = field_or(raw, Decimal::ZERO);
    if field_or(as_percent, false) {
        Money::percent(value, currency.clone())
    } else {
        Money::new(value, currency.clone())
    }
}
