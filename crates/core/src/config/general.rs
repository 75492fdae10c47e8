//! General appearance and money settings.
//!
//! This is also the domain carried in backups as the preferences record.

use rust_decimal::Decimal;

use super::ConfigDomain;
use crate::prefs::{Preferences, PreferencesEdit};
use crate::types::datetime::{self, DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT};
use crate::types::{Currency, FontSize, Money, NightTheme, money, quantity};

/// Preference keys of the `general` store.
pub mod keys {
    use rust_decimal::Decimal;

    use crate::prefs::PrefKey;
    use crate::types::{FontSize, NightTheme};

    pub const NIGHT_THEME: PrefKey<NightTheme> = PrefKey::new("night_theme");
    pub const FONT_SIZE: PrefKey<FontSize> = PrefKey::new("font_size");
    pub const DATE_FORMAT: PrefKey<String> = PrefKey::new("date_format");
    pub const TIME_FORMAT: PrefKey<String> = PrefKey::new("time_format");
    pub const CURRENCY: PrefKey<String> = PrefKey::new("currency");
    pub const DISPLAY_CURRENCY_TO_LEFT: PrefKey<bool> = PrefKey::new("display_currency_to_left");
    pub const MONEY_FRACTION_DIGITS: PrefKey<u32> = PrefKey::new("money_fraction_digits");
    pub const QUANTITY_FRACTION_DIGITS: PrefKey<u32> = PrefKey::new("quantity_fraction_digits");
    pub const TAX_RATE: PrefKey<Decimal> = PrefKey::new("tax_rate");
    pub const TAX_RATE_AS_PERCENT: PrefKey<bool> = PrefKey::new("tax_rate_as_percent");
    pub const DISPLAY_MONEY: PrefKey<bool> = PrefKey::new("display_money");
    pub const DISPLAY_EMPTY_FIELDS: PrefKey<bool> = PrefKey::new("display_empty_fields");
}

/// General appearance and money settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneralConfig {
    pub night_theme: NightTheme,
    pub font_size: FontSize,
    /// chrono `strftime` pattern for dates.
    pub date_format: String,
    /// chrono `strftime` pattern for times.
    pub time_format: String,
    /// Currency symbol.
    pub currency: String,
    pub display_currency_to_left: bool,
    pub money_fraction_digits: u32,
    pub quantity_fraction_digits: u32,
    /// Default tax applied to new products.
    pub tax_rate: Decimal,
    pub tax_rate_as_percent: bool,
    pub display_money: bool,
    pub display_empty_fields: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        let currency = Currency::default();
        Self {
            night_theme: NightTheme::default(),
            font_size: FontSize::default(),
            date_format: DEFAULT_DATE_FORMAT.to_owned(),
            time_format: DEFAULT_TIME_FORMAT.to_owned(),
            currency: currency.symbol,
            display_currency_to_left: currency.display_to_left,
            money_fraction_digits: money::DEFAULT_FRACTION_DIGITS,
            quantity_fraction_digits: quantity::DEFAULT_FRACTION_DIGITS,
            tax_rate: Decimal::ZERO,
            tax_rate_as_percent: true,
            display_money: true,
            display_empty_fields: true,
        }
    }
}

impl GeneralConfig {
    /// Currency built from the symbol settings.
    #[must_use]
    pub fn currency(&self) -> Currency {
        Currency::new(self.currency.clone(), self.display_currency_to_left)
    }

    /// Default tax rate as money (percentage or absolute).
    #[must_use]
    pub fn tax_rate(&self) -> Money {
        if self.tax_rate_as_percent {
            Money::percent(self.tax_rate, self.currency())
        } else {
            Money::new(self.tax_rate, self.currency())
        }
    }
}

/// Stored date and time patterns that chrono cannot format with read as the
/// default, like any other malformed value.
fn pattern_or(stored: Option<String>, default: String) -> String {
    stored
        .filter(|pattern| datetime::is_valid_pattern(pattern))
        .unwrap_or(default)
}

impl ConfigDomain for GeneralConfig {
    const STORE_NAME: &'static str = "general";

    const KEYS: &'static [&'static str] = &[
        keys::NIGHT_THEME.name(),
        keys::FONT_SIZE.name(),
        keys::DATE_FORMAT.name(),
        keys::TIME_FORMAT.name(),
        keys::CURRENCY.name(),
        keys::DISPLAY_CURRENCY_TO_LEFT.name(),
        keys::MONEY_FRACTION_DIGITS.name(),
        keys::QUANTITY_FRACTION_DIGITS.name(),
        keys::TAX_RATE.name(),
        keys::TAX_RATE_AS_PERCENT.name(),
        keys::DISPLAY_MONEY.name(),
        keys::DISPLAY_EMPTY_FIELDS.name(),
    ];

    fn read(prefs: &Preferences) -> Self {
        let d = Self::default();
        Self {
            night_theme: prefs.get_or(keys::NIGHT_THEME, d.night_theme),
            font_size: prefs.get_or(keys::FONT_SIZE, d.font_size),
            date_format: pattern_or(prefs.get(keys::DATE_FORMAT), d.date_format),
            time_format: pattern_or(prefs.get(keys::TIME_FORMAT), d.time_format),
            currency: prefs.get_or(keys::CURRENCY, d.currency),
            display_currency_to_left: prefs
                .get_or(keys::DISPLAY_CURRENCY_TO_LEFT, d.display_currency_to_left),
            money_fraction_digits: prefs
                .get_or(keys::MONEY_FRACTION_DIGITS, d.money_fraction_digits),
            quantity_fraction_digits: prefs
                .get_or(keys::QUANTITY_FRACTION_DIGITS, d.quantity_fraction_digits),
            tax_rate: prefs.get_or(keys::TAX_RATE, d.tax_rate),
            tax_rate_as_percent: prefs.get_or(keys::TAX_RATE_AS_PERCENT, d.tax_rate_as_percent),
            display_money: prefs.get_or(keys::DISPLAY_MONEY, d.display_money),
            display_empty_fields: prefs
                .get_or(keys::DISPLAY_EMPTY_FIELDS, d.display_empty_fields),
        }
    }

    fn write(&self, edit: &mut PreferencesEdit) {
        edit.set(keys::NIGHT_THEME, &self.night_theme)
            .set(keys::FONT_SIZE, &self.font_size)
            .set(keys::DATE_FORMAT, &self.date_format)
            .set(keys::TIME_FORMAT, &self.time_format)
            .set(keys::CURRENCY, &self.currency)
            .set(keys::DISPLAY_CURRENCY_TO_LEFT, &self.display_currency_to_left)
            .set(keys::MONEY_FRACTION_DIGITS, &self.money_fraction_digits)
            .set(keys::QUANTITY_FRACTION_DIGITS, &self.quantity_fraction_digits)
            .set(keys::TAX_RATE, &self.tax_rate)
            .set(keys::TAX_RATE_AS_PERCENT, &self.tax_rate_as_percent)
            .set(keys::DISPLAY_MONEY, &self.display_money)
            .set(keys::DISPLAY_EMPTY_FIELDS, &self.display_empty_fields);
    }
}
