//! Flat string records carried in backup files.
//!
//! Every field is a `String` holding the stored representation of the
//! value (numbers, timestamps in epoch milliseconds, booleans, enumeration
//! names). Fields missing from a backup line decode as their default, which
//! is the empty string except for [`PreferencesRecord`].

use serde::{Deserialize, Serialize};

use crate::config::general::keys;
use crate::config::{ConfigDomain, GeneralConfig};
use crate::prefs::{PrefValue, Preferences};

/// Record category, one per backup tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordCategory {
    Shopping,
    Product,
    Autocomplete,
    Preferences,
}

impl RecordCategory {
    /// Every category, in file order.
    pub const ALL: [Self; 4] = [
        Self::Shopping,
        Self::Product,
        Self::Autocomplete,
        Self::Preferences,
    ];

    /// Line prefix marking this category in a backup file.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Shopping => "shopping:",
            Self::Product => "product:",
            Self::Autocomplete => "autocomplete:",
            Self::Preferences => "preferences:",
        }
    }
}

impl std::fmt::Display for RecordCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shopping => write!(f, "shopping"),
            Self::Product => write!(f, "product"),
            Self::Autocomplete => write!(f, "autocomplete"),
            Self::Preferences => write!(f, "preferences"),
        }
    }
}

/// A shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShoppingRecord {
    pub id: String,
    pub position: String,
    pub created: String,
    pub last_modified: String,
    pub name: String,
    pub reminder: String,
    pub total: String,
    pub total_formatted: String,
    pub budget: String,
    pub location: String,
    pub sort_by: String,
    pub sort_ascending: String,
    pub pinned: String,
}

/// A product inside a shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: String,
    pub position: String,
    /// Id of the owning shopping list.
    pub directory: String,
    pub created: String,
    pub last_modified: String,
    pub name: String,
    pub description: String,
    pub quantity: String,
    pub quantity_symbol: String,
    pub price: String,
    pub discount: String,
    pub discount_as_percent: String,
    pub tax_rate: String,
    pub tax_rate_as_percent: String,
    pub total: String,
    pub total_formatted: String,
    pub note: String,
    pub manufacturer: String,
    pub brand: String,
    pub size: String,
    pub color: String,
    pub provider: String,
    pub completed: String,
    pub pinned: String,
}

/// An autocompletion entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AutocompleteRecord {
    pub id: String,
    pub position: String,
    pub created: String,
    pub last_modified: String,
    pub name: String,
    pub quantity: String,
    pub quantity_symbol: String,
    pub price: String,
    pub discount: String,
    pub tax_rate: String,
    pub total: String,
    pub manufacturer: String,
    pub brand: String,
    pub size: String,
    pub color: String,
    pub provider: String,
    pub personal: String,
    pub language: String,
}

/// The general settings blob.
///
/// The default value is the published default of [`GeneralConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreferencesRecord {
    pub night_theme: String,
    pub font_size: String,
    pub date_format: String,
    pub time_format: String,
    pub currency: String,
    pub display_currency_to_left: String,
    pub money_fraction_digits: String,
    pub quantity_fraction_digits: String,
    pub tax_rate: String,
    pub tax_rate_as_percent: String,
    pub display_money: String,
    pub display_empty_fields: String,
}

impl Default for PreferencesRecord {
    fn default() -> Self {
        Self::from(&GeneralConfig::default())
    }
}

impl PreferencesRecord {
    /// Store key / value pairs, skipping empty fields.
    fn to_preferences(&self) -> Preferences {
        [
            (keys::NIGHT_THEME.name(), &self.night_theme),
            (keys::FONT_SIZE.name(), &self.font_size),
            (keys::DATE_FORMAT.name(), &self.date_format),
            (keys::TIME_FORMAT.name(), &self.time_format),
            (keys::CURRENCY.name(), &self.currency),
            (
                keys::DISPLAY_CURRENCY_TO_LEFT.name(),
                &self.display_currency_to_left,
            ),
            (keys::MONEY_FRACTION_DIGITS.name(), &self.money_fraction_digits),
            (
                keys::QUANTITY_FRACTION_DIGITS.name(),
                &self.quantity_fraction_digits,
            ),
            (keys::TAX_RATE.name(), &self.tax_rate),
            (keys::TAX_RATE_AS_PERCENT.name(), &self.tax_rate_as_percent),
            (keys::DISPLAY_MONEY.name(), &self.display_money),
            (keys::DISPLAY_EMPTY_FIELDS.name(), &self.display_empty_fields),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (key, value.as_str()))
        .collect()
    }
}

impl From<&GeneralConfig> for PreferencesRecord {
    fn from(config: &GeneralConfig) -> Self {
        Self {
            night_theme: config.night_theme.encode(),
            font_size: config.font_size.encode(),
            date_format: config.date_format.clone(),
            time_format: config.time_format.clone(),
            currency: config.currency.clone(),
            display_currency_to_left: config.display_currency_to_left.encode(),
            money_fraction_digits: config.money_fraction_digits.encode(),
            quantity_fraction_digits: config.quantity_fraction_digits.encode(),
            tax_rate: config.tax_rate.encode(),
            tax_rate_as_percent: config.tax_rate_as_percent.encode(),
            display_money: config.display_money.encode(),
            display_empty_fields: config.display_empty_fields.encode(),
        }
    }
}

impl From<&PreferencesRecord> for GeneralConfig {
    fn from(record: &PreferencesRecord) -> Self {
        Self::read(&record.to_preferences())
    }
}

/// One decoded backup line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupRecord {
    Shopping(ShoppingRecord),
    Product(ProductRecord),
    Autocomplete(AutocompleteRecord),
    Preferences(PreferencesRecord),
}

impl BackupRecord {
    #[must_use]
    pub const fn category(&self) -> RecordCategory {
        match self {
            Self::Shopping(_) => RecordCategory::Shopping,
            Self::Product(_) => RecordCategory::Product,
            Self::Autocomplete(_) => RecordCategory::Autocomplete,
            Self::Preferences(_) => RecordCategory::Preferences,
        }
    }
}

/// Everything a backup file holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BackupData {
    pub shoppings: Vec<ShoppingRecord>,
    pub products: Vec<ProductRecord>,
    pub autocompletes: Vec<AutocompleteRecord>,
    pub preferences: PreferencesRecord,
}

impl BackupData {
    /// Number of shopping, product and autocomplete records.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.shoppings.len() + self.products.len() + self.autocompletes.len()
    }

    /// Add one decoded record; a preferences record replaces the current one.
    pub fn push(&mut self, record: BackupRecord) {
        match record {
            BackupRecord::Shopping(r) => self.shoppings.push(r),
            BackupRecord::Product(r) => self.products.push(r),
            BackupRecord::Autocomplete(r) => self.autocompletes.push(r),
            BackupRecord::Preferences(r) => self.preferences = r,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::NightTheme;

    #[test]
    fn test_default_preferences_match_general_defaults() {
        let record = PreferencesRecord::default();
        assert_eq!(record.night_theme, "SYSTEM");
        assert_eq!(record.money_fraction_digits, "2");
        assert_eq!(GeneralConfig::from(&record), GeneralConfig::default());
    }

    #[test]
    fn test_preferences_record_lenient() {
        let record = PreferencesRecord {
            night_theme: "ENABLED".to_owned(),
            font_size: "NOT_A_SIZE".to_owned(),
            date_format: String::new(),
            ..PreferencesRecord::default()
        };
        let config = GeneralConfig::from(&record);
        assert_eq!(config.night_theme, NightTheme::Enabled);
        assert_eq!(config.font_size, GeneralConfig::default().font_size);
        assert_eq!(config.date_format, GeneralConfig::default().date_format);
    }

    #[test]
    fn test_missing_fields_default() {
        let record: ProductRecord =
            serde_json::from_str(r#"{"id":"p1","directory":"s1","name":"Milk"}"#).unwrap();
        assert_eq!(record.directory, "s1");
        assert!(record.price.is_empty());

        let prefs: PreferencesRecord = serde_json::from_str(r#"{"currency":"€"}"#).unwrap();
        assert_eq!(prefs.currency, "€");
        assert_eq!(prefs.night_theme, "SYSTEM");
    }

    #[test]
    fn test_camel_case_fields() {
        let record = ShoppingRecord {
            last_modified: "1".to_owned(),
            ..ShoppingRecord::default()
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"lastModified\":\"1\""));
    }

    #[test]
    fn test_push_replaces_preferences() {
        let mut data = BackupData::default();
        data.push(BackupRecord::Preferences(PreferencesRecord {
            currency: "€".to_owned(),
            ..PreferencesRecord::default()
        }));
        data.push(BackupRecord::Preferences(PreferencesRecord {
            currency: "£".to_owned(),
            ..PreferencesRecord::default()
        }));
        assert_eq!(data.preferences.currency, "£");
        assert_eq!(data.record_count(), 0);
    }
}
