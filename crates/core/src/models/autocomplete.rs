//! Autocompletion entry entity.

use rust_decimal::Decimal;

use super::{field_or, money_field};
use crate::backup::AutocompleteRecord;
use crate::prefs::PrefValue;
use crate::types::{AutocompleteId, Currency, DateTime, Money, Quantity};

/// A remembered product used to suggest values while editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Autocomplete {
    pub id: AutocompleteId,
    pub position: i32,
    pub created: DateTime,
    pub last_modified: DateTime,
    pub name: String,
    pub quantity: Quantity,
    pub price: Money,
    pub discount: Money,
    pub tax_rate: Money,
    pub total: Money,
    pub manufacturer: String,
    pub brand: String,
    pub size: String,
    pub color: String,
    pub provider: String,
    /// Created by the user rather than bundled with the app.
    pub personal: bool,
    /// Language tag of bundled entries.
    pub language: String,
}

impl Autocomplete {
    #[must_use]
    pub fn from_record(record: &AutocompleteRecord, currency: &Currency) -> Self {
        Self {
            id: AutocompleteId::new(record.id.clone()),
            position: field_or(&record.position, 0),
            created: field_or(&record.created, DateTime::default()),
            last_modified: field_or(&record.last_modified, DateTime::default()),
            name: record.name.clone(),
            quantity: Quantity::new(
                field_or(&record.quantity, Decimal::ZERO),
                record.quantity_symbol.clone(),
            ),
            price: money_field(&record.price, "", currency),
            discount: money_field(&record.discount, "", currency),
            tax_rate: money_field(&record.tax_rate, "", currency),
            total: money_field(&record.total, "", currency),
            manufacturer: record.manufacturer.clone(),
            brand: record.brand.clone(),
            size: record.size.clone(),
            color: record.color.clone(),
            provider: record.provider.clone(),
            personal: field_or(&record.personal, true),
            language: record.language.clone(),
        }
    }

    #[must_use]
    pub fn to_record(&self) -> AutocompleteRecord {
        AutocompleteRecord {
            id: self.id.to_string(),
            position: self.position.encode(),
            created: self.created.encode(),
            last_modified: self.last_modified.encode(),
            name: self.name.clone(),
            quantity: self.quantity.value.encode(),
            quantity_symbol: self.quantity.symbol.clone(),
            price: self.price.value().encode(),
            discount: self.discount.value().encode(),
            tax_rate: self.tax_rate.value().encode(),
            total: self.total.value().encode(),
            manufacturer: self.manufacturer.clone(),
            brand: self.brand.clone(),
            size: self.size.clone(),
            color: self.color.clone(),
            provider: self.provider.clone(),
            personal: self.personal.encode(),
            language: self.language.clone(),
        }
    }

    /// Whether the name starts with `query`, ignoring case.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        !query.is_empty() && self.name.to_lowercase().starts_with(&query.to_lowercase())
    }
}
