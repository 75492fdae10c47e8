//! Product entity and total calculation.

use rust_decimal::Decimal;

use super::{field_or, money_field};
use crate::backup::ProductRecord;
use crate::prefs::PrefValue;
use crate::types::{Currency, DateTime, Money, ProductId, Quantity, ShoppingId};

/// A product inside a shopping list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub position: i32,
    /// Owning shopping list.
    pub shopping_id: ShoppingId,
    pub created: DateTime,
    pub last_modified: DateTime,
    pub name: String,
    pub description: String,
    pub quantity: Quantity,
    /// Price per unit.
    pub price: Money,
    /// Absolute amount or percentage of `price * quantity`.
    pub discount: Money,
    /// Absolute amount or percentage of the discounted amount.
    pub tax_rate: Money,
    pub total: Money,
    pub note: String,
    pub manufacturer: String,
    pub brand: String,
    pub size: String,
    pub color: String,
    pub provider: String,
    pub completed: bool,
    pub pinned: bool,
}

impl Product {
    /// Build from a backup record, substituting defaults for bad fields.
    #[must_use]
    pub fn from_record(record: &ProductRecord, currency: &Currency) -> Self {
        Self {
            id: ProductId::new(record.id.clone()),
            position: field_or(&record.position, 0),
            shopping_id: ShoppingId::new(record.directory.clone()),
            created: field_or(&record.created, DateTime::default()),
            last_modified: field_or(&record.last_modified, DateTime::default()),
            name: record.name.clone(),
            description: record.description.clone(),
            quantity: Quantity::new(
                field_or(&record.quantity, Decimal::ZERO),
                record.quantity_symbol.clone(),
            ),
            price: money_field(&record.price, "", currency),
            discount: money_field(&record.discount, &record.discount_as_percent, currency),
            tax_rate: money_field(&record.tax_rate, &record.tax_rate_as_percent, currency),
            total: money_field(&record.total, "", currency),
            note: record.note.clone(),
            manufacturer: record.manufacturer.clone(),
            brand: record.brand.clone(),
            size: record.size.clone(),
            color: record.color.clone(),
            provider: record.provider.clone(),
            completed: field_or(&record.completed, false),
            pinned: field_or(&record.pinned, false),
        }
    }

    /// Render as a backup record.
    #[must_use]
    pub fn to_record(&self, money_fraction_digits: u32) -> ProductRecord {
        ProductRecord {
            id: self.id.to_string(),
            position: self.position.encode(),
            directory: self.shopping_id.to_string(),
            created: self.created.encode(),
            last_modified: self.last_modified.encode(),
            name: self.name.clone(),
            description: self.description.clone(),
            quantity: self.quantity.value.encode(),
            quantity_symbol: self.quantity.symbol.clone(),
            price: self.price.value().encode(),
            discount: self.discount.value().encode(),
            discount_as_percent: self.discount.is_percent().encode(),
            tax_rate: self.tax_rate.value().encode(),
            tax_rate_as_percent: self.tax_rate.is_percent().encode(),
            total: self.total.value().encode(),
            total_formatted: self.total.format(money_fraction_digits),
            note: self.note.clone(),
            manufacturer: self.manufacturer.clone(),
            brand: self.brand.clone(),
            size: self.size.clone(),
            color: self.color.clone(),
            provider: self.provider.clone(),
            completed: self.completed.encode(),
            pinned: self.pinned.encode(),
        }
    }

    /// Compute the total from price, quantity, discount and tax.
    ///
    /// A zero quantity counts as one unit. The discount applies to the
    /// undiscounted amount, the tax to the discounted one.
    #[must_use]
    pub fn calculate_total(&self, money_fraction_digits: u32) -> Money {
        let base = if self.quantity.is_zero() {
            self.price.clone()
        } else {
            self.price.times(self.quantity.value)
        };

        let discounted = base.minus(&self.discount.applied_to(&base));
        let tax = self.tax_rate.applied_to(&discounted);

        discounted.plus(&tax).rounded(money_fraction_digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProductRecord {
        ProductRecord {
            id: "p1".to_owned(),
            directory: "s1".to_owned(),
            name: "Milk".to_owned(),
            quantity: "2".to_owned(),
            quantity_symbol: "l".to_owned(),
            price: "1.25".to_owned(),
            discount: "10".to_owned(),
            discount_as_percent: "true".to_owned(),
            tax_rate: "20".to_owned(),
            tax_rate_as_percent: "true".to_owned(),
            completed: "true".to_owned(),
            ..ProductRecord::default()
        }
    }

    #[test]
    fn test_from_record() {
        let product = Product::from_record(&record(), &Currency::default());
        assert_eq!(product.shopping_id.as_str(), "s1");
        assert_eq!(product.quantity.to_string(), "2 l");
        assert!(product.discount.is_percent());
        assert!(product.completed);
        assert!(!product.pinned);
    }

    #[test]
    fn test_malformed_fields_default() {
        let record = ProductRecord {
            position: "first".to_owned(),
            price: "cheap".to_owned(),
            completed: "maybe".to_owned(),
            ..record()
        };
        let product = Product::from_record(&record, &Currency::default());
        assert_eq!(product.position, 0);
        assert!(product.price.is_zero());
        assert!(!product.completed);
    }

    #[test]
    fn test_calculate_total_percent_discount_and_tax() {
        // 1.25 * 2 = 2.50, -10% = 2.25, +20% = 2.70
        let product = Product::from_record(&record(), &Currency::default());
        assert_eq!(product.calculate_total(2).value(), Decimal::new(270, 2));
    }

    #[test]
    fn test_calculate_total_absolute_discount() {
        let record = ProductRecord {
            discount: "0.50".to_owned(),
            discount_as_percent: "false".to_owned(),
            tax_rate: String::new(),
            ..record()
        };
        let product = Product::from_record(&record, &Currency::default());
        assert_eq!(product.calculate_total(2).value(), Decimal::new(200, 2));
    }

    #[test]
    fn test_calculate_total_zero_quantity_counts_once() {
        let record = ProductRecord {
            quantity: String::new(),
            discount: String::new(),
            tax_rate: String::new(),
            ..record()
        };
        let product = Product::from_record(&record, &Currency::default());
        assert_eq!(product.calculate_total(2).value(), Decimal::new(125, 2));
    }

    #[test]
    fn test_calculate_total_max_price_saturates() {
        let record = ProductRecord {
            price: "79228162514264337593543950335".to_owned(),
            quantity: "2".to_owned(),
            discount: String::new(),
            tax_rate: String::new(),
            ..record()
        };
        let product = Product::from_record(&record, &Currency::default());
        assert_eq!(product.price.value(), Decimal::MAX);

        let total = product.calculate_total(2);
        assert_eq!(total.value(), Decimal::MAX);
        assert!(total.format(2).starts_with('$'));
    }

    #[test]
    fn test_calculate_total_max_price_with_percent_tax() {
        let record = ProductRecord {
            price: "79228162514264337593543950335".to_owned(),
            quantity: "3".to_owned(),
            ..record()
        };
        let product = Product::from_record(&record, &Currency::default());
        assert!(product.calculate_total(2).value() > Decimal::ZERO);
    }

    #[test]
    fn test_record_roundtrip_preserves_values() {
        let product = Product::from_record(&record(), &Currency::default());
        let again = Product::from_record(&product.to_record(2), &Currency::default());
        assert_eq!(again, product);
    }
}
