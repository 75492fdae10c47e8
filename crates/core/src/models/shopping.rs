//! Shopping list entity.

use rust_decimal::Decimal;

use super::{Product, field_or, money_field};
use crate::backup::ShoppingRecord;
use crate::prefs::PrefValue;
use crate::types::{Currency, DateTime, Money, ShoppingId, ShoppingLocation, SortBy};

/// A shopping list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shopping {
    pub id: ShoppingId,
    pub position: i32,
    pub created: DateTime,
    pub last_modified: DateTime,
    pub name: String,
    /// Unset when no reminder is scheduled.
    pub reminder: DateTime,
    pub total: Money,
    pub budget: Money,
    pub location: ShoppingLocation,
    pub sort_by: SortBy,
    pub sort_ascending: bool,
    pub pinned: bool,
}

impl Shopping {
    /// An empty list in `Purchases`, created now.
    #[must_use]
    pub fn new(name: impl Into<String>, currency: &Currency) -> Self {
        let now = DateTime::now();
        Self {
            id: ShoppingId::generate(),
            position: 0,
            created: now,
            last_modified: now,
            name: name.into(),
            reminder: DateTime::default(),
            total: Money::zero(currency.clone()),
            budget: Money::zero(currency.clone()),
            location: ShoppingLocation::default(),
            sort_by: SortBy::default(),
            sort_ascending: true,
            pinned: false,
        }
    }

    #[must_use]
    pub fn from_record(record: &ShoppingRecord, currency: &Currency) -> Self {
        Self {
            id: ShoppingId::new(record.id.clone()),
            position: field_or(&record.position, 0),
            created: field_or(&record.created, DateTime::default()),
            last_modified: field_or(&record.last_modified, DateTime::default()),
            name: record.name.clone(),
            reminder: field_or(&record.reminder, DateTime::default()),
            total: money_field(&record.total, "", currency),
            budget: money_field(&record.budget, "", currency),
            location: field_or(&record.location, ShoppingLocation::default()),
            sort_by: field_or(&record.sort_by, SortBy::default()),
            sort_ascending: field_or(&record.sort_ascending, true),
            pinned: field_or(&record.pinned, false),
        }
    }

    #[must_use]
    pub fn to_record(&self, money_fraction_digits: u32) -> ShoppingRecord {
        ShoppingRecord {
            id: self.id.to_string(),
            position: self.position.encode(),
            created: self.created.encode(),
            last_modified: self.last_modified.encode(),
            name: self.name.clone(),
            reminder: self.reminder.encode(),
            total: self.total.value().encode(),
            total_formatted: self.total.format(money_fraction_digits),
            budget: self.budget.value().encode(),
            location: self.location.encode(),
            sort_by: self.sort_by.encode(),
            sort_ascending: self.sort_ascending.encode(),
            pinned: self.pinned.encode(),
        }
    }

    /// Sum of the totals of this list's products, saturating at the
    /// [`Decimal`] bounds.
    #[must_use]
    pub fn calculate_total(&self, products: &[Product]) -> Money {
        let sum = products
            .iter()
            .filter(|p| p.shopping_id == self.id)
            .map(|p| p.total.value())
            .fold(Decimal::ZERO, Decimal::saturating_add);
        Money::new(sum, self.total.currency().clone())
    }

    /// Whether the total exceeds a non-zero budget.
    #[must_use]
    pub fn over_budget(&self) -> bool {
        !self.budget.is_zero() && self.total.value() > self.budget.value()
    }
}
