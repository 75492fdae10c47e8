//! Shopping lists screen settings.

use super::ConfigDomain;
use crate::prefs::{Preferences, PreferencesEdit};
use crate::types::{DisplayCompleted, SortBy};

pub mod keys {
    use crate::prefs::PrefKey;
    use crate::types::{DisplayCompleted, SortBy};

    pub const MULTI_COLUMNS: PrefKey<bool> = PrefKey::new("multi_columns");
    pub const SORT_BY: PrefKey<SortBy> = PrefKey::new("sort_by");
    pub const SORT_ASCENDING: PrefKey<bool> = PrefKey::new("sort_ascending");
    pub const DISPLAY_COMPLETED: PrefKey<DisplayCompleted> = PrefKey::new("display_completed");
    pub const DISPLAY_TOTAL: PrefKey<bool> = PrefKey::new("display_total");
    pub const STRIKE_THROUGH_COMPLETED: PrefKey<bool> = PrefKey::new("strike_through_completed");
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingListsConfig {
    pub multi_columns: bool,
    pub sort_by: SortBy,
    pub sort_ascending: bool,
    pub display_completed: DisplayCompleted,
    pub display_total: bool,
    pub strike_through_completed: bool,
}

impl Default for ShoppingListsConfig {
    fn default() -> Self {
        Self {
            multi_columns: false,
            sort_by: SortBy::default(),
            sort_ascending: true,
            display_completed: DisplayCompleted::default(),
            display_total: true,
            strike_through_completed: true,
        }
    }
}

impl ConfigDomain for ShoppingListsConfig {
    const STORE_NAME: &'static str = "shopping_lists";

    const KEYS: &'static [&'static str] = &[
        keys::MULTI_COLUMNS.name(),
        keys::SORT_BY.name(),
        keys::SORT_ASCENDING.name(),
        keys::DISPLAY_COMPLETED.name(),
        keys::DISPLAY_TOTAL.name(),
        keys::STRIKE_THROUGH_COMPLETED.name(),
    ];

    fn read(prefs: &Preferences) -> Self {
        let d = Self::default();
        Self {
            multi_columns: prefs.get_or(keys::MULTI_COLUMNS, d.multi_columns),
            sort_by: prefs.get_or(keys::SORT_BY, d.sort_by),
            sort_ascending: prefs.get_or(keys::SORT_ASCENDING, d.sort_ascending),
            display_completed: prefs.get_or(keys::DISPLAY_COMPLETED, d.display_completed),
            display_total: prefs.get_or(keys::DISPLAY_TOTAL, d.display_total),
            strike_through_completed: prefs
                .get_or(keys::STRIKE_THROUGH_COMPLETED, d.strike_through_completed),
        }
    }

    fn write(&self, edit: &mut PreferencesEdit) {
        edit.set(keys::MULTI_COLUMNS, &self.multi_columns)
            .set(keys::SORT_BY, &self.sort_by)
            .set(keys::SORT_ASCENDING, &self.sort_ascending)
            .set(keys::DISPLAY_COMPLETED, &self.display_completed)
            .set(keys::DISPLAY_TOTAL, &self.display_total)
            .set(keys::STRIKE_THROUGH_COMPLETED, &self.strike_through_completed);
    }
}
