//! Autocompletion settings.
//!
//! The `max_*` limits cap how many suggestions of each kind are offered
//! while editing a product.

use super::ConfigDomain;
use crate::prefs::{Preferences, PreferencesEdit};

pub mod keys {
    use crate::prefs::PrefKey;

    pub const SAVE_PRODUCT_TO_AUTOCOMPLETES: PrefKey<bool> =
        PrefKey::new("save_product_to_autocompletes");
    pub const MAX_NAMES: PrefKey<u32> = PrefKey::new("max_names");
    pub const MAX_QUANTITIES: PrefKey<u32> = PrefKey::new("max_quantities");
    pub const MAX_MONEYS: PrefKey<u32> = PrefKey::new("max_moneys");
    pub const MAX_OTHERS: PrefKey<u32> = PrefKey::new("max_others");
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompletesConfig {
    /// Remember saved products as autocompletion entries.
    pub save_product_to_autocompletes: bool,
    pub max_names: u32,
    pub max_quantities: u32,
    pub max_moneys: u32,
    pub max_others: u32,
}

impl Default for AutocompletesConfig {
    fn default() -> Self {
        Self {
            save_product_to_autocompletes: true,
            max_names: 10,
            max_quantities: 4,
            max_moneys: 4,
            max_others: 4,
        }
    }
}

impl ConfigDomain for AutocompletesConfig {
    const STORE_NAME: &'static str = "autocompletes";

    const KEYS: &'static [&'static str] = &[
        keys::SAVE_PRODUCT_TO_AUTOCOMPLETES.name(),
        keys::MAX_NAMES.name(),
        keys::MAX_QUANTITIES.name(),
        keys::MAX_MONEYS.name(),
        keys::MAX_OTHERS.name(),
    ];

    fn read(prefs: &Preferences) -> Self {
        let d = Self::default();
        Self {
            save_product_to_autocompletes: prefs.get_or(
                keys::SAVE_PRODUCT_TO_AUTOCOMPLETES,
                d.save_product_to_autocompletes,
            ),
            max_names: prefs.get_or(keys::MAX_NAMES, d.max_names),
            max_quantities: prefs.get_or(keys::MAX_QUANTITIES, d.max_quantities),
            max_moneys: prefs.get_or(keys::MAX_MONEYS, d.max_moneys),
            max_others: prefs.get_or(keys::MAX_OTHERS, d.max_others),
        }
    }

    fn write(&self, edit: &mut PreferencesEdit) {
        edit.set(
            keys::SAVE_PRODUCT_TO_AUTOCOMPLETES,
            &self.save_product_to_autocompletes,
        )
        .set(keys::MAX_NAMES, &self.max_names)
        .set(keys::MAX_QUANTITIES, &self.max_quantities)
        .set(keys::MAX_MONEYS, &self.max_moneys)
        .set(keys::MAX_OTHERS, &self.max_others);
    }
}
