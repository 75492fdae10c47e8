//! Product list and editor settings.

use super::ConfigDomain;
use crate::prefs::{Preferences, PreferencesEdit};

pub mod keys {
    use crate::prefs::PrefKey;

    pub const EDIT_PRODUCT_AFTER_COMPLETED: PrefKey<bool> =
        PrefKey::new("edit_product_after_completed");
    pub const COMPLETED_WITH_CHECKBOX: PrefKey<bool> = PrefKey::new("completed_with_checkbox");
    pub const DISPLAY_OTHER_FIELDS: PrefKey<bool> = PrefKey::new("display_other_fields");
    pub const ENTER_TO_SAVE_PRODUCT: PrefKey<bool> = PrefKey::new("enter_to_save_product");
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductsConfig {
    /// Open the editor when a completed product is tapped.
    pub edit_product_after_completed: bool,
    pub completed_with_checkbox: bool,
    /// Show manufacturer, brand, size, color and provider.
    pub display_other_fields: bool,
    pub enter_to_save_product: bool,
}

impl Default for ProductsConfig {
    fn default() -> Self {
        Self {
            edit_product_after_completed: false,
            completed_with_checkbox: false,
            display_other_fields: true,
            enter_to_save_product: true,
        }
    }
}

impl ConfigDomain for ProductsConfig {
    const STORE_NAME: &'static str = "products";

    const KEYS: &'static [&'static str] = &[
        keys::EDIT_PRODUCT_AFTER_COMPLETED.name(),
        keys::COMPLETED_WITH_CHECKBOX.name(),
        keys::DISPLAY_OTHER_FIELDS.name(),
        keys::ENTER_TO_SAVE_PRODUCT.name(),
    ];

    fn read(prefs: &Preferences) -> Self {
        let d = Self::default();
        Self {
            edit_product_after_completed: prefs
                .get_or(keys::EDIT_PRODUCT_AFTER_COMPLETED, d.edit_product_after_completed),
            completed_with_checkbox: prefs
                .get_or(keys::COMPLETED_WITH_CHECKBOX, d.completed_with_checkbox),
            display_other_fields: prefs.get_or(keys::DISPLAY_OTHER_FIELDS, d.display_other_fields),
            enter_to_save_product: prefs
                .get_or(keys::ENTER_TO_SAVE_PRODUCT, d.enter_to_save_product),
        }
    }

    fn write(&self, edit: &mut PreferencesEdit) {
        edit.set(
            keys::EDIT_PRODUCT_AFTER_COMPLETED,
            &self.edit_product_after_completed,
        )
        .set(keys::COMPLETED_WITH_CHECKBOX, &self.completed_with_checkbox)
        .set(keys::DISPLAY_OTHER_FIELDS, &self.display_other_fields)
        .set(keys::ENTER_TO_SAVE_PRODUCT, &self.enter_to_save_product);
    }
}
