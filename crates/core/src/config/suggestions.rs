//! Product editor suggestion behaviour.

use super::ConfigDomain;
use crate::prefs::{Preferences, PreferencesEdit};
use crate::types::{AfterAddProduct, LockProductElement};

pub mod keys {
    use crate::prefs::PrefKey;
    use crate::types::{AfterAddProduct, LockProductElement};

    pub const DISPLAY_DEFAULT_AUTOCOMPLETES: PrefKey<bool> =
        PrefKey::new("display_default_autocompletes");
    pub const LOCK_PRODUCT_ELEMENT: PrefKey<LockProductElement> =
        PrefKey::new("lock_product_element");
    pub const AFTER_ADD_PRODUCT: PrefKey<AfterAddProduct> = PrefKey::new("after_add_product");
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionsConfig {
    /// Offer the bundled autocompletion entries, not only personal ones.
    pub display_default_autocompletes: bool,
    pub lock_product_element: LockProductElement,
    pub after_add_product: AfterAddProduct,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            display_default_autocompletes: true,
            lock_product_element: LockProductElement::default(),
            after_add_product: AfterAddProduct::default(),
        }
    }
}

impl ConfigDomain for SuggestionsConfig {
    const STORE_NAME: &'static str = "suggestions";

    const KEYS: &'static [&'static str] = &[
        keys::DISPLAY_DEFAULT_AUTOCOMPLETES.name(),
        keys::LOCK_PRODUCT_ELEMENT.name(),
        keys::AFTER_ADD_PRODUCT.name(),
    ];

    fn read(prefs: &Preferences) -> Self {
        let d = Self::default();
        Self {
            display_default_autocompletes: prefs.get_or(
                keys::DISPLAY_DEFAULT_AUTOCOMPLETES,
                d.display_default_autocompletes,
            ),
            lock_product_element: prefs.get_or(keys::LOCK_PRODUCT_ELEMENT, d.lock_product_element),
            after_add_product: prefs.get_or(keys::AFTER_ADD_PRODUCT, d.after_add_product),
        }
    }

    fn write(&self, edit: &mut PreferencesEdit) {
        edit.set(
            keys::DISPLAY_DEFAULT_AUTOCOMPLETES,
            &self.display_default_autocompletes,
        )
        .set(keys::LOCK_PRODUCT_ELEMENT, &self.lock_product_element)
        .set(keys::AFTER_ADD_PRODUCT, &self.after_add_product);
    }
}
