//! Settings domains.
//!
//! Each domain is a typed aggregate persisted in its own named preference
//! store. The domain's `Default` impl is its published default table:
//! [`ConfigDomain::read`] substitutes the default for every field that is
//! missing, malformed or names an unknown enumeration variant, so reading a
//! domain never fails.
//!
//! # Domains
//!
//! | Type | Store |
//! |---|---|
//! | [`GeneralConfig`] | `general` |
//! | [`ShoppingListsConfig`] | `shopping_lists` |
//! | [`ProductsConfig`] | `products` |
//! | [`AutocompletesConfig`] | `autocompletes` |
//! | [`SuggestionsConfig`] | `suggestions` |
//! | [`ProductWidgetConfig`] | `product_widget` |
//! | [`UserConfig`] | `user` |

pub mod autocompletes;
pub mod general;
pub mod product_widget;
pub mod products;
pub mod shopping_lists;
pub mod suggestions;
pub mod user;

pub use autocompletes::AutocompletesConfig;
pub use general::GeneralConfig;
pub use product_widget::ProductWidgetConfig;
pub use products::ProductsConfig;
pub use shopping_lists::ShoppingListsConfig;
pub use suggestions::SuggestionsConfig;
pub use user::UserConfig;

use crate::prefs::{Preferences, PreferencesEdit};

/// A typed settings aggregate backed by one preference store.
pub trait ConfigDomain: Clone + PartialEq + Default + Send + Sync + 'static {
    /// Name of the backing store. Stores for different domains never share keys.
    const STORE_NAME: &'static str;

    /// Every key this domain reads or writes.
    const KEYS: &'static [&'static str];

    /// Map a snapshot to the domain, field by field, with default fallback.
    fn read(prefs: &Preferences) -> Self;

    /// Record every field of `self` into `edit`.
    fn write(&self, edit: &mut PreferencesEdit);
}

/// Store names of every domain, in the order listed above.
pub const STORE_NAMES: &[&str] = &[
    GeneralConfig::STORE_NAME,
    ShoppingListsConfig::STORE_NAME,
    ProductsConfig::STORE_NAME,
    AutocompletesConfig::STORE_NAME,
    SuggestionsConfig::STORE_NAME,
    ProductWidgetConfig::STORE_NAME,
    UserConfig::STORE_NAME,
];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_defaults_roundtrip<D: ConfigDomain + std::fmt::Debug>() {
        assert_eq!(D::read(&Preferences::default()), D::default());

        let mut edit = PreferencesEdit::new();
        D::default().write(&mut edit);
        let mut values = std::collections::BTreeMap::new();
        edit.apply(&mut values);
        assert_eq!(values.len(), D::KEYS.len(), "{} writes every key", D::STORE_NAME);
        for key in values.keys() {
            assert!(D::KEYS.contains(&key.as_str()), "{key} listed in KEYS");
        }
        assert_eq!(D::read(&Preferences::new(values)), D::default());
    }

    #[test]
    fn test_every_domain_defaults() {
        assert_defaults_roundtrip::<GeneralConfig>();
        assert_defaults_roundtrip::<ShoppingListsConfig>();
        assert_defaults_roundtrip::<ProductsConfig>();
        assert_defaults_roundtrip::<AutocompletesConfig>();
        assert_defaults_roundtrip::<SuggestionsConfig>();
        assert_defaults_roundtrip::<ProductWidgetConfig>();
        assert_defaults_roundtrip::<UserConfig>();
    }

    #[test]
    fn test_store_names_unique() {
        let mut names = STORE_NAMES.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), STORE_NAMES.len());
    }
}
