//! Typed settings stores.
//!
//! [`ConfigStore`] binds a [`ConfigDomain`] to its [`PreferenceStore`].
//! Reads never fail: every field that is missing or malformed resolves to
//! the domain default. Writes are merge batches, so fields the caller does
//! not touch keep their stored values.
//!
//! [`ConfigStores`] opens one store per domain. It is built once at startup
//! and handed to whatever needs settings.

use std::marker::PhantomData;
use std::path::Path;

use async_stream::stream;
use futures::Stream;
use shoplist_core::config::{
    AutocompletesConfig, GeneralConfig, ProductWidgetConfig, ProductsConfig,
    ShoppingListsConfig, SuggestionsConfig, UserConfig,
};
use shoplist_core::ConfigDomain;
use shoplist_core::prefs::{EditOp, Preferences, PreferencesEdit};
use tracing::{info, instrument};

use crate::error::StoreError;
use crate::preference_store::PreferenceStore;

/// Typed view over the preference store of domain `D`.
pub struct ConfigStore<D> {
    store: PreferenceStore,
    _domain: PhantomData<fn() -> D>,
}

impl<D> Clone for ConfigStore<D> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _domain: PhantomData,
        }
    }
}

impl<D> std::fmt::Debug for ConfigStore<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigStore")
            .field("store", &self.store.name())
            .finish()
    }
}

impl<D: ConfigDomain> ConfigStore<D> {
    /// Wrap an existing preference store.
    #[must_use]
    pub const fn new(store: PreferenceStore) -> Self {
        Self {
            store,
            _domain: PhantomData,
        }
    }

    /// Open the domain's store under `dir`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store file exists but cannot be read.
    pub async fn open(dir: &Path) -> Result<Self, StoreError> {
        Ok(Self::new(PreferenceStore::open(dir, D::STORE_NAME).await?))
    }

    /// An empty store kept in memory.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(PreferenceStore::in_memory(D::STORE_NAME))
    }

    /// The underlying preference store.
    #[must_use]
    pub const fn store(&self) -> &PreferenceStore {
        &self.store
    }

    /// Current value of the domain.
    #[must_use]
    pub fn get(&self) -> D {
        D::read(&self.store.snapshot())
    }

    /// Raw stored values, without defaults.
    #[must_use]
    pub fn raw(&self) -> Preferences {
        self.store.snapshot()
    }

    /// Stream of domain values: the current one first, then one after every
    /// change to the store.
    ///
    /// The stream ends once every handle to the store has been dropped.
    pub fn observe(&self) -> impl Stream<Item = D> + Send + use<D> {
        let mut rx = self.store.subscribe();

        stream! {
            let current = D::read(&rx.borrow_and_update());
            yield current;

            while rx.changed().await.is_ok() {
                let next = D::read(&rx.borrow_and_update());
                yield next;
            }
        }
    }

    /// Apply the changes recorded by `f` as one batch.
    ///
    /// Returns whether the store changed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be persisted.
    pub async fn update<F>(&self, f: F) -> Result<bool, StoreError>
    where
        F: FnOnce(&mut PreferencesEdit),
    {
        let mut edit = PreferencesEdit::new();
        f(&mut edit);
        self.store.edit(&edit).await
    }

    /// Store every field of `value`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be persisted.
    pub async fn set(&self, value: &D) -> Result<bool, StoreError> {
        self.update(|edit| value.write(edit)).await
    }

    /// Remove every key of the domain so that reads return the defaults.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be persisted.
    #[instrument(skip(self), fields(store = D::STORE_NAME))]
    pub async fn reset(&self) -> Result<bool, StoreError> {
        let changed = self
            .update(|edit| {
                for key in D::KEYS {
                    edit.remove(*key);
                }
            })
            .await?;
        if changed {
            info!("Settings reset to defaults");
        }
        Ok(changed)
    }

    /// Set one key from its textual form.
    ///
    /// The value is parsed the same way a read would parse it and stored in
    /// canonical form, so `" HUGE"` is stored as `"HUGE"`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UnknownKey` if the domain has no such key,
    /// `StoreError::InvalidValue` if the value cannot be parsed, or a
    /// persistence error.
    pub async fn set_raw(&self, key: &str, value: &str) -> Result<bool, StoreError> {
        if !D::KEYS.contains(&key) {
            return Err(StoreError::UnknownKey {
                store: D::STORE_NAME.to_owned(),
                key: key.to_owned(),
            });
        }

        let mut values = self.store.snapshot().into_map();
        values.insert(key.to_owned(), value.to_owned());
        let canonical = field_value(&D::read(&Preferences::new(values)), key);

        // A value that did not parse reads back as the field default.
        let reads_as_default = canonical == field_value(&D::default(), key);
        if reads_as_default && canonical.as_deref() != Some(value.trim()) {
            return Err(StoreError::InvalidValue {
                store: D::STORE_NAME.to_owned(),
                key: key.to_owned(),
                value: value.to_owned(),
            });
        }

        let canonical = canonical.unwrap_or_else(|| value.to_owned());
        self.update(|edit| {
            edit.set_raw(key, canonical);
        })
        .await
    }
}

/// The encoded value `domain` writes for `key`.
fn field_value<D: ConfigDomain>(domain: &D, key: &str) -> Option<String> {
    let mut edit = PreferencesEdit::new();
    domain.write(&mut edit);
    edit.ops().iter().find_map(|op| match op {
        EditOp::Set(name, value) if name == key => Some(value.clone()),
        _ => None,
    })
}

/// One settings store per domain.
#[derive(Debug, Clone)]
pub struct ConfigStores {
    pub general: ConfigStore<GeneralConfig>,
    pub shopping_lists: ConfigStore<ShoppingListsConfig>,
    pub products: ConfigStore<ProductsConfig>,
    pub autocompletes: ConfigStore<AutocompletesConfig>,
    pub suggestions: ConfigStore<SuggestionsConfig>,
    pub product_widget: ConfigStore<ProductWidgetConfig>,
    pub user: ConfigStore<UserConfig>,
}

impl ConfigStores {
    /// Open every domain store under `dir`.
    ///
    /// # Errors
    ///
    /// Returns the first `StoreError` raised while opening a store.
    #[instrument(skip(dir), fields(dir = %dir.display()))]
    pub async fn open(dir: &Path) -> Result<Self, StoreError> {
        Ok(Self {
            general: ConfigStore::open(dir).await?,
            shopping_lists: ConfigStore::open(dir).await?,
            products: ConfigStore::open(dir).await?,
            autocompletes: ConfigStore::open(dir).await?,
            suggestions: ConfigStore::open(dir).await?,
            product_widget: ConfigStore::open(dir).await?,
            user: ConfigStore::open(dir).await?,
        })
    }

    /// Empty in-memory stores.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            general: ConfigStore::in_memory(),
            shopping_lists: ConfigStore::in_memory(),
            products: ConfigStore::in_memory(),
            autocompletes: ConfigStore::in_memory(),
            suggestions: ConfigStore::in_memory(),
            product_widget: ConfigStore::in_memory(),
            user: ConfigStore::in_memory(),
        }
    }
}
