//! Settings commands.
//!
//! # Usage
//!
//! ```bash
//! # Show the general settings (stored values and defaults)
//! shoplist settings show general
//!
//! # Change one setting
//! shoplist settings set shopping-lists sort_by NAME
//!
//! # Restore the defaults of a domain
//! shoplist settings reset products
//! ```

use clap::ValueEnum;
use shoplist_core::ConfigDomain;
use shoplist_core::prefs::{EditOp, PreferencesEdit};
use shoplist_storage::{ConfigStore, ConfigStores, StoreError};

use crate::config::CliConfig;

/// Settings domain selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Domain {
    General,
    ShoppingLists,
    Products,
    Autocompletes,
    Suggestions,
    ProductWidget,
    User,
}

/// Run `$body` with `$store` bound to the selected domain's store.
macro_rules! with_store {
    ($stores:expr, $domain:expr, |$store:ident| $body:expr) => {
        match $domain {
            Domain::General => {
                let $store = &$stores.general;
                $body
            }
            Domain::ShoppingLists => {
                let $store = &$stores.shopping_lists;
                $body
            }
            Domain::Products => {
                let $store = &$stores.products;
                $body
            }
            Domain::Autocompletes => {
                let $store = &$stores.autocompletes;
                $body
            }
            Domain::Suggestions => {
                let $store = &$stores.suggestions;
                $body
            }
            Domain::ProductWidget => {
                let $store = &$stores.product_widget;
                $body
            }
            Domain::User => {
                let $store = &$stores.user;
                $body
            }
        }
    };
}

/// Log every key of a domain with its effective value.
pub async fn show(config: &CliConfig, domain: Domain) -> Result<(), StoreError> {
    let stores = ConfigStores::open(&config.settings_dir()).await?;
    with_store!(stores, domain, |store| show_domain(store));
    Ok(())
}

/// Set one key of a domain.
pub async fn set(
    config: &CliConfig,
    domain: Domain,
    key: &str,
    value: &str,
) -> Result<(), StoreError> {
    let stores = ConfigStores::open(&config.settings_dir()).await?;
    let changed = with_store!(stores, domain, |store| store.set_raw(key, value).await?);

    if changed {
        tracing::info!("Updated {key}");
    } else {
        tracing::info!("{key} already has that value");
    }
    Ok(())
}

/// Remove every stored key of a domain.
pub async fn reset(config: &CliConfig, domain: Domain) -> Result<(), StoreError> {
    let stores = ConfigStores::open(&config.settings_dir()).await?;
    let changed = with_store!(stores, domain, |store| store.reset().await?);

    if changed {
        tracing::info!("Settings restored to defaults");
    } else {
        tracing::info!("Settings already at defaults");
    }
    Ok(())
}

fn show_domain<D: ConfigDomain>(store: &ConfigStore<D>) {
    let stored = store.raw();
    let mut edit = PreferencesEdit::new();
    store.get().write(&mut edit);

    tracing::info!("[{}]", D::STORE_NAME);
    for op in edit.ops() {
        if let EditOp::Set(key, value) = op {
            if stored.raw(key).is_some() {
                tracing::info!("  {key} = {value:?}");
            } else {
                tracing::info!("  {key} = {value:?} (default)");
            }
        }
    }
}
