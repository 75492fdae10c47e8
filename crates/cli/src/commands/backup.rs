//! Backup commands.
//!
//! # Usage
//!
//! ```bash
//! # Export a timestamped backup into the backup directory
//! shoplist backup export
//!
//! # Restore a backup
//! shoplist backup import ShoppingList_20240305_140700.backup
//!
//! # Show what a backup contains without applying it
//! shoplist backup inspect ShoppingList_20240305_140700.backup
//! ```

use std::path::Path;

use shoplist_core::backup::BackupData;
use shoplist_core::config::GeneralConfig;
use shoplist_core::models::{Product, Shopping};
use shoplist_storage::{BackupError, BackupService, ConfigStores, JsonRecordRepository};

use crate::config::CliConfig;

/// Open the stores and repository under the configured data directory.
async fn service(
    config: &CliConfig,
) -> Result<BackupService<JsonRecordRepository>, BackupError> {
    let stores = ConfigStores::open(&config.settings_dir()).await?;
    let repository = JsonRecordRepository::new(config.records_path());
    Ok(BackupService::new(repository, stores, &config.backup_dir))
}

/// Export a new backup.
pub async fn export(config: &CliConfig) -> Result<(), BackupError> {
    let service = service(config).await?;

    tracing::info!("Exporting backup...");
    let path = service.export().await?;

    tracing::info!("Backup written to {}", path.display());
    Ok(())
}

/// Restore a backup, replacing every shopping list, product and
/// autocompletion entry.
pub async fn import(config: &CliConfig, path: &Path) -> Result<(), BackupError> {
    let service = service(config).await?;

    tracing::info!("Importing backup from {}...", path.display());
    let data = service.import(path).await?;

    tracing::info!(
        "Backup restored: {} shopping lists, {} products, {} autocompletes",
        data.shoppings.len(),
        data.products.len(),
        data.autocompletes.len()
    );
    Ok(())
}

/// Decode a backup and summarize it.
pub async fn inspect(config: &CliConfig, path: &Path) -> Result<(), BackupError> {
    let service = service(config).await?;
    let data = service.inspect(path).await?;
    summarize(&data);
    Ok(())
}

fn summarize(data: &BackupData) {
    let general = GeneralConfig::from(&data.preferences);
    let currency = general.currency();

    tracing::info!(
        "{} shopping lists, {} products, {} autocompletes",
        data.shoppings.len(),
        data.products.len(),
        data.autocompletes.len()
    );

    let products: Vec<Product> = data
        .products
        .iter()
        .map(|record| Product::from_record(record, &currency))
        .collect();

    for record in &data.shoppings {
        let shopping = Shopping::from_record(record, &currency);
        let count = products
            .iter()
            .filter(|p| p.shopping_id == shopping.id)
            .count();
        tracing::info!(
            "  {} [{}] {} products, total {}, created {}",
            shopping.name,
            shopping.location,
            count,
            shopping
                .calculate_total(&products)
                .format(general.money_fraction_digits),
            shopping.created.format_local(&general.date_format)
        );
    }

    tracing::info!(
        "Preferences: theme {}, font {}, currency {}",
        general.night_theme,
        general.font_size,
        general.currency
    );
}
