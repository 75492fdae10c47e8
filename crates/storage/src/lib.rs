//! Shoplist Storage - Settings stores, records and backups.
//!
//! # Modules
//!
//! - [`preference_store`] - Named key-value stores, in memory or one JSON file each
//! - [`config_store`] - Typed, observable settings stores per domain
//! - [`repository`] - Record repository (shopping lists, products, autocompletes)
//! - [`backup`] - Backup export, import and inspection
//!
//! # Example
//!
//! ```no_run
//! use shoplist_storage::{BackupService, ConfigStores, JsonRecordRepository};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let data_dir = std::path::Path::new("shoplist-data");
//! let stores = ConfigStores::open(&data_dir.join("settings")).await?;
//! let repository = JsonRecordRepository::new(data_dir.join("records.json"));
//!
//! let service = BackupService::new(repository, stores, data_dir.join("backups"));
//! let path = service.export().await?;
//! println!("exported {}", path.display());
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod backup;
pub mod config_store;
pub mod error;
mod fs;
pub mod preference_store;
pub mod repository;

pub use backup::{BackupError, BackupService, backup_file_name};
pub use config_store::{ConfigStore, ConfigStores};
pub use error::{RepositoryError, StoreError};
pub use preference_store::PreferenceStore;
pub use repository::{JsonRecordRepository, MemoryRecordRepository, RecordRepository, RecordSet};
