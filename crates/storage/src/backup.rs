//! Backup export and import.
//!
//! A backup holds every record from the repository plus the general
//! settings. Exports go to a timestamped file in the backup directory;
//! imports replace the repository contents and merge the settings into the
//! general store.

use std::path::{Path, PathBuf};

use chrono::{DateTime as ChronoDateTime, Local, Utc};
use shoplist_core::backup::{self, BackupData, CodecError, PreferencesRecord};
use shoplist_core::config::user::keys as user_keys;
use shoplist_core::config::GeneralConfig;
use shoplist_core::types::DateTime;
use thiserror::Error;
use tracing::{info, instrument};

use crate::config_store::ConfigStores;
use crate::error::{RepositoryError, StoreError};
use crate::repository::{RecordRepository, RecordSet};

/// File name prefix of exported backups.
pub const BACKUP_FILE_PREFIX: &str = "ShoppingList_";

/// File extension of exported backups.
pub const BACKUP_FILE_EXTENSION: &str = "backup";

/// Errors raised while exporting or importing a backup.
#[derive(Debug, Error)]
pub enum BackupError {
    #[error("failed to read backup {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write backup {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Name of a backup exported at `at`, e.g. `ShoppingList_20240305_140700.backup`.
#[must_use]
pub fn backup_file_name(at: ChronoDateTime<Local>) -> String {
    format!(
        "{BACKUP_FILE_PREFIX}{}.{BACKUP_FILE_EXTENSION}",
        at.format("%Y%m%d_%H%M%S")
    )
}

/// Exports and imports backups between a repository and the settings stores.
#[derive(Debug)]
pub struct BackupService<R> {
    repository: R,
    stores: ConfigStores,
    backup_dir: PathBuf,
}

impl<R: RecordRepository> BackupService<R> {
    #[must_use]
    pub fn new(repository: R, stores: ConfigStores, backup_dir: impl Into<PathBuf>) -> Self {
        Self {
            repository,
            stores,
            backup_dir: backup_dir.into(),
        }
    }

    #[must_use]
    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    #[must_use]
    pub const fn stores(&self) -> &ConfigStores {
        &self.stores
    }

    /// Gather the current records and general settings.
    ///
    /// # Errors
    ///
    /// Returns `BackupError::Repository` if the records cannot be loaded.
    pub async fn collect(&self) -> Result<BackupData, BackupError> {
        let records = self.repository.load_all().await?;
        let preferences = PreferencesRecord::from(&self.stores.general.get());
        Ok(records.into_backup(preferences))
    }

    /// Export a new backup into the backup directory and return its path.
    ///
    /// The directory is created if missing. On success the export time is
    /// recorded in the user store.
    ///
    /// # Errors
    ///
    /// Returns `BackupError` if the records cannot be loaded or encoded, the
    /// file cannot be written, or the user store cannot be updated.
    #[instrument(skip(self), fields(dir = %self.backup_dir.display()))]
    pub async fn export(&self) -> Result<PathBuf, BackupError> {
        let now = Local::now();

        tokio::fs::create_dir_all(&self.backup_dir)
            .await
            .map_err(|source| BackupError::Write {
                path: self.backup_dir.clone(),
                source,
            })?;

        let path = self.backup_dir.join(backup_file_name(now));
        self.export_to(&path).await?;

        let exported_at = DateTime::from(now.with_timezone(&Utc));
        self.stores
            .user
            .update(|edit| {
                edit.set(user_keys::LAST_BACKUP, &exported_at);
            })
            .await?;

        Ok(path)
    }

    /// Write a backup to `path`, returning what was written.
    ///
    /// # Errors
    ///
    /// Returns `BackupError` if the records cannot be loaded or encoded, or
    /// the file cannot be written.
    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub async fn export_to(&self, path: &Path) -> Result<BackupData, BackupError> {
        let data = self.collect().await?;
        let text = backup::encode(&data)?;

        tokio::fs::write(path, text)
            .await
            .map_err(|source| BackupError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        info!(
            shoppings = data.shoppings.len(),
            products = data.products.len(),
            autocompletes = data.autocompletes.len(),
            "Backup exported"
        );
        Ok(data)
    }

    /// Read and decode a backup without applying it.
    ///
    /// # Errors
    ///
    /// Returns `BackupError::Read` if the file cannot be read, or
    /// `BackupError::Codec` if any line is malformed.
    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub async fn inspect(&self, path: &Path) -> Result<BackupData, BackupError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| BackupError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(backup::decode(&text)?)
    }

    /// Restore a backup.
    ///
    /// The file is decoded completely before anything is changed, so a
    /// malformed backup leaves the repository and stores untouched. The
    /// repository contents are replaced; the settings are merged into the
    /// general store.
    ///
    /// # Errors
    ///
    /// Returns `BackupError` if the file cannot be read or decoded, or the
    /// repository or general store cannot be written. The repository is
    /// written first: a `BackupError::Store` means the records have already
    /// been replaced while the settings keep their previous values.
    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub async fn import(&self, path: &Path) -> Result<BackupData, BackupError> {
        let data = self.inspect(path).await?;

        self.repository
            .replace_all(RecordSet::from(data.clone()))
            .await?;
        self.stores
            .general
            .set(&GeneralConfig::from(&data.preferences))
            .await?;

        info!(records = data.record_count(), "Backup imported");
        Ok(data)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;
    use shoplist_core::backup::{ProductRecord, ShoppingRecord};
    use shoplist_core::types::NightTheme;

    use super::*;
    use crate::repository::MemoryRecordRepository;

    fn records() -> RecordSet {
        RecordSet {
            shoppings: vec![ShoppingRecord {
                id: "s1".to_owned(),
                name: "Groceries".to_owned(),
                ..ShoppingRecord::default()
            }],
            products: vec![ProductRecord {
                id: "p1".to_owned(),
                directory: "s1".to_owned(),
                name: "Milk".to_owned(),
                price: "1.25".to_owned(),
                ..ProductRecord::default()
            }],
            autocompletes: Vec::new(),
        }
    }

    #[test]
    fn test_backup_file_name() {
        let at = Local.with_ymd_and_hms(2024, 3, 5, 14, 7, 0).unwrap();
        assert_eq!(backup_file_name(at), "ShoppingList_20240305_140700.backup");
    }

    #[tokio::test]
    async fn test_export_writes_file_and_records_time() {
        let dir = tempfile::tempdir().unwrap();
        let backup_dir = dir.path().join("Documents/ShoppingList");
        let service = BackupService::new(
            MemoryRecordRepository::new(records()),
            ConfigStores::in_memory(),
            &backup_dir,
        );

        let path = service.export().await.unwrap();
        assert!(path.starts_with(&backup_dir));
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with(BACKUP_FILE_PREFIX));
        assert!(name.ends_with(".backup"));

        let text = tokio::fs::read_to_string(&path).await.unwrap();
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("shopping:"));
        assert!(lines[1].starts_with("product:"));
        assert!(lines[2].starts_with("preferences:"));

        assert!(!service.stores().user.get().last_backup.is_unset());
    }

    #[tokio::test]
    async fn test_import_replaces_records_and_merges_settings() {
        let dir = tempfile::tempdir().unwrap();
        let source = BackupService::new(
            MemoryRecordRepository::new(records()),
            ConfigStores::in_memory(),
            dir.path(),
        );
        let mut general = GeneralConfig::default();
        general.night_theme = NightTheme::Enabled;
        general.currency = "€".to_owned();
        source.stores().general.set(&general).await.unwrap();
        let path = dir.path().join("manual.backup");
        source.export_to(&path).await.unwrap();

        let target = BackupService::new(
            MemoryRecordRepository::default(),
            ConfigStores::in_memory(),
            dir.path(),
        );
        let data = target.import(&path).await.unwrap();

        assert_eq!(data.record_count(), 2);
        assert_eq!(target.repository().load_all().await.unwrap(), records());
        assert_eq!(target.stores().general.get(), general);
    }

    #[tokio::test]
    async fn test_malformed_import_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.backup");
        tokio::fs::write(&path, "shopping:{\"id\":\"s9\"}\nproduct:{oops")
            .await
            .unwrap();

        let service = BackupService::new(
            MemoryRecordRepository::new(records()),
            ConfigStores::in_memory(),
            dir.path(),
        );
        let err = service.import(&path).await.unwrap_err();

        assert!(matches!(err, BackupError::Codec(_)));
        assert_eq!(service.repository().load_all().await.unwrap(), records());
        assert!(service.stores().general.raw().is_empty());
    }

    #[tokio::test]
    async fn test_inspect_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let service = BackupService::new(
            MemoryRecordRepository::default(),
            ConfigStores::in_memory(),
            dir.path(),
        );
        let err = service
            .inspect(&dir.path().join("absent.backup"))
            .await
            .unwrap_err();
        assert!(matches!(err, BackupError::Read { .. }));
    }

    #[tokio::test]
    async fn test_settings_failure_after_records_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("groceries.backup");
        let source = BackupService::new(
            MemoryRecordRepository::new(records()),
            ConfigStores::in_memory(),
            dir.path(),
        );
        let mut general = GeneralConfig::default();
        general.currency = "€".to_owned();
        source.stores().general.set(&general).await.unwrap();
        source.export_to(&path).await.unwrap();

        let settings_dir = dir.path().join("settings");
        let target = BackupService::new(
            MemoryRecordRepository::default(),
            ConfigStores::open(&settings_dir).await.unwrap(),
            dir.path(),
        );
        tokio::fs::write(&settings_dir, "not a directory").await.unwrap();

        let err = target.import(&path).await.unwrap_err();
        assert!(matches!(err, BackupError::Store(_)));
        assert_eq!(target.repository().load_all().await.unwrap(), records());
        assert_eq!(target.stores().general.get(), GeneralConfig::default());
    }
}
