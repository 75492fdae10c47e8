//! Record repository.
//!
//! The repository owns the shopping lists, products and autocompletion
//! entries. Backups read everything out of it and restore by replacing its
//! contents wholesale.

use std::future::Future;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shoplist_core::backup::{
    AutocompleteRecord, BackupData, PreferencesRecord, ProductRecord, ShoppingRecord,
};
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::error::RepositoryError;
use crate::fs;

/// Every record held by a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordSet {
    pub shoppings: Vec<ShoppingRecord>,
    pub products: Vec<ProductRecord>,
    pub autocompletes: Vec<AutocompleteRecord>,
}

impl RecordSet {
    #[must_use]
    pub fn len(&self) -> usize {
        self.shoppings.len() + self.products.len() + self.autocompletes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pair the records with a preferences record.
    #[must_use]
    pub fn into_backup(self, preferences: PreferencesRecord) -> BackupData {
        BackupData {
            shoppings: self.shoppings,
            products: self.products,
            autocompletes: self.autocompletes,
            preferences,
        }
    }
}

impl From<BackupData> for RecordSet {
    fn from(data: BackupData) -> Self {
        Self {
            shoppings: data.shoppings,
            products: data.products,
            autocompletes: data.autocompletes,
        }
    }
}

/// Storage for shopping, product and autocomplete records.
pub trait RecordRepository: Send + Sync {
    /// Load every record.
    fn load_all(&self) -> impl Future<Output = Result<RecordSet, RepositoryError>> + Send;

    /// Replace every record with `records`.
    fn replace_all(
        &self,
        records: RecordSet,
    ) -> impl Future<Output = Result<(), RepositoryError>> + Send;
}

/// Repository kept in a single JSON document.
#[derive(Debug, Clone)]
pub struct JsonRecordRepository {
    path: PathBuf,
}

impl JsonRecordRepository {
    /// Create a repository backed by `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordRepository for JsonRecordRepository {
    /// # Errors
    ///
    /// Returns `RepositoryError::Io` if the file cannot be read.
    /// Returns `RepositoryError::DataCorruption` if it is not a valid record set.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load_all(&self) -> Result<RecordSet, RepositoryError> {
        let contents = fs::read_optional(&self.path)
            .await
            .map_err(|source| RepositoryError::Io {
                path: self.path.clone(),
                source,
            })?;

        let Some(contents) = contents else {
            debug!("No records file yet");
            return Ok(RecordSet::default());
        };

        serde_json::from_str(&contents).map_err(|source| RepositoryError::DataCorruption {
            path: self.path.clone(),
            source,
        })
    }

    #[instrument(skip(self, records), fields(path = %self.path.display(), count = records.len()))]
    async fn replace_all(&self, records: RecordSet) -> Result<(), RepositoryError> {
        let json = serde_json::to_vec_pretty(&records).map_err(RepositoryError::Serialize)?;

        fs::write_replace(&self.path, &json)
            .await
            .map_err(|source| RepositoryError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

/// Repository that keeps records in memory.
#[derive(Debug, Default)]
pub struct MemoryRecordRepository {
    records: RwLock<RecordSet>,
}

impl MemoryRecordRepository {
    #[must_use]
    pub fn new(records: RecordSet) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl RecordRepository for MemoryRecordRepository {
    async fn load_all(&self) -> Result<RecordSet, RepositoryError> {
        Ok(self.records.read().await.clone())
    }

    async fn replace_all(&self, records: RecordSet) -> Result<(), RepositoryError> {
        *self.records.write().await = records;
        Ok(())
    }
}
