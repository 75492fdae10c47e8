//! Named key-value preference stores.
//!
//! A [`PreferenceStore`] holds a flat `key -> string` map, either in memory
//! or persisted as `<dir>/<name>.json`. Every store is independent: edits to
//! different stores never contend.
//!
//! Edits are applied as atomic batches. A batch is merged into the current
//! map under the store's write lock, persisted, and only then published to
//! readers and subscribers. If persisting fails the published state does
//! not change.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use shoplist_core::prefs::{Preferences, PreferencesEdit};
use tokio::sync::{Mutex, watch};
use tracing::{debug, instrument, warn};

use crate::error::StoreError;
use crate::fs;

/// Handle to one named preference store. Clones share the same store.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    name: String,
    path: Option<PathBuf>,
    write_lock: Mutex<()>,
    tx: watch::Sender<Preferences>,
}

impl PreferenceStore {
    /// Create an empty store that lives only in memory.
    #[must_use]
    pub fn in_memory(name: impl Into<String>) -> Self {
        Self::with_state(name.into(), None, Preferences::default())
    }

    /// Open the store `name` persisted under `dir`.
    ///
    /// A missing file yields an empty store. A file that is not a JSON
    /// object of strings is logged and treated as empty; it is overwritten
    /// by the next edit.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file exists but cannot be read.
    #[instrument(skip(dir), fields(dir = %dir.display()))]
    pub async fn open(dir: &Path, name: &str) -> Result<Self, StoreError> {
        let path = dir.join(format!("{name}.json"));

        let contents = fs::read_optional(&path)
            .await
            .map_err(|source| StoreError::Io {
                store: name.to_owned(),
                path: path.clone(),
                source,
            })?;

        let values = match contents {
            None => BTreeMap::new(),
            Some(text) => serde_json::from_str::<BTreeMap<String, String>>(&text)
                .unwrap_or_else(|e| {
                    warn!(store = name, error = %e, "Ignoring unreadable preference file");
                    BTreeMap::new()
                }),
        };

        debug!(store = name, keys = values.len(), "Opened preference store");
        Ok(Self::with_state(
            name.to_owned(),
            Some(path),
            Preferences::new(values),
        ))
    }

    fn with_state(name: String, path: Option<PathBuf>, initial: Preferences) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            inner: Arc::new(Inner {
                name,
                path,
                write_lock: Mutex::new(()),
                tx,
            }),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Backing file, `None` for in-memory stores.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.inner.path.as_deref()
    }

    /// Current contents.
    #[must_use]
    pub fn snapshot(&self) -> Preferences {
        self.inner.tx.borrow().clone()
    }

    /// Receiver notified after every change. Every subscriber sees the same
    /// sequence of snapshots.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Preferences> {
        self.inner.tx.subscribe()
    }

    /// Merge `edit` into the store as one batch.
    ///
    /// Returns whether anything changed. Unchanged batches are neither
    /// persisted nor published.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store file cannot be written. The store
    /// keeps its previous contents in that case.
    #[instrument(skip(self, edit), fields(store = %self.inner.name, ops = edit.ops().len()))]
    pub async fn edit(&self, edit: &PreferencesEdit) -> Result<bool, StoreError> {
        let _guard = self.inner.write_lock.lock().await;

        let mut values = self.inner.tx.borrow().as_map().clone();
        if !edit.apply(&mut values) {
            return Ok(false);
        }

        if let Some(path) = &self.inner.path {
            self.persist(path, &values).await?;
        }

        self.inner.tx.send_replace(Preferences::new(values));
        debug!("Preference store updated");
        Ok(true)
    }

    async fn persist(
        &self,
        path: &Path,
        values: &BTreeMap<String, String>,
    ) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(values).map_err(|source| StoreError::Serialize {
            store: self.inner.name.clone(),
            source,
        })?;

        fs::write_replace(path, &json)
            .await
            .map_err(|source| StoreError::Io {
                store: self.inner.name.clone(),
                path: path.to_path_buf(),
                source,
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn edit(pairs: &[(&str, &str)]) -> PreferencesEdit {
        let mut edit = PreferencesEdit::new();
        for (k, v) in pairs {
            edit.set_raw(*k, *v);
        }
        edit
    }

    #[tokio::test]
    async fn test_in_memory_edit_merges() {
        let store = PreferenceStore::in_memory("general");
        store.edit(&edit(&[("a", "1"), ("b", "2")])).await.unwrap();
        store.edit(&edit(&[("b", "3")])).await.unwrap();

        let snapshot = store.snapshot();
        assert_eq!(snapshot.raw("a"), Some("1"));
        assert_eq!(snapshot.raw("b"), Some("3"));
        assert!(store.path().is_none());
    }

    #[tokio::test]
    async fn test_unchanged_edit_not_published() {
        let store = PreferenceStore::in_memory("general");
        store.edit(&edit(&[("a", "1")])).await.unwrap();

        let rx = store.subscribe();
        assert!(!store.edit(&edit(&[("a", "1")])).await.unwrap());
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_file_store_persists() {
        let dir = tempfile::tempdir().unwrap();

        let store = PreferenceStore::open(dir.path(), "user").await.unwrap();
        assert!(store.snapshot().is_empty());
        store.edit(&edit(&[("opened_count", "4")])).await.unwrap();

        let reopened = PreferenceStore::open(dir.path(), "user").await.unwrap();
        assert_eq!(reopened.snapshot().raw("opened_count"), Some("4"));
        assert_eq!(reopened.path(), Some(dir.path().join("user.json").as_path()));
    }

    #[tokio::test]
    async fn test_corrupt_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("general.json"), "not json")
            .await
            .unwrap();

        let store = PreferenceStore::open(dir.path(), "general").await.unwrap();
        assert!(store.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_failed_persist_keeps_state() {
        let dir = tempfile::tempdir().unwrap();
        let store_dir = dir.path().join("prefs");
        let store = PreferenceStore::open(&store_dir, "general").await.unwrap();

        // A regular file where the store directory should be makes every write fail.
        tokio::fs::write(&store_dir, "not a directory").await.unwrap();

        assert!(store.edit(&edit(&[("a", "1")])).await.is_err());
        assert!(store.snapshot().is_empty());
    }
}
