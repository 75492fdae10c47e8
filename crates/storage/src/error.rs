//! Error types for preference stores and the record repository.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a preference store.
///
/// Malformed stored values are not errors; they are resolved by default
/// substitution when a domain is read.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the store file failed.
    #[error("preference store {store}: I/O error on {}: {source}", path.display())]
    Io {
        store: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store contents could not be serialized.
    #[error("preference store {store}: serialization failed: {source}")]
    Serialize {
        store: String,
        #[source]
        source: serde_json::Error,
    },

    /// A raw write named a key the domain does not define.
    #[error("unknown key {key} for {store} settings")]
    UnknownKey { store: String, key: String },

    /// A raw write carried a value the key's type cannot hold.
    #[error("invalid value {value:?} for {store}.{key}")]
    InvalidValue {
        store: String,
        key: String,
        value: String,
    },
}

/// Errors raised by the record repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Reading or writing the records file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The records could not be serialized.
    #[error("failed to serialize records: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The records file is not valid JSON.
    #[error("corrupt records file {}: {source}", path.display())]
    DataCorruption {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
