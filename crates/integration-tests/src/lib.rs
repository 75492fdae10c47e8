//! Integration tests for Shoplist.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shoplist-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `backup_roundtrip` - Backup files written by the storage crate and read back
//! - `config_stores` - Settings stores on disk, observation and defaults
