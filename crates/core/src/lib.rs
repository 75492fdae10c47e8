//! Shoplist Core - Shared types library.
//!
//! This crate provides the types used across all Shoplist components:
//! - `storage` - Preference stores, record repository and backup service
//! - `cli` - Command-line tools for backups and settings
//!
//! # Architecture
//!
//! The core crate contains only types, pure conversions and the backup
//! codec - no file access, no async runtime. This keeps it lightweight and
//! allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, money, quantities, timestamps and setting enums
//! - [`models`] - Shopping lists, products and autocompletion entries
//! - [`prefs`] - Typed keys and codecs over string preference snapshots
//! - [`config`] - Settings domains with per-field defaults
//! - [`backup`] - Backup records and the line-oriented backup codec

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod backup;
pub mod config;
pub mod models;
pub mod prefs;
pub mod types;

pub use config::ConfigDomain;
pub use types::*;

// Used by `define_id!` expansions in other crates.
#[doc(hidden)]
pub use serde;
#[doc(hidden)]
pub use uuid;
