//! Core value types for Shoplist.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod datetime;
pub mod decimal;
pub mod id;
pub mod money;
pub mod quantity;
pub mod settings;

pub use datetime::DateTime;
pub use id::*;
pub use money::{Currency, Money};
pub use quantity::Quantity;
pub use settings::*;
