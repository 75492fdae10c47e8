//! Backup records and the backup file codec.
//!
//! See [`codec`] for the file format.

pub mod codec;
pub mod record;

pub use codec::{CodecError, decode, encode};
pub use record::{
    AutocompleteRecord, BackupData, BackupRecord, PreferencesRecord, ProductRecord,
    RecordCategory, ShoppingRecord,
};
