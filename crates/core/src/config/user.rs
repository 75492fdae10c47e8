//! Per-installation user and session state.
//!
//! Unlike the other domains these values are written by the application
//! itself (launch counters, last backup time) rather than by the user.

use super::ConfigDomain;
use crate::prefs::{Preferences, PreferencesEdit};
use crate::types::DateTime;

pub mod keys {
    use crate::prefs::PrefKey;
    use crate::types::DateTime;

    pub const FIRST_OPENED: PrefKey<DateTime> = PrefKey::new("first_opened");
    pub const OPENED_COUNT: PrefKey<i64> = PrefKey::new("opened_count");
    pub const LAST_VERSION_CODE: PrefKey<i32> = PrefKey::new("last_version_code");
    pub const REVIEW_REQUESTED: PrefKey<bool> = PrefKey::new("review_requested");
    pub const LAST_BACKUP: PrefKey<DateTime> = PrefKey::new("last_backup");
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserConfig {
    /// Unset until the first launch is recorded.
    pub first_opened: DateTime,
    pub opened_count: i64,
    pub last_version_code: i32,
    pub review_requested: bool,
    /// Unset until the first successful export.
    pub last_backup: DateTime,
}

impl ConfigDomain for UserConfig {
    const STORE_NAME: &'static str = "user";

    const KEYS: &'static [&'static str] = &[
        keys::FIRST_OPENED.name(),
        keys::OPENED_COUNT.name(),
        keys::LAST_VERSION_CODE.name(),
        keys::REVIEW_REQUESTED.name(),
        keys::LAST_BACKUP.name(),
    ];

    fn read(prefs: &Preferences) -> Self {
        let d = Self::default();
        Self {
            first_opened: prefs.get_or(keys::FIRST_OPENED, d.first_opened),
            opened_count: prefs.get_or(keys::OPENED_COUNT, d.opened_count),
            last_version_code: prefs.get_or(keys::LAST_VERSION_CODE, d.last_version_code),
            review_requested: prefs.get_or(keys::REVIEW_REQUESTED, d.review_requested),
            last_backup: prefs.get_or(keys::LAST_BACKUP, d.last_backup),
        }
    }

    fn write(&self, edit: &mut PreferencesEdit) {
        edit.set(keys::FIRST_OPENED, &self.first_opened)
            .set(keys::OPENED_COUNT, &self.opened_count)
            .set(keys::LAST_VERSION_CODE, &self.last_version_code)
            .set(keys::REVIEW_REQUESTED, &self.review_requested)
            .set(keys::LAST_BACKUP, &self.last_backup);
    }
}
