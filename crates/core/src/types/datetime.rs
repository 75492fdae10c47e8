//! Timestamps stored as epoch milliseconds.

use core::fmt::{self, Write as _};

use chrono::format::{Item, StrftimeItems};
use chrono::{Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Default date pattern (chrono `strftime` syntax).
pub const DEFAULT_DATE_FORMAT: &str = "%d %b %Y";
/// Default time pattern (chrono `strftime` syntax).
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// A point in time, stored as milliseconds since the Unix epoch.
///
/// Records keep timestamps as the decimal string of this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateTime(i64);

impl DateTime {
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Current wall-clock time.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    #[must_use]
    pub const fn millis(self) -> i64 {
        self.0
    }

    /// Zero means "never set".
    #[must_use]
    pub const fn is_unset(self) -> bool {
        self.0 == 0
    }

    /// Convert to a chrono UTC timestamp, if in range.
    #[must_use]
    pub fn to_utc(self) -> Option<chrono::DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.0).single()
    }

    /// Format in UTC using a chrono pattern.
    ///
    /// Empty if the timestamp is out of range or the pattern is invalid.
    #[must_use]
    pub fn format_utc(self, pattern: &str) -> String {
        self.to_utc()
            .map(|dt| render(&dt, pattern))
            .unwrap_or_default()
    }

    /// Format in the local timezone using a chrono pattern.
    ///
    /// Empty if the timestamp is out of range or the pattern is invalid.
    #[must_use]
    pub fn format_local(self, pattern: &str) -> String {
        Local
            .timestamp_millis_opt(self.0)
            .single()
            .map(|dt| render(&dt, pattern))
            .unwrap_or_default()
    }
}

/// Whether `pattern` is a chrono `strftime` pattern every timestamp can be
/// formatted with.
#[must_use]
pub fn is_valid_pattern(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

fn render<Tz>(dt: &chrono::DateTime<Tz>, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    if !is_valid_pattern(pattern) {
        return String::new();
    }
    let mut out = String::new();
    if write!(out, "{}", dt.format(pattern)).is_err() {
        out.clear();
    }
    out
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<chrono::DateTime<Utc>> for DateTime {
    fn from(dt: chrono::DateTime<Utc>) -> Self {
        Self(dt.timestamp_millis())
    }
}
