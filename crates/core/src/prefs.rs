//! Typed access to string-valued preference snapshots.
//!
//! Preference stores hold a flat `key -> string` map. A [`PrefKey`] names
//! one entry and fixes its Rust type; [`PrefValue`] is the per-type codec.
//! Reads never fail: a missing or malformed value is reported as `None` and
//! callers substitute the field default.

use std::collections::BTreeMap;
use std::marker::PhantomData;

use rust_decimal::Decimal;

use crate::types::decimal;
use crate::types::{
    AfterAddProduct, DateTime, DisplayCompleted, FontSize, LockProductElement, NightTheme,
    ShoppingLocation, SortBy, WidgetTheme,
};

/// String codec for a preference value.
pub trait PrefValue: Sized {
    /// Render the value as stored.
    fn encode(&self) -> String;

    /// Parse a stored value, `None` if malformed.
    fn decode(raw: &str) -> Option<Self>;
}

macro_rules! impl_pref_value_from_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl PrefValue for $ty {
                fn encode(&self) -> String {
                    self.to_string()
                }

                fn decode(raw: &str) -> Option<Self> {
                    raw.trim().parse().ok()
                }
            }
        )+
    };
}

impl_pref_value_from_str!(
    bool,
    i32,
    i64,
    u32,
    NightTheme,
    FontSize,
    SortBy,
    DisplayCompleted,
    LockProductElement,
    AfterAddProduct,
    WidgetTheme,
    ShoppingLocation,
);

impl PrefValue for String {
    fn encode(&self) -> String {
        self.clone()
    }

    fn decode(raw: &str) -> Option<Self> {
        Some(raw.to_owned())
    }
}

impl PrefValue for Decimal {
    fn encode(&self) -> String {
        self.to_string()
    }

    fn decode(raw: &str) -> Option<Self> {
        decimal::parse_decimal(raw)
    }
}

impl PrefValue for DateTime {
    fn encode(&self) -> String {
        self.millis().to_string()
    }

    fn decode(raw: &str) -> Option<Self> {
        raw.trim().parse().ok().map(Self::from_millis)
    }
}

/// A typed preference key.
#[derive(Debug)]
pub struct PrefKey<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> PrefKey<T> {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for PrefKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PrefKey<T> {}

/// An immutable snapshot of one preference store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    values: BTreeMap<String, String>,
}

impl Preferences {
    #[must_use]
    pub const fn new(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }

    /// Raw stored string for `name`.
    #[must_use]
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Typed value for `key`, `None` when absent or malformed.
    #[must_use]
    pub fn get<T: PrefValue>(&self, key: PrefKey<T>) -> Option<T> {
        let raw = self.raw(key.name())?;
        let value = T::decode(raw);
        if value.is_none() {
            tracing::debug!(key = key.name(), raw, "Ignoring malformed preference value");
        }
        value
    }

    /// Typed value for `key`, or `default` when absent or malformed.
    #[must_use]
    pub fn get_or<T: PrefValue>(&self, key: PrefKey<T>, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    #[must_use]
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.values
    }
}

impl From<BTreeMap<String, String>> for Preferences {
    fn from(values: BTreeMap<String, String>) -> Self {
        Self::new(values)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Preferences {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// One change inside an edit batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    Set(String, String),
    Remove(String),
}

/// A batch of changes applied atomically to one store.
///
/// Applying a batch merges into the existing map: keys not mentioned in
/// the batch are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferencesEdit {
    ops: Vec<EditOp>,
}

impl PreferencesEdit {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a typed value.
    pub fn set<T: PrefValue>(&mut self, key: PrefKey<T>, value: &T) -> &mut Self {
        self.set_raw(key.name(), value.encode())
    }

    /// Set a raw string value.
    pub fn set_raw(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.ops.push(EditOp::Set(name.into(), value.into()));
        self
    }

    /// Remove a key so that reads fall back to the default.
    pub fn remove(&mut self, name: impl Into<String>) -> &mut Self {
        self.ops.push(EditOp::Remove(name.into()));
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    #[must_use]
    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    /// Apply the batch to `values`, returning whether anything changed.
    pub fn apply(&self, values: &mut BTreeMap<String, String>) -> bool {
        let mut changed = false;
        for op in &self.ops {
            match op {
                EditOp::Set(name, value) => {
                    if values.get(name) != Some(value) {
                        values.insert(name.clone(), value.clone());
                        changed = true;
                    }
                }
                EditOp::Remove(name) => {
                    changed |= values.remove(name).is_some();
                }
            }
        }
        changed
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const THEME: PrefKey<NightTheme> = PrefKey::new("night_theme");
    const COUNT: PrefKey<i64> = PrefKey::new("count");
    const RATE: PrefKey<Decimal> = PrefKey::new("rate");

    #[test]
    fn test_get_missing_is_none() {
        let prefs = Preferences::default();
        assert_eq!(prefs.get(THEME), None);
        assert_eq!(prefs.get_or(COUNT, 7), 7);
    }

    #[test]
    fn test_get_malformed_falls_back() {
        let prefs: Preferences = [("night_theme", "PURPLE"), ("count", "many")]
            .into_iter()
            .collect();
        assert_eq!(prefs.get_or(THEME, NightTheme::Enabled), NightTheme::Enabled);
        assert_eq!(prefs.get_or(COUNT, 3), 3);
    }

    #[test]
    fn test_decimal_accepts_comma() {
        let prefs: Preferences = [("rate", "7,5")].into_iter().collect();
        assert_eq!(prefs.get(RATE), Some(Decimal::new(75, 1)));
    }

    #[test]
    fn test_edit_merges() {
        let mut values: BTreeMap<String, String> =
            [("other".to_owned(), "kept".to_owned())].into_iter().collect();

        let mut edit = PreferencesEdit::new();
        edit.set(THEME, &NightTheme::Disabled).set(COUNT, &2);
        assert!(edit.apply(&mut values));

        assert_eq!(values.get("other").unwrap(), "kept");
        assert_eq!(values.get("night_theme").unwrap(), "DISABLED");
        assert_eq!(values.get("count").unwrap(), "2");
    }

    #[test]
    fn test_edit_reports_no_change() {
        let mut values: BTreeMap<String, String> =
            [("count".to_owned(), "2".to_owned())].into_iter().collect();

        let mut edit = PreferencesEdit::new();
        edit.set(COUNT, &2).remove("absent");
        assert!(!edit.apply(&mut values));
    }
}
