//! Line-oriented backup file encoding.
//!
//! # Format
//!
//! One record per line, lines joined by `\n`, no trailing newline, no
//! header. Each line is a category tag followed by the record as JSON:
//!
//! ```text
//! shopping:{"id":"s1","name":"Groceries",...}
//! product:{"id":"p1","directory":"s1","name":"Milk",...}
//! autocomplete:{"id":"a1","name":"Milk",...}
//! preferences:{"nightTheme":"SYSTEM",...}
//! ```
//!
//! Shopping lists come first, then products, then autocompletes, then
//! exactly one preferences line.
//!
//! Decoding matches tags as strict line prefixes, so a field value that
//! happens to contain another category's tag cannot reroute a line. Blank
//! and untagged lines are skipped. Any line whose payload is not valid JSON
//! fails the whole decode.

use thiserror::Error;
use tracing::{debug, instrument};

use super::record::{BackupData, BackupRecord, RecordCategory};

/// Errors produced while encoding or decoding a backup.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A record could not be serialized.
    #[error("failed to encode {category} record: {source}")]
    Encode {
        category: RecordCategory,
        #[source]
        source: serde_json::Error,
    },

    /// A tagged line carried a payload that is not a valid record.
    #[error("line {line}: invalid {category} record: {source}")]
    Decode {
        /// 1-based line number.
        line: usize,
        category: RecordCategory,
        #[source]
        source: serde_json::Error,
    },
}

/// Encode a single record as one line (tag + JSON).
///
/// # Errors
///
/// Returns [`CodecError::Encode`] if serialization fails.
pub fn encode_record(record: &BackupRecord) -> Result<String, CodecError> {
    let category = record.category();
    let json = match record {
        BackupRecord::Shopping(r) => serde_json::to_string(r),
        BackupRecord::Product(r) => serde_json::to_string(r),
        BackupRecord::Autocomplete(r) => serde_json::to_string(r),
        BackupRecord::Preferences(r) => serde_json::to_string(r),
    }
    .map_err(|source| CodecError::Encode { category, source })?;

    Ok(format!("{}{json}", category.tag()))
}

/// Encode a full backup.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] if any record fails to serialize.
#[instrument(skip(data), fields(records = data.record_count()))]
pub fn encode(data: &BackupData) -> Result<String, CodecError> {
    let records = data
        .shoppings
        .iter()
        .cloned()
        .map(BackupRecord::Shopping)
        .chain(data.products.iter().cloned().map(BackupRecord::Product))
        .chain(
            data.autocompletes
                .iter()
                .cloned()
                .map(BackupRecord::Autocomplete),
        )
        .chain(std::iter::once(BackupRecord::Preferences(
            data.preferences.clone(),
        )));

    let lines = records
        .map(|record| encode_record(&record))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(lines.join("\n"))
}

/// Decode one line.
///
/// Returns `Ok(None)` for blank lines and lines without a known tag.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] if the payload of a tagged line is invalid.
pub fn decode_line(line_number: usize, line: &str) -> Result<Option<BackupRecord>, CodecError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let Some((category, payload)) = RecordCategory::ALL
        .into_iter()
        .find_map(|category| line.strip_prefix(category.tag()).map(|p| (category, p)))
    else {
        debug!(line = line_number, "Skipping untagged backup line");
        return Ok(None);
    };

    let err = |source| CodecError::Decode {
        line: line_number,
        category,
        source,
    };

    let record = match category {
        RecordCategory::Shopping => {
            BackupRecord::Shopping(serde_json::from_str(payload).map_err(err)?)
        }
        RecordCategory::Product => {
            BackupRecord::Product(serde_json::from_str(payload).map_err(err)?)
        }
        RecordCategory::Autocomplete => {
            BackupRecord::Autocomplete(serde_json::from_str(payload).map_err(err)?)
        }
        RecordCategory::Preferences => {
            BackupRecord::Preferences(serde_json::from_str(payload).map_err(err)?)
        }
    };

    Ok(Some(record))
}

/// Decode a full backup.
///
/// When the text has no preferences line the result carries the default
/// preferences; when it has several, the last one wins.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for the first tagged line that fails to
/// parse. Nothing is returned for the lines before it.
#[instrument(skip(text), fields(bytes = text.len()))]
pub fn decode(text: &str) -> Result<BackupData, CodecError> {
    let mut data = BackupData::default();

    for (index, line) in text.split('\n').enumerate() {
        if let Some(record) = decode_line(index + 1, line)? {
            data.push(record);
        }
    }

    debug!(
        shoppings = data.shoppings.len(),
        products = data.products.len(),
        autocompletes = data.autocompletes.len(),
        "Decoded backup"
    );
    Ok(data)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::backup::record::{
        AutocompleteRecord, PreferencesRecord, ProductRecord, ShoppingRecord,
    };

    fn shopping(id: &str, name: &str) -> ShoppingRecord {
        ShoppingRecord {
            id: id.to_owned(),
            name: name.to_owned(),
            ..ShoppingRecord::default()
        }
    }

    fn product(id: &str, directory: &str, name: &str) -> ProductRecord {
        ProductRecord {
            id: id.to_owned(),
            directory: directory.to_owned(),
            name: name.to_owned(),
            ..ProductRecord::default()
        }
    }

    #[test]
    fn test_encode_layout() {
        let data = BackupData {
            shoppings: vec![shopping("s1", "Groceries"), shopping("s2", "Hardware")],
            products: vec![product("p1", "s1", "Milk")],
            autocompletes: vec![AutocompleteRecord {
                id: "a1".to_owned(),
                name: "Bread".to_owned(),
                ..AutocompleteRecord::default()
            }],
            preferences: PreferencesRecord::default(),
        };

        let text = encode(&data).unwrap();
        let lines: Vec<&str> = text.split('\n').collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("shopping:") && lines[0].contains("\"s1\""));
        assert!(lines[1].starts_with("shopping:") && lines[1].contains("\"s2\""));
        assert!(lines[2].starts_with("product:"));
        assert!(lines[3].starts_with("autocomplete:"));
        assert!(lines[4].starts_with("preferences:"));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_empty_backup_is_one_preferences_line() {
        let text = encode(&BackupData::default()).unwrap();
        assert!(text.starts_with("preferences:"));
        assert!(!text.contains('\n'));
    }

    #[test]
    fn test_roundtrip_groceries() {
        let data = BackupData {
            shoppings: vec![shopping("s1", "Groceries")],
            products: vec![product("p1", "s1", "Milk")],
            autocompletes: Vec::new(),
            preferences: PreferencesRecord::default(),
        };

        let decoded = decode(&encode(&data).unwrap()).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_missing_preferences_defaults() {
        let text = r#"shopping:{"id":"s1","name":"Groceries"}"#;
        let decoded = decode(text).unwrap();
        assert_eq!(decoded.shoppings.len(), 1);
        assert_eq!(decoded.preferences, PreferencesRecord::default());
    }

    #[test]
    fn test_last_preferences_wins() {
        let text = [
            r#"preferences:{"currency":"€"}"#,
            r#"preferences:{"currency":"£"}"#,
        ]
        .join("\n");
        let decoded = decode(&text).unwrap();
        assert_eq!(decoded.preferences.currency, "£");
    }

    #[test]
    fn test_blank_and_untagged_lines_skipped() {
        let text = "\nhello world\r\nshopping:{\"id\":\"s1\"}\r\n\n";
        let decoded = decode(text).unwrap();
        assert_eq!(decoded.shoppings, vec![shopping("s1", "")]);
    }

    #[test]
    fn test_tag_inside_value_does_not_reroute() {
        let data = BackupData {
            shoppings: vec![shopping("s1", "product:{\"id\":\"x\"}")],
            ..BackupData::default()
        };
        let decoded = decode(&encode(&data).unwrap()).unwrap();
        assert_eq!(decoded.shoppings, data.shoppings);
        assert!(decoded.products.is_empty());
    }

    #[test]
    fn test_malformed_line_fails_whole_decode() {
        let text = "shopping:{\"id\":\"s1\"}\nproduct:{not json";
        let err = decode(text).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Decode {
                line: 2,
                category: RecordCategory::Product,
                ..
            }
        ));
        assert!(err.to_string().starts_with("line 2: invalid product record"));
    }

    #[test]
    fn test_newline_in_value_stays_on_one_line() {
        let data = BackupData {
            products: vec![ProductRecord {
                note: "first\nsecond".to_owned(),
                ..product("p1", "s1", "Milk")
            }],
            ..BackupData::default()
        };
        let text = encode(&data).unwrap();
        assert_eq!(text.split('\n').count(), 2);
        assert_eq!(decode(&text).unwrap(), data);
    }

    #[test]
    fn test_tag_without_payload_fails() {
        let err = decode("product:\nshopping:{\"id\":\"s1\"}").unwrap_err();
        assert!(matches!(
            err,
            CodecError::Decode {
                line: 1,
                category: RecordCategory::Product,
                ..
            }
        ));

        let err = decode("shopping:{\"id\":\"s1\"}\r\npreferences:\r\n").unwrap_err();
        assert!(matches!(
            err,
            CodecError::Decode {
                line: 2,
                category: RecordCategory::Preferences,
                ..
            }
        ));
    }
}
