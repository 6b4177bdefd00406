//! Key-value snapshot written by the host app for its widgets.
//!
//! A [`Snapshot`] is a flat, read-only map of strings. Every lookup is
//! total: numeric keys degrade to `0.0` and text keys fall back to their
//! documented defaults, so rendering never has to deal with missing data.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use super::error::SnapshotError;
use crate::constants::{DEFAULT_AMOUNT, RECOGNIZED_KEYS};

// ============================================================================
// Snapshot
// ============================================================================

/// Latest cached financial summary, as string keys and string values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    values: HashMap<String, String>,
}

impl Snapshot {
    /// Create an empty snapshot. Every key resolves to its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value.
    ///
    /// # Returns
    ///
    /// Self with the entry set, for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Raw value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Number of stored entries, unknown keys included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the snapshot holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Numeric value stored under `key`.
    ///
    /// Absent, unparseable and non-finite values all resolve to `0.0`.
    #[must_use]
    pub fn number(&self, key: &str) -> f64 {
        let Some(raw) = self.get(key) else {
            return DEFAULT_AMOUNT;
        };

        match parse_decimal(raw) {
            Some(value) => value,
            None => {
                tracing::debug!("Snapshot key '{key}' holds non-numeric value {raw:?}, using 0.0");
                DEFAULT_AMOUNT
            }
        }
    }

    /// Text value stored under `key`, or `default` when absent.
    #[must_use]
    pub fn text_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Parse a snapshot from a JSON object.
    ///
    /// String values are kept verbatim. Numbers and booleans are stored as
    /// their JSON text so that `{"month_total": 12.5}` behaves like
    /// `{"month_total": "12.5"}`. `null` entries are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not JSON or not a JSON object.
    pub fn from_json_str(json: &str) -> Result<Self, SnapshotError> {
        let entries = match serde_json::from_str::<Value>(json)? {
            Value::Object(entries) => entries,
            other => return Err(SnapshotError::not_an_object(json_type_name(&other))),
        };

        let mut snapshot = Self::new();
        for (key, value) in entries {
            let text = match value {
                Value::Null => continue,
                Value::String(text) => text,
                Value::Bool(flag) => flag.to_string(),
                Value::Number(number) => number.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    tracing::debug!("Skipping nested snapshot value under '{key}'");
                    continue;
                }
            };
            if !RECOGNIZED_KEYS.contains(&key.as_str()) {
                tracing::debug!("Keeping unrecognized snapshot key '{key}'");
            }
            snapshot.values.insert(key, text);
        }
        Ok(snapshot)
    }

    /// Read and parse a snapshot JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not hold a JSON object.
    pub fn from_json_file(path: &Path) -> Result<Self, SnapshotError> {
        let content = fs::read_to_string(path).map_err(|e| SnapshotError::io(path, e))?;
        let snapshot = Self::from_json_str(&content)?;
        tracing::debug!(
            "Loaded snapshot with {} entries from {}",
            snapshot.len(),
            path.display()
        );
        Ok(snapshot)
    }

    /// Split a `key=value` entry on its first `=`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no `=` or the key is empty.
    pub fn parse_pair(entry: &str) -> Result<(String, String), SnapshotError> {
        match entry.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok((key.trim().to_string(), value.to_string()))
            }
            _ => Err(SnapshotError::invalid_pair(entry)),
        }
    }

    /// Apply `key=value` overrides on top of this snapshot. Later entries win.
    ///
    /// # Errors
    ///
    /// Returns an error on the first malformed entry.
    pub fn with_overrides<I, S>(mut self, entries: I) -> Result<Self, SnapshotError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in entries {
            let (key, value) = Self::parse_pair(entry.as_ref())?;
            self.values.insert(key, value);
        }
        Ok(self)
    }
}

impl<K, V> FromIterator<(K, V)> for Snapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Parse a decimal string, rejecting `NaN` and infinities.
///
/// Only ASCII control characters and spaces are trimmed; a leading
/// no-break space makes the value non-numeric.
fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim_matches(|c: char| c <= ' ')
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// Tests
// ============================================================================
