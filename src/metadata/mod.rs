//! Submission record and its JSON metadata payload.
//!
//! The record is what eventually gets posted: `score`, `score2`, `metadata`
//! (a JSON object encoded as a string), and the free-text `comment`.
//!
//! # Read-merge-write
//!
//! Two writers share the metadata field: the preference engine owns the
//! `preference` key and the comment handler owns `comment`. Neither keeps a
//! private copy of the mapping. Every write goes through
//! [`SubmissionRecordHandle::update_metadata`], which parses the current
//! string, lets the caller touch only its own key, and writes the whole
//! mapping back.

pub mod record;

#[cfg(test)]
mod tests;

pub use record::{SubmissionRecord, SubmissionRecordHandle};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::constants::{METADATA_COMMENT_KEY, METADATA_PREFERENCE_KEY};
use crate::preference::PreferenceChoice;

/// Open string-keyed JSON mapping with two reserved keys.
///
/// Empty strings and `null` are never stored; an absent key is the empty
/// representation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionMetadata {
    entries: Map<String, Value>,
}

impl SubmissionMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a metadata field value, treating anything that is not a JSON
    /// object as an empty mapping. Never fails.
    pub fn parse_lenient(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::new();
        }

        match serde_json::from_str::<Value>(trimmed) {
            Ok(Value::Object(map)) => {
                let mut metadata = Self::new();
                for (key, value) in map {
                    metadata.set(key, value);
                }
                metadata
            }
            Ok(other) => {
                warn!(kind = json_kind(&other), "Metadata is not a JSON object, resetting");
                Self::new()
            }
            Err(e) => {
                warn!(error = %e, "Malformed metadata JSON, resetting");
                Self::new()
            }
        }
    }

    /// Serializes to the compact JSON string stored in the record.
    ///
    /// Keys are emitted in sorted order, so equal mappings encode identically.
    pub fn to_json_string(&self) -> String {
        Value::Object(self.entries.clone()).to_string()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Sets `key`, or removes it when `value` is `null` or an empty/blank string.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        if is_empty_value(&value) {
            self.entries.remove(&key);
        } else {
            self.entries.insert(key, value);
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Writes (or removes) the `preference` key.
    pub fn write_preference(&mut self, choice: Option<PreferenceChoice>) {
        match choice {
            Some(choice) => self.set(METADATA_PREFERENCE_KEY, Value::from(choice.label())),
            None => {
                self.remove(METADATA_PREFERENCE_KEY);
            }
        }
    }

    /// Writes the trimmed comment, removing the key for blank or missing text.
    pub fn write_comment(&mut self, text: Option<&str>) {
        let trimmed = text.map(str::trim).unwrap_or_default();
        self.set(METADATA_COMMENT_KEY, Value::from(trimmed));
    }

    /// Raw `preference` label, if present and a string.
    pub fn preference_label(&self) -> Option<&str> {
        self.get(METADATA_PREFERENCE_KEY).and_then(Value::as_str)
    }

    /// Parsed `preference`; unknown labels read as absent.
    pub fn preference(&self) -> Option<PreferenceChoice> {
        self.preference_label()
            .and_then(|label| label.parse::<PreferenceChoice>().ok())
    }

    pub fn comment(&self) -> Option<&str> {
        self.get(METADATA_COMMENT_KEY).and_then(Value::as_str)
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
