//! Folder listing normalization.
//!
//! The files API has been observed to return the same listing in several
//! encodings. [`normalize`] accepts all of them and always yields a flat,
//! ordered sequence of entries: folders first, then files.
//!
//! Resolution is an ordered cascade of typed decode attempts; the first one
//! that succeeds wins:
//!
//! 1. `{"response": {"folders": [..], "files": [..]}}`
//! 2. `{"data": ..}`, passed through as-is
//! 3. `{"folders": [..], "files": [..]}` without an envelope
//! 4. a JSON string holding any of the above, or an array of entries
//! 5. an array whose first element is such a string
//! 6. anything else, wrapped as the single entry
//!
//! Unparseable text never fails; it degrades to one diagnostic record.

use onlyoffice_types::FileSystemEntry;
use serde::Deserialize;
use serde_json::{json, Value};

/// Marker stored under `error` in the diagnostic record.
pub const PARSE_FAILURE: &str = "Failed to parse JSON response";

#[derive(Deserialize)]
struct Listing {
    #[serde(default)]
    folders: Option<Vec<Value>>,
    #[serde(default)]
    files: Option<Vec<Value>>,
}

impl Listing {
    /// At least one side must be present for the shape to count as a listing.
    fn into_entries(self) -> Option<Vec<Value>> {
        if self.folders.is_none() && self.files.is_none() {
            return None;
        }
        let mut entries = self.folders.unwrap_or_default();
        entries.extend(self.files.unwrap_or_default());
        Some(entries)
    }
}

#[derive(Deserialize)]
struct Envelope {
    response: Listing,
}

#[derive(Deserialize)]
struct DataWrapped {
    data: Value,
}

/// Normalize a raw list response into entries. Never fails.
pub fn normalize(raw: &Value) -> Vec<FileSystemEntry> {
    if let Some(entries) = decode_structured(raw) {
        return entries;
    }

    match raw {
        Value::String(text) => match serde_json::from_str::<Value>(text) {
            Ok(parsed) => from_parsed(parsed),
            Err(err) => {
                tracing::debug!(error = %err, "list response text is not JSON");
                vec![diagnostic(raw)]
            }
        },
        Value::Array(items) => match items.first() {
            Some(Value::String(text)) => match serde_json::from_str::<Value>(text) {
                Ok(parsed) => from_parsed(parsed),
                Err(err) => {
                    tracing::debug!(error = %err, "first element of list response is not JSON");
                    vec![diagnostic(raw)]
                }
            },
            _ => items.clone(),
        },
        other => vec![other.clone()],
    }
}

/// Rules 1 to 3: the shapes that need no text parsing.
fn decode_structured(value: &Value) -> Option<Vec<Value>> {
    if !value.is_object() {
        return None;
    }
    decode_envelope(value)
        .or_else(|| decode_data(value))
        .or_else(|| decode_flat(value))
}

/// Decoded text: a known shape, else an array's items, else the value itself.
fn from_parsed(parsed: Value) -> Vec<Value> {
    if let Some(entries) = decode_structured(&parsed) {
        return entries;
    }
    match parsed {
        Value::Array(items) => items,
        other => vec![other],
    }
}

fn decode_envelope(value: &Value) -> Option<Vec<Value>> {
    Envelope::deserialize(value)
        .ok()
        .and_then(|envelope| envelope.response.into_entries())
}

fn decode_data(value: &Value) -> Option<Vec<Value>> {
    let wrapped = DataWrapped::deserialize(value).ok()?;
    match wrapped.data {
        Value::Null => None,
        Value::Array(items) => Some(items),
        other => Some(vec![other]),
    }
}

fn decode_flat(value: &Value) -> Option<Vec<Value>> {
    Listing::deserialize(value)
        .ok()
        .and_then(Listing::into_entries)
}

fn diagnostic(raw: &Value) -> Value {
    json!({
        "error": PARSE_FAILURE,
        "rawResponse": raw,
    })
}
