//! Document classification — deciding whether an opaque value is a
//! structured document (JSON object/array) or a primitive.
//!
//! Workflow lists are heterogeneous: the same input list can hold numbers,
//! strings, booleans, and full data models. The only capability every item
//! is guaranteed to have is a textual form, so classification is defined in
//! terms of that text: a value is a document iff its textual form parses as
//! JSON object or array syntax. In particular a *string* whose contents are
//! `{"a":1}` classifies as a document, exactly like an already-structured
//! object value does.
//!
//! [`classify`] is the everyday, non-throwing parse attempt. The hard
//! variant [`parse_document`] exists for callers that have already
//! classified and treat failure as a programming error.

use crate::error::{DocumentError, Result};
use serde_json::{Map, Value};

/// A value whose outward shape is structured: a JSON object or array.
///
/// Everything else (null, booleans, numbers, strings that are not JSON
/// object/array text) is a scalar and never becomes a `Document`.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// Ordered name→value properties. Insertion order is preserved end to
    /// end (`serde_json` with `preserve_order`); duplicate names cannot be
    /// represented — a reparse keeps the last occurrence.
    Object(Map<String, Value>),
    /// Ordered element sequence.
    Array(Vec<Value>),
}

impl Document {
    /// Compact JSON serialization of the document, key order preserved.
    ///
    /// Two documents with identical serializations are identical trees in
    /// identical order; this is the fast-path test used by the equality
    /// engine.
    pub fn to_json(&self) -> String {
        let out = match self {
            Document::Object(map) => serde_json::to_string(map),
            Document::Array(items) => serde_json::to_string(items),
        };
        // Serializing an in-memory value tree cannot fail.
        out.unwrap_or_default()
    }

    /// Reconstruct the plain `Value` form of this document.
    pub fn into_value(self) -> Value {
        match self {
            Document::Object(map) => Value::Object(map),
            Document::Array(items) => Value::Array(items),
        }
    }
}

/// The textual representation of a value, as the host platform would
/// stringify it for display or comparison.
///
/// - `Null` stringifies to the empty string (which is what makes null
///   "blank" for the equality engine's forgiveness rule)
/// - strings are returned verbatim, without JSON quoting
/// - booleans and numbers use their plain decimal/keyword form
/// - objects and arrays serialize to compact JSON
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}

/// Whether a value is blank: its textual representation is empty.
///
/// Blank values (null, empty string) are treated as absent by the equality
/// engine — a property carrying one never causes a mismatch.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Attempt to classify a value as a document. Returns `None` on any parse
/// failure; never errors.
///
/// Structured values classify directly. A string classifies iff its
/// contents are valid JSON object/array text. All other scalars are `None`.
pub fn classify(value: &Value) -> Option<Document> {
    match value {
        Value::Object(map) => Some(Document::Object(map.clone())),
        Value::Array(items) => Some(Document::Array(items.clone())),
        Value::String(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => Some(Document::Object(map)),
            Ok(Value::Array(items)) => Some(Document::Array(items)),
            _ => None,
        },
        _ => None,
    }
}

/// Whether a value classifies as a document.
pub fn is_document(value: &Value) -> bool {
    classify(value).is_some()
}

/// Classify a value, failing hard when it is not a document.
///
/// Callers that check [`is_document`] first never hit the error path; it
/// exists as a contract for callers that skip the check.
pub fn parse_document(value: &Value) -> Result<Document> {
    match value {
        Value::Object(map) => Ok(Document::Object(map.clone())),
        Value::Array(items) => Ok(Document::Array(items.clone())),
        Value::String(text) => match serde_json::from_str::<Value>(text)? {
            Value::Object(map) => Ok(Document::Object(map)),
            Value::Array(items) => Ok(Document::Array(items)),
            other => Err(DocumentError::NotADocument(value_text(&other))),
        },
        other => Err(DocumentError::NotADocument(value_text(other))),
    }
}
