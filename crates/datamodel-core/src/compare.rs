//! Blank-forgiving structural equality between two documents.
//!
//! This is deliberately *not* deep equality. Two documents compare equal
//! when every property carrying a meaningful (non-blank) value on one side
//! is matched by an equal — or recursively equal — value on the other side.
//! Blank-valued or entirely absent properties on either side are forgiven.
//!
//! The comparison is property-name-driven and order-insensitive, except for
//! one shortcut: identical serialized text (same keys, same order, same
//! values) is equal without any property walk. Arrays are never unified
//! element-wise: a non-object document only compares equal through that
//! serialized fast path, and an array-valued property only on identical
//! serialized text. Recursion into nested documents probes for objects
//! alone.
//!
//! The iteration is intentionally asymmetric: a lookup of `a`'s properties
//! is consumed while walking `b` in `b`'s own order, and `a`'s unvisited
//! leftovers are swept for blanks afterwards. Both directions have been kept
//! exactly as the original comparator behaves rather than symmetrized.

use crate::document::{classify, is_blank, Document};
use serde_json::Value;

/// Compare two documents structurally, forgiving blank and absent
/// properties on either side.
pub fn structural_equals(a: &Document, b: &Document) -> bool {
    // Fast path: same serialized text means same keys in the same order
    // with the same values.
    if a.to_json() == b.to_json() {
        return true;
    }

    // Only objects are reconciled property-by-property. Arrays (and
    // object-vs-array mismatches) are exact-match only.
    let (Document::Object(a_props), Document::Object(b_props)) = (a, b) else {
        return false;
    };

    // `remaining` holds a's properties not yet consumed by a match.
    let mut remaining = a_props.clone();

    for (name, b_value) in b_props {
        match remaining.remove(name) {
            Some(a_value) => {
                if !property_equal(&a_value, b_value) {
                    return false;
                }
            }
            // b carries a property a never had: a mismatch only when the
            // value is meaningful.
            None => {
                if !is_blank(b_value) {
                    return false;
                }
            }
        }
    }

    // Properties of a that b never mentioned must all be blank.
    remaining.values().all(is_blank)
}

/// Reconcile one property value pair: scalar equality, then object
/// recursion, then exact serialized text for array pairs.
fn property_equal(a: &Value, b: &Value) -> bool {
    if plain_equal(a, b) {
        return true;
    }
    // Recursion probes for objects only (direct or as object text). Arrays
    // never unify element-wise: an array-valued property matches solely on
    // identical serialized text.
    match (classify_object(a), classify_object(b)) {
        (Some(a_doc), Some(b_doc)) => structural_equals(&a_doc, &b_doc),
        _ => array_text_equal(a, b),
    }
}

/// Plain scalar-level equality: numbers compare numerically (1 == 1.0),
/// null/bool/string by strict value equality. Containers never compare
/// equal here.
fn plain_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        (Value::Null, Value::Null) => true,
        (Value::Bool(_), Value::Bool(_)) | (Value::String(_), Value::String(_)) => a == b,
        _ => false,
    }
}

fn classify_object(value: &Value) -> Option<Document> {
    match classify(value) {
        Some(Document::Object(map)) => Some(Document::Object(map)),
        _ => None,
    }
}

fn array_text_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Array(_), Value::Array(_)) => {
            serde_json::to_string(a).unwrap_or_default() == serde_json::to_string(b).unwrap_or_default()
        }
        _ => false,
    }
}
