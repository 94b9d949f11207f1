//! List search, removal, and aggregation over mixed item lists.
//!
//! Items are independently primitives or documents, and the target decides
//! the matching mode. A document target is matched only against document
//! candidates, via the blank-forgiving structural comparison; primitive
//! candidates can never match it. A primitive target matches on raw value
//! equality, on textual-form equality, or — when its text parses as a
//! boolean — against boolean candidates (covers "true" finding `true`).
//!
//! The scan is a plain in-order O(n) walk; the first match wins.

use crate::error::{ActionError, Result};
use crate::numeric::{number_value, to_number};
use datamodel_core::{classify, is_document, structural_equals, value_text};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Ordering applied to the tail slice returned by [`last_n`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LastNOrder {
    Unsorted,
    Ascending,
    Descending,
}

/// Find the index of the first item matching the target, or `None`.
///
/// A blank target (empty textual form) is an input error.
pub fn index_of(list: &[Value], target: &Value) -> Result<Option<usize>> {
    find_index(list, target)
}

/// Whether any item in the list matches the target.
pub fn contains(list: &[Value], target: &Value) -> Result<bool> {
    Ok(find_index(list, target)?.is_some())
}

/// Remove the first item matching the target. Returns `true` when an item
/// was removed; an unmatched target leaves the list untouched.
pub fn remove_first(list: &mut Vec<Value>, target: &Value) -> Result<bool> {
    match find_index(list, target)? {
        Some(index) => {
            list.remove(index);
            debug!(index, "removed first matching list item");
            Ok(true)
        }
        None => Ok(false),
    }
}

fn find_index(list: &[Value], target: &Value) -> Result<Option<usize>> {
    if value_text(target).is_empty() {
        return Err(ActionError::BlankInput("search target"));
    }

    match classify(target) {
        // Document target: structural comparison against document
        // candidates only.
        Some(target_doc) => Ok(list.iter().position(|item| match classify(item) {
            Some(item_doc) => structural_equals(&target_doc, &item_doc),
            None => false,
        })),
        // Primitive target: raw, textual, or boolean-coerced match.
        None => {
            let target_text = value_text(target);
            // Boolean coercion is lenient about case, so "True" finds `true`.
            let target_bool = match target_text.trim() {
                t if t.eq_ignore_ascii_case("true") => Some(true),
                t if t.eq_ignore_ascii_case("false") => Some(false),
                _ => None,
            };
            Ok(list.iter().position(|item| {
                target == item
                    || target_text == value_text(item)
                    || matches!((target_bool, item), (Some(b), Value::Bool(v)) if b == *v)
            }))
        }
    }
}

/// Sort a list of all-primitive or all-document items.
///
/// All-numeric lists sort numerically; anything else sorts by textual form
/// (documents by their serialized JSON). Lists mixing documents and
/// primitives are rejected.
pub fn sort(list: &[Value], order: SortOrder) -> Result<Vec<Value>> {
    let has_documents = list.iter().any(is_document);
    let has_primitives = list.iter().any(|item| !is_document(item));
    if has_documents && has_primitives {
        return Err(ActionError::MixedList);
    }

    let mut sorted: Vec<Value> = list.to_vec();
    let all_numeric = !has_documents && list.iter().all(|item| to_number(item).is_ok());

    if all_numeric {
        sorted.sort_by(|a, b| {
            let a = to_number(a).unwrap_or_default();
            let b = to_number(b).unwrap_or_default();
            a.partial_cmp(&b).unwrap_or(std::cmp::Ordering::Equal)
        });
    } else {
        sorted.sort_by(|a, b| value_text(a).cmp(&value_text(b)));
    }

    if order == SortOrder::Descending {
        sorted.reverse();
    }
    Ok(sorted)
}

/// Smallest item of an all-numeric list, whole results as integers.
pub fn min(list: &[Value]) -> Result<Value> {
    fold_numbers(list)?
        .into_iter()
        .reduce(f64::min)
        .map(number_value)
        .ok_or(ActionError::EmptyList)
}

/// Largest item of an all-numeric list, whole results as integers.
pub fn max(list: &[Value]) -> Result<Value> {
    fold_numbers(list)?
        .into_iter()
        .reduce(f64::max)
        .map(number_value)
        .ok_or(ActionError::EmptyList)
}

/// Sum of an all-numeric list; an empty list sums to zero.
pub fn sum(list: &[Value]) -> Result<Value> {
    Ok(number_value(fold_numbers(list)?.into_iter().sum()))
}

/// Arithmetic mean of an all-numeric list, whole results as integers.
pub fn mean(list: &[Value]) -> Result<Value> {
    if list.is_empty() {
        return Err(ActionError::EmptyList);
    }
    let numbers = fold_numbers(list)?;
    let total: f64 = numbers.iter().sum();
    Ok(number_value(total / numbers.len() as f64))
}

/// Median of an all-numeric list: the middle value after a numeric sort,
/// or the mean of the two middles for even lengths.
pub fn median(list: &[Value]) -> Result<Value> {
    if list.is_empty() {
        return Err(ActionError::EmptyList);
    }
    let mut numbers = fold_numbers(list)?;
    numbers.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = numbers.len() / 2;
    let median = if numbers.len() % 2 != 0 {
        numbers[mid]
    } else {
        (numbers[mid - 1] + numbers[mid]) / 2.0
    };
    Ok(number_value(median))
}

/// The `n` largest items of the list, sorted descending. Lists mixing
/// documents and primitives are rejected, like [`sort`].
pub fn top_n(list: &[Value], n: usize) -> Result<Vec<Value>> {
    let mut sorted = sort(list, SortOrder::Descending)?;
    sorted.truncate(n);
    Ok(sorted)
}

fn fold_numbers(list: &[Value]) -> Result<Vec<f64>> {
    list.iter().map(to_number).collect()
}

/// The last `n` items of the list, optionally sorted.
pub fn last_n(list: &[Value], n: usize, order: LastNOrder) -> Result<Vec<Value>> {
    let start = list.len().saturating_sub(n);
    let tail = &list[start..];
    match order {
        LastNOrder::Unsorted => Ok(tail.to_vec()),
        LastNOrder::Ascending => sort(tail, SortOrder::Ascending),
        LastNOrder::Descending => sort(tail, SortOrder::Descending),
    }
}
