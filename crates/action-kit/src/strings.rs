//! Flat string transforms.

use crate::error::{ActionError, Result};

/// Concatenate two strings.
pub fn concat(first: &str, second: &str) -> String {
    format!("{first}{second}")
}

/// Split a string on a separator. An empty separator yields the input
/// unsplit rather than a per-character explosion.
pub fn split(input: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        return vec![input.to_string()];
    }
    input.split(separator).map(str::to_string).collect()
}

/// Join a list of strings with a separator.
pub fn join(items: &[String], separator: &str) -> String {
    items.join(separator)
}

/// Whether the input is missing or empty.
pub fn is_null_or_empty(input: Option<&str>) -> bool {
    input.is_none_or(str::is_empty)
}

/// Remove leading whitespace.
pub fn trim_start(input: &str) -> String {
    input.trim_start().to_string()
}

/// Uppercase copy of the input.
pub fn to_upper(input: &str) -> String {
    input.to_uppercase()
}

/// Lowercase copy of the input.
pub fn to_lower(input: &str) -> String {
    input.to_lowercase()
}

/// Whether the input contains the needle.
pub fn contains(input: &str, needle: &str) -> bool {
    input.contains(needle)
}

/// Whether the input ends with the suffix.
pub fn ends_with(input: &str, suffix: &str) -> bool {
    input.ends_with(suffix)
}

/// Character index of the first occurrence of the needle, or `None`.
pub fn index_of(input: &str, needle: &str) -> Option<usize> {
    input
        .find(needle)
        .map(|byte_index| input[..byte_index].chars().count())
}

/// The tail of the input from a 0-based character offset. An offset past
/// the end of the input is an error; an offset exactly at the end yields
/// the empty string.
pub fn substring(input: &str, start: usize) -> Result<String> {
    let length = input.chars().count();
    if start > length {
        return Err(ActionError::IndexOutOfRange(start));
    }
    Ok(input.chars().skip(start).collect())
}
