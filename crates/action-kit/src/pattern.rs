//! Regex validation of text inputs.

use crate::error::Result;
use regex::RegexBuilder;

/// Whether the text matches the pattern. Empty text never matches and the
/// pattern is not even compiled for it; an invalid pattern is an error.
pub fn is_match(text: &str, pattern: &str, ignore_case: bool) -> Result<bool> {
    if text.is_empty() {
        return Ok(false);
    }
    let regex = RegexBuilder::new(pattern)
        .case_insensitive(ignore_case)
        .build()?;
    Ok(regex.is_match(text))
}
