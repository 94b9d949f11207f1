//! Base64 conversion of UTF-8 text.

use crate::error::Result;
use base64::{engine::general_purpose::STANDARD, Engine};

/// Encode text to standard-alphabet base64.
pub fn to_base64(input: &str) -> String {
    STANDARD.encode(input.as_bytes())
}

/// Decode standard-alphabet base64 back to UTF-8 text.
pub fn from_base64(input: &str) -> Result<String> {
    let bytes = STANDARD.decode(input.trim())?;
    Ok(String::from_utf8(bytes)?)
}
