//! Error types for document classification and parsing.

use thiserror::Error;

/// Errors that can occur when a value is forced into document form.
///
/// The classifier itself never returns these — a failed classification is a
/// plain `None`/`false`. They only surface from [`crate::parse_document`],
/// which callers are expected to reach after a successful classification.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The value's textual form was not valid JSON at all.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The textual form parsed as JSON, but to a scalar rather than an
    /// object or array.
    #[error("not a JSON object or array: {0}")]
    NotADocument(String),
}

/// Convenience alias used throughout datamodel-core.
pub type Result<T> = std::result::Result<T, DocumentError>;
