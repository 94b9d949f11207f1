//! Error types for action execution.
//!
//! Actions validate their own inputs and report failures synchronously;
//! the messages here are the user-facing ones surfaced by the workflow
//! host, so they name the problem, not the internals.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActionError {
    /// A required input was empty or missing.
    #[error("input was null or empty: {0}")]
    BlankInput(&'static str),

    /// The input list was empty where at least one item is required.
    #[error("input list is empty, please add items to it")]
    EmptyList,

    /// A list mixed data models and primitives where one kind is required.
    #[error("list mixes data models and primitives, check the item types")]
    MixedList,

    /// An item could not be coerced to a number.
    #[error("input was not a number: {0}")]
    NotANumber(String),

    /// Division or modulo by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A position was past the end of the input.
    #[error("index {0} is past the end of the input")]
    IndexOutOfRange(usize),

    /// A date string did not match the requested format.
    #[error("invalid date {input:?} for format {format:?}")]
    InvalidDate { input: String, format: String },

    /// Arithmetic on a date produced an unrepresentable result.
    #[error("date arithmetic out of range")]
    DateOutOfRange,

    /// The regex pattern failed to compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Base64 input could not be decoded.
    #[error("invalid base64 input: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// Decoded base64 bytes were not valid UTF-8 text.
    #[error("decoded bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Convenience alias used throughout action-kit.
pub type Result<T> = std::result::Result<T, ActionError>;
