//! # datamodel-core
//!
//! Shared core for workflow actions that handle opaque "data model" values:
//! JSON-like documents mixed freely with primitives in the same list.
//!
//! The crate answers three questions that every list/search/export action
//! needs answered the same way:
//!
//! - *Is this value a document?* — a non-throwing parse attempt that decides
//!   whether a value's textual form is JSON object/array text ([`classify`],
//!   [`is_document`], [`parse_document`])
//! - *Are these two documents the same?* — a recursive, property-name-driven
//!   structural comparison that forgives blank or absent properties on either
//!   side ([`structural_equals`])
//! - *What does this document look like as a flat row?* — an ordered
//!   path→scalar flattening for tabular export ([`flatten`])
//!
//! Everything here is a pure function over an in-memory value tree; there is
//! no I/O, no shared state, and no retry semantics. Object key order is
//! significant (insertion order is preserved through parse and serialize),
//! which is why the workspace pins `serde_json` with `preserve_order`.
//!
//! ## Modules
//!
//! - [`document`] — `Document`, the classifier, textual form, blank rule
//! - [`compare`] — blank-forgiving structural equality
//! - [`flatten`] — dotted-path flattening
//! - [`error`] — error types

pub mod compare;
pub mod document;
pub mod error;
pub mod flatten;

pub use compare::structural_equals;
pub use document::{classify, is_blank, is_document, parse_document, value_text, Document};
pub use error::DocumentError;
pub use flatten::flatten;
