//! # action-kit
//!
//! Workflow action library over JSON-like values. Each action is a single
//! pure, synchronous function: values in, result out, errors reported
//! synchronously and never retried.
//!
//! The list and table actions lean on [`datamodel_core`] to decide whether
//! an item is a structured document or a primitive, and to compare or
//! flatten documents; everything else is a flat input→output transform.
//!
//! ## Modules
//!
//! - [`list`] — search/contains/remove plus sort and the aggregations
//! - [`table`] — flatten an item list into tabular rows for export
//! - [`numeric`] — arithmetic over loosely-typed numeric inputs
//! - [`datetime`] — calendar arithmetic and date part extraction
//! - [`strings`] — concat/split/join and friends
//! - [`similarity`] — fuzzy string ranking
//! - [`encoding`] — base64 conversion
//! - [`pattern`] — regex validation
//! - [`error`] — error types

pub mod datetime;
pub mod encoding;
pub mod error;
pub mod list;
pub mod numeric;
pub mod pattern;
pub mod similarity;
pub mod strings;
pub mod table;

pub use error::ActionError;
pub use list::{contains, index_of, remove_first, SortOrder};
pub use table::{build_table, Table, PRIMITIVE_COLUMN};
