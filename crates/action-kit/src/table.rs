//! Turn a heterogeneous item list into rows of a flat table.
//!
//! Each document item is flattened into one row of (path, scalar) pairs in
//! document order; each primitive item becomes a single synthetic `Column`
//! cell. Downstream writers map the pairs straight onto spreadsheet/CSV
//! columns, in first-seen order.
//!
//! When a header is requested it is derived from the *first* item's own
//! flattened key set alone — never the union across rows. Later rows with a
//! different shape simply won't align with the header. That is a quirk of
//! the platform's exporters, preserved here as-is.

use crate::error::{ActionError, Result};
use datamodel_core::{classify, flatten};
use serde_json::Value;
use tracing::debug;

/// Synthetic column name used for primitive items.
pub const PRIMITIVE_COLUMN: &str = "Column";

/// A flat table: optional header plus one row of (path, scalar) pairs per
/// input item.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub header: Option<Vec<String>>,
    pub rows: Vec<Vec<(String, Value)>>,
}

/// Build a flat table from an ordered item list.
///
/// An empty input list is an error — there is nothing to derive a shape
/// from, let alone export.
pub fn build_table(items: &[Value], with_header: bool) -> Result<Table> {
    if items.is_empty() {
        return Err(ActionError::EmptyList);
    }

    let mut header = None;
    let mut rows = Vec::with_capacity(items.len());

    for item in items {
        let row = match classify(item) {
            Some(doc) => flatten(&doc.into_value()),
            None => vec![(PRIMITIVE_COLUMN.to_string(), item.clone())],
        };
        if with_header && header.is_none() {
            header = Some(row.iter().map(|(path, _)| path.clone()).collect());
        }
        rows.push(row);
    }

    debug!(rows = rows.len(), "built export table");
    Ok(Table { header, rows })
}
