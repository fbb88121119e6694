//! Field mapping from parsed MODS records to Master Metadata Sheet rows.
//!
//! Each schema variant is an ordered list of columns, each with an optional
//! [`schema::Rule`]. Repeatable fields (names, subjects, languages) are
//! extracted per group through a [`cache::PerRecordCache`] that lives for a
//! single record.

pub mod cache;
pub mod classifier;
pub mod dates;
pub mod extractors;
pub mod groups;
pub mod schema;

pub use classifier::classify;
pub use schema::header;

use crate::errors::AppResult;
use crate::models::{Row, SchemaVariant};
use crate::parser::ParsedRecord;
use extractors::RecordContext;
use tracing::trace;

/// Builds the row for one record.
///
/// `row_index` is zero-based; `file_name` is the bare file name used for the
/// identifier columns. A fresh cache is used for every call.
///
/// # Errors
///
/// Returns the first extraction error, with date errors naming `file_name`.
pub fn build_row(
    record: &ParsedRecord,
    variant: SchemaVariant,
    row_index: usize,
    file_name: &str,
) -> AppResult<Row> {
    let columns = schema::columns(variant);
    let mut row = Row::with_columns(columns.iter().map(|c| c.name));
    let mut ctx = RecordContext::new(row_index, file_name);

    for column in columns {
        let Some(rule) = &column.rule else {
            continue;
        };
        if let Some(value) = rule
            .apply(column.name, record, &mut ctx)
            .map_err(|e| e.in_file(file_name))?
        {
            row.set(column.name, value);
        }
    }

    trace!(file = file_name, row = row_index + 1, "Row assembled");
    Ok(row)
}
