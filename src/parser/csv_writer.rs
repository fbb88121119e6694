use crate::errors::{AppError, AppResult};
use crate::models::Row;
use std::fs;
use std::path::Path;

/// Serializes a header and rows to CSV bytes.
///
/// Absent cells are written as empty fields; quoting is applied only where a
/// value contains a delimiter, quote or line break. Lines end with `\n`.
pub fn rows_to_csv(header: &[&str], rows: &[Row]) -> AppResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::with_capacity(rows.len() * 256));

    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row.cells().map(|cell| cell.unwrap_or("")))?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::CsvError(format!("Failed to flush CSV buffer: {e}")))
}

/// Writes the CSV to `path` in one step, so a failed run never leaves a partial file.
pub fn write_csv(path: &Path, header: &[&str], rows: &[Row]) -> AppResult<u64> {
    let bytes = rows_to_csv(header, rows)?;
    fs::write(path, &bytes)
        .map_err(|e| AppError::IoError(format!("Failed to write CSV file {}: {e}", path.display())))?;
    Ok(bytes.len() as u64)
}
