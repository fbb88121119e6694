use super::record::ParsedRecord;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// Reads a MODS file fully into memory; the file is closed on return.
///
/// # Errors
///
/// Returns `IoError` naming the file if it cannot be read or is not UTF-8.
pub fn read_record_file(path: &Path) -> AppResult<String> {
    fs::read_to_string(path)
        .map_err(|e| AppError::IoError(format!("Failed to read XML file {}: {e}", path.display())))
}

/// Parses the content of a MODS file read with [`read_record_file`].
///
/// # Errors
///
/// Returns `ParseError` prefixed with the file path if the XML is malformed.
pub fn parse_record_file<'input>(path: &Path, xml: &'input str) -> AppResult<ParsedRecord<'input>> {
    ParsedRecord::parse(xml).map_err(|e| match e {
        AppError::ParseError(msg) => AppError::ParseError(format!("{}: {msg}", path.display())),
        other => other,
    })
}
