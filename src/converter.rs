use crate::errors::{AppError, AppResult};
use crate::mapping::{build_row, classify, header};
use crate::models::{ConversionSummary, SchemaVariant};
use crate::parser::{find_mods_files, parse_record_file, read_record_file, write_csv};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Converts every MODS file under `input_folder` into one CSV file.
///
/// Files are discovered recursively and processed in sorted path order. The
/// schema variant is chosen from the first file and used for every row. The
/// CSV is written to `output_folder/output_file_name` only once all rows have
/// been built, so a failed run leaves no output behind.
///
/// # Arguments
///
/// * `input_folder` - Folder containing the MODS XML files
/// * `output_folder` - Folder the CSV is written to (created if missing)
/// * `output_file_name` - File name of the CSV, used as given
///
/// # Errors
///
/// - `DiscoveryError` if the folder is missing or holds no XML files
/// - `ParseError` if a file is not well-formed XML
/// - `DateFormatError` if a date has a repairable shape but is not a valid date
/// - `InvalidInput` if a file name lacks the `<repoCode>_<objectNumber>` form
/// - `IoError` if reading a file or writing the CSV fails
pub fn convert(
    input_folder: &Path,
    output_folder: &Path,
    output_file_name: &str,
) -> AppResult<ConversionSummary> {
    let start = Instant::now();
    let files = discover(input_folder)?;
    let variant = select_variant(&files)?;

    info!(
        input = %input_folder.display(),
        files = files.len(),
        schema = variant.display_name(),
        "Starting conversion"
    );

    let mut rows = Vec::with_capacity(files.len());
    for (index, path) in files.iter().enumerate() {
        let file_name = bare_file_name(path)?;
        let xml = read_record_file(path)?;
        let record = parse_record_file(path, &xml)?;
        rows.push(build_row(&record, variant, index, file_name)?);
        debug!(file = file_name, row = index + 1, "Converted record");
    }

    fs::create_dir_all(output_folder).map_err(|e| {
        AppError::IoError(format!(
            "Failed to create output folder {}: {e}",
            output_folder.display()
        ))
    })?;
    let output_path = output_folder.join(output_file_name);
    let bytes = write_csv(&output_path, &header(variant), &rows)?;

    info!(
        output = %output_path.display(),
        rows = rows.len(),
        bytes,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Conversion completed"
    );

    Ok(ConversionSummary {
        output_path,
        variant,
        rows_written: rows.len(),
    })
}

/// Lists the files a conversion of `input_folder` would process, in order,
/// together with the schema variant it would use.
///
/// # Errors
///
/// Fails like [`convert`] on discovery, or if the first file cannot be parsed.
pub fn preview(input_folder: &Path) -> AppResult<(SchemaVariant, Vec<PathBuf>)> {
    let files = discover(input_folder)?;
    let variant = select_variant(&files)?;
    Ok((variant, files))
}

fn discover(input_folder: &Path) -> AppResult<Vec<PathBuf>> {
    let files = find_mods_files(input_folder)?;
    if files.is_empty() {
        return Err(AppError::DiscoveryError(format!(
            "No XML files found in {}",
            input_folder.display()
        )));
    }
    Ok(files)
}

fn select_variant(files: &[PathBuf]) -> AppResult<SchemaVariant> {
    let first = files
        .first()
        .ok_or_else(|| AppError::DiscoveryError("No files to classify".into()))?;
    let xml = read_record_file(first)?;
    let variant = classify(&parse_record_file(first, &xml)?);
    debug!(
        file = %first.display(),
        schema = variant.display_name(),
        "Schema selected"
    );
    Ok(variant)
}

fn bare_file_name(path: &Path) -> AppResult<&str> {
    path.file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| AppError::InvalidInput(format!("Invalid file name: {}", path.display())))
}
