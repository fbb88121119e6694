use crate::errors::{AppError, AppResult};
use std::path::{Path, PathBuf};

/// Finds every MODS XML file under `path`, recursively, in processing order.
///
/// Files are ordered by path, component by component, so the order is sorted
/// and depth-first across subdirectories. This order decides row keys and
/// which file selects the schema, so it must be stable across runs.
///
/// # Errors
///
/// Returns a `Discovery` error if `path` is not a readable directory.
pub fn find_mods_files(path: &Path) -> AppResult<Vec<PathBuf>> {
    if !path.is_dir() {
        return Err(AppError::DiscoveryError(format!(
            "Input folder does not exist or is not a directory: {}",
            path.display()
        )));
    }

    // Pre-allocate with conservative estimate (collections are usually tens to hundreds of records)
    let mut files = Vec::with_capacity(64);
    for entry in walkdir::WalkDir::new(path) {
        let entry = entry?;
        if entry.file_type().is_file() && has_xml_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

fn has_xml_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
}
