use crate::constants::CSV_EXTENSION;
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for one conversion run, from the command line or a TOML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Folder searched recursively for MODS XML files
    pub input: PathBuf,
    /// Folder the CSV is written to
    pub output_dir: PathBuf,
    /// CSV file name; defaults to the input folder's name
    pub output_file: Option<String>,
}

impl ConversionConfig {
    /// The CSV file name to write.
    ///
    /// Uses `output_file` if set, otherwise the input folder's name. A name
    /// not ending in `.csv` gets the extension appended.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if no name is given and the input folder has none
    /// (for example `/`).
    pub fn resolve_output_file(&self) -> AppResult<String> {
        let name = match &self.output_file {
            Some(name) => name.clone(),
            None => folder_name(&self.input)?,
        };

        if has_csv_extension(&name) {
            Ok(name)
        } else {
            Ok(format!("{name}.{CSV_EXTENSION}"))
        }
    }
}

fn has_csv_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(CSV_EXTENSION))
}

fn folder_name(path: &Path) -> AppResult<String> {
    let named = match path.file_name() {
        Some(_) => path.to_path_buf(),
        // `.` and `..` only have a name once resolved
        None => fs::canonicalize(path)?,
    };
    named
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| {
            AppError::InvalidInput(format!(
                "Cannot derive an output file name from {}",
                path.display()
            ))
        })
}

/// Conversion settings loaded from a TOML file.
///
/// ```toml
/// input = "collections/klhs_photographs"
/// output_dir = "out"
/// output_file = "klhs_photographs.csv"   # optional
/// ```
///
/// Unknown keys are rejected to catch typos.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConversionConfigFile {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    #[serde(default)]
    pub output_file: Option<String>,
}

impl ConversionConfigFile {
    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, and `InvalidInput` if the TOML is
    /// malformed, a required key is missing, an unknown key is present, or a
    /// value is empty.
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: ConversionConfigFile = toml::from_str(&contents)
            .map_err(|e| AppError::InvalidInput(format!("Failed to parse config: {e}")))?;

        if config.input.as_os_str().is_empty() {
            return Err(AppError::InvalidInput("input must not be empty".into()));
        }
        if config.output_dir.as_os_str().is_empty() {
            return Err(AppError::InvalidInput("output_dir must not be empty".into()));
        }
        if config.output_file.as_deref().is_some_and(|f| f.trim().is_empty()) {
            return Err(AppError::InvalidInput(
                "output_file must not be empty when given".into(),
            ));
        }

        Ok(config)
    }
}

impl From<ConversionConfigFile> for ConversionConfig {
    fn from(file: ConversionConfigFile) -> Self {
        Self {
            input: file.input,
            output_dir: file.output_dir,
            output_file: file.output_file,
        }
    }
}
