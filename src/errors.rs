use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Input folder missing, unreadable or without MODS files
    #[error("Discovery error: {0}")]
    DiscoveryError(String),
    /// Malformed XML in a specific file
    #[error("Parse error: {0}")]
    ParseError(String),
    /// A date matched a known malformed shape but is not a real calendar date
    #[error("Date format error in {file}: '{raw}' is not a valid date")]
    DateFormatError { file: String, raw: String },
    /// Invalid input format (file names, configuration values)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Regex compilation failed
    #[error("Regex error: {0}")]
    RegexError(String),
    /// Selector parsing failed
    #[error("Selector error: {0}")]
    SelectorError(String),
    /// CSV serialization failed
    #[error("CSV error: {0}")]
    CsvError(String),
    /// IO operation failed
    #[error("IO error: {0}")]
    IoError(String),
}

impl AppError {
    /// Attaches a file name to a date error raised without one.
    pub(crate) fn in_file(self, file: &str) -> Self {
        match self {
            AppError::DateFormatError { raw, .. } => AppError::DateFormatError {
                file: file.to_string(),
                raw,
            },
            other => other,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<roxmltree::Error> for AppError {
    fn from(err: roxmltree::Error) -> Self {
        AppError::ParseError(err.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::CsvError(err.to_string())
    }
}

impl From<walkdir::Error> for AppError {
    fn from(err: walkdir::Error) -> Self {
        AppError::DiscoveryError(err.to_string())
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::RegexError(err.to_string())
    }
}

// Custom type alias for Results in this application
pub type AppResult<T> = Result<T, AppError>;
