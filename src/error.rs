use std::path::PathBuf;

use thiserror::Error;

/// Why a sales input was rejected by the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputReason {
    /// No input was supplied at all.
    Null,
    /// The container holds zero elements.
    Empty,
    /// The container is not a numeric sequence, labeled pairs or numeric column.
    UnsupportedType { found: String },
    /// A value is NaN, infinite or missing.
    NonFinite { index: usize },
    /// The same label appears twice.
    DuplicateLabel { label: String },
}

impl InvalidInputReason {
    /// Stable machine-readable reason string.
    pub fn as_str(&self) -> &'static str {
        match self {
            InvalidInputReason::Null => "null",
            InvalidInputReason::Empty => "empty",
            InvalidInputReason::UnsupportedType { .. } => "unsupported_type",
            InvalidInputReason::NonFinite { .. } => "non_finite",
            InvalidInputReason::DuplicateLabel { .. } => "duplicate_label",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid input ({}): {reason}", .reason.as_str())]
pub struct InvalidInputError {
    pub reason: InvalidInputReason,
}

impl InvalidInputError {
    pub fn new(reason: InvalidInputReason) -> Self {
        Self { reason }
    }

    pub fn null() -> Self {
        Self::new(InvalidInputReason::Null)
    }

    pub fn empty() -> Self {
        Self::new(InvalidInputReason::Empty)
    }

    pub fn reason(&self) -> &'static str {
        self.reason.as_str()
    }
}

impl std::fmt::Display for InvalidInputReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidInputReason::Null => write!(f, "no data was provided"),
            InvalidInputReason::Empty => write!(f, "the data set is empty"),
            InvalidInputReason::UnsupportedType { found } => {
                write!(f, "unsupported data type `{found}`")
            }
            InvalidInputReason::NonFinite { index } => {
                write!(f, "value at position {index} is not a finite number")
            }
            InvalidInputReason::DuplicateLabel { label } => {
                write!(f, "label `{label}` appears more than once")
            }
        }
    }
}

/// Errors raised while loading data files or settings.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Excel error: {0}")]
    Excel(#[from] calamine::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported file format: .{0}")]
    UnsupportedFormat(String),

    #[error("No data found in {0}")]
    NoData(PathBuf),

    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
}

pub type Result<T> = std::result::Result<T, DataError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
