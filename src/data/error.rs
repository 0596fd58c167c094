use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong turning a file into a [`MatchDataset`].
///
/// [`MatchDataset`]: super::model::MatchDataset
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// The source file does not exist.
    #[error("source file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("workbook contains no worksheets")]
    EmptyWorkbook,

    /// A column the dashboard depends on is absent from the header.
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    /// A cell in a numeric column holds something that is not a number.
    #[error("row {row}: column '{column}' is not a number ({value:?})")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("row {row}: {message}")]
    Malformed { row: usize, message: String },

    #[error("spreadsheet error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}

pub type Result<T> = std::result::Result<T, DataLoadError>;
