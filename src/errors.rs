// errors.rs
use thiserror::Error;

/// Everything that can abort a report run. Missing values inside otherwise
/// valid data are never errors; they are filled with defaults by the loader.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} fetching {url}")]
    Status { status: u16, url: String },

    #[error("Unexpected content: {0}")]
    Signature(String),

    #[error("Workbook error: {0}")]
    Excel(#[from] calamine::XlsxError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    #[error("Row {row}: unparsable completion time '{value}'")]
    InvalidTimestamp { row: usize, value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ReportResult<T> = Result<T, ReportError>;
