use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("CSV parsing system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("Region dataset format error: {0}")]
    DatasetFormatError(String),

    // Malformed arguments to value-producing calls such as test ID generation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Negative byte count: {0}")]
    NegativeSize(i64),

    #[error("Size parse error: {0}")]
    SizeParseError(String),

    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ToolkitError>;
