use std::path::PathBuf;
use thiserror::Error;

/// Why a single input line could not be turned into a [`Reading`].
///
/// [`Reading`]: crate::models::Reading
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line did not split into exactly a timestamp and a count.
    #[error("expected 2 whitespace-separated fields, found {0}")]
    FieldCount(usize),

    /// The timestamp token is not an ISO-8601 date-time.
    #[error("invalid timestamp: {0}")]
    Timestamp(String),

    /// The count token is not a non-negative integer.
    #[error("invalid count: {0}")]
    Count(String),
}

/// All errors produced by the traffic counter.
#[derive(Error, Debug)]
pub enum TrafficError {
    /// The input file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A non-blank input line was malformed. `line` is 1-based.
    #[error("Malformed reading on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },

    /// The windowed analysis was asked for more readings than exist.
    #[error("Need at least {required} readings, but only got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// The report could not be serialized.
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TrafficError {
    /// `true` when the input itself was malformed.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, TrafficError::Parse { .. })
    }

    /// `true` when more readings are needed for the requested window.
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, TrafficError::InsufficientData { .. })
    }
}

/// Convenience alias used throughout the traffic crates.
pub type Result<T> = std::result::Result<T, TrafficError>;
