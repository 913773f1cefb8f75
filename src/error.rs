use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type used across loading, aggregation and writing.
pub type RarefactionResult<T> = Result<T, RarefactionError>;

/// Error type returned by every stage of both pipelines.
///
/// A single enum is shared by the CSV and JSONP paths so callers can report any failure the
/// same way. No variant is recoverable: any error aborts the run before output is written.
#[derive(Debug, Error)]
pub enum RarefactionError {
    /// Underlying I/O error while reading input (e.g. file not found, permission denied).
    #[error("failed to read input: {0}")]
    InputRead(#[from] std::io::Error),

    /// Input could not be interpreted (bad header, non-integer count, invalid JSON, ...).
    #[error("parse error: {message}")]
    Parse { message: String },

    /// A CSV cell inside a full iteration window is not an integer.
    #[error("failed to parse value at row {row} column {column}: {message} (raw='{raw}')")]
    InvalidCount {
        row: usize,
        column: usize,
        raw: String,
        message: String,
    },

    /// A JSONP record lacks the fields needed to compute a mean.
    #[error("malformed record #{index} ({group}): {message}")]
    MalformedRecord {
        index: usize,
        group: String,
        message: String,
    },

    /// JSONP groups report different depth sequences.
    #[error("depths don't match: group '{group}' has depths {found:?}, expected {expected:?}")]
    InconsistentDepths {
        group: String,
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// The number of full iteration windows in a CSV row differs from the header depth count.
    #[error(
        "row {row} ({sample}) yields {windows} windows of {iterations} iterations \
         but the header declares {depths} depths"
    )]
    WindowMismatch {
        row: usize,
        sample: String,
        windows: usize,
        iterations: usize,
        depths: usize,
    },

    /// A caller-supplied option is out of range.
    #[error("invalid option: {message}")]
    InvalidOption { message: String },

    /// The output table could not be written.
    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RarefactionError {
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}

/// I/O failures underneath the CSV reader stay `InputRead`; everything else the reader rejects
/// (invalid UTF-8, malformed quoting) is a parse error.
impl From<csv::Error> for RarefactionError {
    fn from(e: csv::Error) -> Self {
        if !e.is_io_error() {
            return Self::parse(format!("invalid csv: {e}"));
        }
        match e.into_kind() {
            csv::ErrorKind::Io(io) => Self::InputRead(io),
            kind => Self::parse(format!("invalid csv: {kind:?}")),
        }
    }
}

impl From<serde_json::Error> for RarefactionError {
    fn from(e: serde_json::Error) -> Self {
        Self::parse(format!("invalid json payload: {e}"))
    }
}
