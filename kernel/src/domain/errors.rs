//! Domain errors - Error types for parsing, lookup and storage failures
//!
//! `ParseError` covers malformed user input and malformed records.
//! `TaskError` is what every fallible collection operation returns.

use std::path::PathBuf;
use thiserror::Error;

/// Error raised when text cannot be turned into a domain value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A record did not split into the expected number of comma fields.
    #[error("expected {expected} comma-separated fields, found {found}")]
    FieldCount {
        /// Number of fields a record must have.
        expected: usize,
        /// Number of fields actually present.
        found: usize,
    },

    /// A date was not in `YYYY-MM-DD` form.
    #[error("invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input.
        value: String,
    },

    /// A priority was not an integer.
    #[error("invalid priority '{value}': expected an integer")]
    InvalidPriority {
        /// The rejected input.
        value: String,
    },

    /// A status field was neither `Complete` nor `Incomplete`.
    #[error("unknown task status '{0}'")]
    UnknownStatus(String),
}

/// Coarse classification of a [`TaskError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed date, integer or record.
    Parse,
    /// A 1-based index outside the collection.
    Index,
    /// An argument with no meaning, such as an unknown sort criteria.
    InvalidArgument,
    /// The file to load does not exist.
    FileNotFound,
    /// Any other file-system failure.
    Io,
}

/// Errors returned by task collection operations.
#[derive(Error, Debug)]
pub enum TaskError {
    /// Input could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A line of a task file could not be parsed.
    #[error("line {line}: {source}")]
    Record {
        /// 1-based line number inside the file.
        line: usize,
        /// What was wrong with the line.
        #[source]
        source: ParseError,
    },

    /// A 1-based index did not name a task.
    #[error("invalid task index {index}: the list has {len} task(s)")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// Number of tasks at the time of the request.
        len: usize,
    },

    /// An argument was not recognised.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The task file does not exist.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Reading or writing the task file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
}

impl TaskError {
    /// Returns the taxonomy bucket for this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) | Self::Record { .. } => ErrorKind::Parse,
            Self::IndexOutOfRange { .. } => ErrorKind::Index,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::FileNotFound(_) => ErrorKind::FileNotFound,
            Self::Io { .. } => ErrorKind::Io,
        }
    }

    /// Builds an I/O error, promoting `NotFound` to [`TaskError::FileNotFound`].
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound(path)
        } else {
            Self::Io { path, source }
        }
    }
}
