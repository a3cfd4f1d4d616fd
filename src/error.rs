// ⚠️ Error types - parsing a persisted line, saving and restoring a store

use std::io;
use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;
use thiserror::Error;

/// A persisted line could not be turned back into a Product
#[derive(Debug, Error)]
pub enum ParseError {
    /// Wrong number of fields (an empty line has 0)
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("invalid price '{value}': {source}")]
    InvalidPrice {
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("invalid quantity '{value}': {source}")]
    InvalidQuantity {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// The line is not well-formed CSV (bad quoting); `position` is a byte offset
    #[error("malformed line at byte {position}: {reason}")]
    Malformed { position: usize, reason: String },
}

/// Failure of a store persistence operation
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backing file could not be opened, read or written
    #[error("I/O error on {path}: {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Restore stopped at the first bad line (1-based)
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },

    /// A name cannot be represented in a line-oriented file
    #[error("product name {0:?} contains a line break")]
    UnencodableName(String),

    /// The csv writer rejected a record. Writing to memory does not fail
    /// today, but `Product::to_csv_line` keeps the writer's fallible API.
    #[error("failed to encode product '{name}': {source}")]
    Encode {
        name: String,
        #[source]
        source: csv::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    /// Line number for parse failures
    pub fn line(&self) -> Option<usize> {
        match self {
            StoreError::Parse { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
