use std::{io, path::PathBuf};

use thiserror::Error;

/// A raw timestamp that does not match the layout its format requires.
#[derive(Debug, Error)]
#[error("unable to parse time '{value}', expected {expected}")]
pub struct TimestampError {
    pub value: String,
    pub expected: &'static str,
}

/// Everything that can stop a tracklist from being read.
///
/// Only the VirtualDJ "artist - song" split is recoverable, and that case
/// never reaches this type; it goes through [`super::RowRepair`] instead.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("error loading {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("line {line} has no ' : ' between time and track: '{content}'")]
    MissingSeparator { line: usize, content: String },

    #[error("row {row} has {found} fields, expected {expected}")]
    FieldCount {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("missing column '{column}' in header")]
    MissingColumn { column: &'static str },

    #[error("error processing CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: {source}")]
    Timestamp {
        line: usize,
        #[source]
        source: TimestampError,
    },

    #[error("no replacement for malformed track on line {line}: {reason}")]
    Repair { line: usize, reason: String },
}

impl ParseError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ParseError::Open { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
