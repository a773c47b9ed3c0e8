//! Statement domain errors

use std::fmt;

use thiserror::Error;

/// The two positional line-item collections of a statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCollection {
    Trips,
    Deductions,
}

impl fmt::Display for LineCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineCollection::Trips => write!(f, "trips"),
            LineCollection::Deductions => write!(f, "deductions"),
        }
    }
}

/// Errors that can occur in the statement domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatementError {
    /// A positional update addressed a row that does not exist
    #[error("Index {index} out of range for {collection} (len {len})")]
    IndexOutOfRange {
        collection: LineCollection,
        index: usize,
        len: usize,
    },

    /// A field name did not match any known field
    #[error("Unknown {kind} field: {name}")]
    UnknownField {
        kind: &'static str,
        name: String,
    },
}
