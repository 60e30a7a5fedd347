use thiserror::Error;


#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// Non-empty rows of unequal length at construction
    #[error("all rows must have the same length (row {row} has {found} cells, expected {expected})")]
    MalformedGrid {
        row: usize,
        found: usize,
        expected: usize,
    },

    /// A query was called with arguments that violate its preconditions
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
