//! Error types for table construction and mutation.

use thiserror::Error;

/// Errors returned by table, header and row operations.
///
/// A failed operation leaves the table exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A table needs at least one column.
    #[error("column list must not be empty")]
    EmptyColumns,

    #[error("column [{0}] already exists")]
    DuplicateColumn(String),

    #[error("column [{0}] does not exist")]
    ColumnNotFound(String),

    /// A named row referenced a column the header doesn't have.
    #[error("row references unknown column [{0}]")]
    UnknownColumn(String),

    #[error("row has {actual} values but the table has {expected} columns")]
    RowLengthMismatch { expected: usize, actual: usize },

    /// An inserted column must carry one value per existing row.
    #[error("got {actual} values for a table with {expected} rows")]
    ValueCountMismatch { expected: usize, actual: usize },

    #[error("column index {index} is out of range for a header of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Input that is neither a list nor a map of strings.
    #[error("unsupported row shape: {0}")]
    UnsupportedRow(String),

    /// Table options could not be parsed.
    #[error("invalid table options: {0}")]
    Config(String),
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        TableError::Config(err.to_string())
    }
}

impl From<serde_yaml::Error> for TableError {
    fn from(err: serde_yaml::Error) -> Self {
        TableError::Config(err.to_string())
    }
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
