//! Error types for Oryx database.

use alloc::string::String;
use core::fmt;

/// Result type alias for Oryx operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for Oryx database operations.
#[derive(Debug)]
pub enum Error {
    /// Table not found.
    TableNotFound {
        name: String,
    },
    /// A table with this name already exists.
    DuplicateTable {
        name: String,
    },
    /// An index with this name already exists on the table.
    DuplicateIndex {
        table: String,
        index: String,
    },
    /// Invalid schema definition.
    InvalidSchema {
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TableNotFound { name } => {
                write!(f, "Table not found: {}", name)
            }
            Error::DuplicateTable { name } => {
                write!(f, "Table already exists: {}", name)
            }
            Error::DuplicateIndex { table, index } => {
                write!(f, "Index {} already exists on table {}", index, table)
            }
            Error::InvalidSchema { message } => {
                write!(f, "Invalid schema: {}", message)
            }
        }
    }
}

impl Error {
    /// Creates a table not found error.
    pub fn table_not_found(name: impl Into<String>) -> Self {
        Error::TableNotFound { name: name.into() }
    }

    /// Creates a duplicate table error.
    pub fn duplicate_table(name: impl Into<String>) -> Self {
        Error::DuplicateTable { name: name.into() }
    }

    /// Creates a duplicate index error.
    pub fn duplicate_index(table: impl Into<String>, index: impl Into<String>) -> Self {
        Error::DuplicateIndex {
            table: table.into(),
            index: index.into(),
        }
    }

    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Self {
        Error::InvalidSchema {
            message: message.into(),
        }
    }
}
