//! Error types for the Emporium library.
//!
//! Transforms fail in exactly two ways: a required column is absent, or a
//! non-table argument is outside its domain. The remaining variants belong to
//! table construction and CSV I/O.

use std::convert::Infallible;

use thiserror::Error;

/// A specialized Result type for Emporium operations.
pub type EmporiumResult<T> = Result<T, EmporiumError>;

/// The main error type for Emporium operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmporiumError {
    /// One or more required columns are absent from the table.
    #[error("Missing column: '{column}' (missing: {})", .missing.join(", "))]
    MissingColumn {
        /// First missing column, in the order requested.
        column: String,
        /// Every missing column, in the order requested.
        missing: Vec<String>,
    },

    /// A non-table argument is outside its permitted domain.
    #[error("Invalid argument {name} = '{value}': {reason}")]
    InvalidArgument {
        /// Argument name.
        name: String,
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A column does not have the table's row count.
    #[error("Column '{column}' has {actual} rows, table has {expected}")]
    ColumnLength {
        /// Offending column.
        column: String,
        /// Row count of the table.
        expected: usize,
        /// Row count of the column.
        actual: usize,
    },

    /// Numeric access to a text column.
    #[error("Column '{column}' is not numeric")]
    NonNumericColumn {
        /// Offending column.
        column: String,
    },

    /// I/O failure.
    #[error("IO error: {0}")]
    Io(String),

    /// CSV parse or write failure.
    #[error("CSV error: {0}")]
    Csv(String),
}

impl EmporiumError {
    /// Creates a missing column error from the list of absent names.
    ///
    /// The list must be non-empty; the first entry is reported as `column`.
    #[must_use]
    pub fn missing_columns(missing: Vec<String>) -> Self {
        Self::MissingColumn {
            column: missing.first().cloned().unwrap_or_default(),
            missing,
        }
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(
        name: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Returns true for the missing column kind.
    #[must_use]
    pub fn is_missing_column(&self) -> bool {
        matches!(self, Self::MissingColumn { .. })
    }

    /// Returns true for the invalid argument kind.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

impl From<Infallible> for EmporiumError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

impl From<std::io::Error> for EmporiumError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for EmporiumError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}
