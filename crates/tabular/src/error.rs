//! Error types for table construction and rendering.

use thiserror::Error;

/// Failures produced by table construction and the printing entry points.
///
/// Two classification kinds cover everything the callers can get wrong;
/// `Io` passes through sink failures unchanged.
#[derive(Debug, Error)]
pub enum TableError {
    /// The input had the wrong shape or was empty where content is
    /// required.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A row's column count does not match the header count.
    #[error("row {row} has {found} columns, expected {expected}")]
    DimensionMismatch {
        /// Zero-based index of the offending row.
        row: usize,
        /// Columns the row actually has.
        found: usize,
        /// Columns the headers require.
        expected: usize,
    },

    /// The output sink failed.
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

impl TableError {
    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
