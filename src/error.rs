//! Unified error types for vostats.
//!
//! A single [`VostatsError`] enum covers every failure mode in the crate,
//! with a crate-wide [`Result`] alias. Library users get typed variants to
//! match on; the CLI turns them into readable messages.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for vostats operations.
pub type Result<T> = std::result::Result<T, VostatsError>;

/// The error type for all vostats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VostatsError {
    /// An I/O error occurred.
    ///
    /// Typically the input export does not exist, or the output
    /// directory is not writable.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A line did not match the export format.
    ///
    /// Only raised in strict parsing mode; otherwise malformed lines are
    /// skipped and counted.
    #[error("line {line}: malformed export line: {message}")]
    MalformedLine {
        /// 1-based line number in the input file.
        line: usize,
        /// Description of what did not match.
        message: String,
    },

    /// The file contained no parsable message lines at all.
    ///
    /// Usually means the file is not a chat export in the expected
    /// `DD-MM-YYYY HH:MM - Sender: content` format.
    #[error("invalid export format: {message}")]
    InvalidFormat {
        /// Description of what's wrong.
        message: String,
    },

    /// Year range for a comparison chart was not ascending.
    #[error("invalid year range: base year {base} must be before {later}")]
    InvalidYearRange {
        /// The base (earlier) year that was requested.
        base: i32,
        /// The later year that was requested.
        later: i32,
    },

    /// A chart was requested for an empty leaderboard.
    #[error("no data to chart for {what}")]
    NoData {
        /// Description of the empty selection (e.g. "2019 correct").
        what: String,
    },

    /// The chart backend failed while drawing or writing the image.
    #[error("chart rendering failed: {0}")]
    Chart(String),
}

impl VostatsError {
    /// Creates an invalid format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        VostatsError::InvalidFormat {
            message: message.into(),
        }
    }

    /// Creates a malformed line error for strict parsing mode.
    pub fn malformed_line(line: usize, message: impl Into<String>) -> Self {
        VostatsError::MalformedLine {
            line,
            message: message.into(),
        }
    }

    /// Creates a no-data error for an empty chart selection.
    pub fn no_data(what: impl Into<String>) -> Self {
        VostatsError::NoData { what: what.into() }
    }
}
