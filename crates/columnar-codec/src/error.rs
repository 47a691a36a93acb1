//! Error types for the column codecs.
//!
//! Decoding can only fail on a corrupt dictionary column. Encoding fails only
//! when an input breaches the configured [`EncodeLimits`](crate::EncodeLimits).

use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in codec operations.
///
/// Error codes follow the pattern `COLC-XXX` and are stable across releases.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Dictionary index points past the end of the dictionary (COLC-001).
    ///
    /// The column is corrupt. Nothing decoded before the failure is usable.
    #[error("[COLC-001] Dictionary index {index} at position {position} is out of range (dictionary has {dictionary_len} entries)")]
    IndexOutOfRange {
        /// The offending index value.
        index: u32,
        /// Row position of the offending index.
        position: usize,
        /// Number of entries in the dictionary.
        dictionary_len: usize,
    },

    /// Input has more values than a 32-bit count can address (COLC-002).
    #[error("[COLC-002] Cannot encode {len} values: limit is {max}")]
    TooManyValues {
        /// Input length.
        len: usize,
        /// Configured maximum.
        max: usize,
    },

    /// Distinct value count exceeds the dictionary limit (COLC-003).
    #[error("[COLC-003] Dictionary overflow: more than {max} distinct values")]
    DictionaryOverflow {
        /// Configured maximum number of dictionary entries.
        max: usize,
    },

    /// Run values and lengths do not describe a valid RLE column (COLC-004).
    #[error("[COLC-004] Malformed runs: {0}")]
    MalformedRuns(String),

    /// Element of a fixed-width array column has the wrong width (COLC-005).
    #[error("[COLC-005] Width mismatch at position {position}: expected {expected} bytes, got {actual}")]
    WidthMismatch {
        /// Declared element width.
        expected: usize,
        /// Width of the offending element.
        actual: usize,
        /// Row position of the offending element.
        position: usize,
    },

    /// Configuration error (COLC-006).
    #[error("[COLC-006] Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns the error code (e.g., "COLC-001").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::IndexOutOfRange { .. } => "COLC-001",
            Self::TooManyValues { .. } => "COLC-002",
            Self::DictionaryOverflow { .. } => "COLC-003",
            Self::MalformedRuns(_) => "COLC-004",
            Self::WidthMismatch { .. } => "COLC-005",
            Self::Config(_) => "COLC-006",
        }
    }

    /// Returns true if this error signals corrupt encoded data.
    ///
    /// Corruption is never transient; retrying the same decode fails again.
    #[must_use]
    pub const fn is_corruption(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. } | Self::MalformedRuns(_))
    }
}

impl From<crate::config::ConfigError> for Error {
    fn from(err: crate::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
