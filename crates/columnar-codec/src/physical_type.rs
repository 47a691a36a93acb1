//! Physical storage type labels.
//!
//! A [`PhysicalType`] classifies how a column's elements are laid out. The
//! codecs do not interpret it; it only selects which element type a caller
//! instantiates them with.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an unknown physical type name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown physical type '{0}'")]
pub struct ParsePhysicalTypeError(pub String);

/// Physical types supported by the column store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhysicalType {
    /// 8-bit integer.
    Bit8,
    /// 16-bit integer.
    Bit16,
    /// 32-bit integer.
    Bit32,
    /// 64-bit integer.
    Bit64,
    /// Array of bytes with the same width for every element.
    FixedWidthArray,
    /// Variable-width elements (e.g., strings).
    VariableWidth,
}

impl PhysicalType {
    /// All physical types, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Bit8,
        Self::Bit16,
        Self::Bit32,
        Self::Bit64,
        Self::FixedWidthArray,
        Self::VariableWidth,
    ];

    /// Returns the element width in bytes for integer types.
    ///
    /// Array widths are per-column, so array and variable-width types return `None`.
    #[must_use]
    pub const fn fixed_width(&self) -> Option<usize> {
        match self {
            Self::Bit8 => Some(1),
            Self::Bit16 => Some(2),
            Self::Bit32 => Some(4),
            Self::Bit64 => Some(8),
            Self::FixedWidthArray | Self::VariableWidth => None,
        }
    }

    /// Returns true for the integer types.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        self.fixed_width().is_some()
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bit8 => "bit8",
            Self::Bit16 => "bit16",
            Self::Bit32 => "bit32",
            Self::Bit64 => "bit64",
            Self::FixedWidthArray => "fixed_width_array",
            Self::VariableWidth => "variable_width",
        }
    }
}

impl fmt::Display for PhysicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhysicalType {
    type Err = ParsePhysicalTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParsePhysicalTypeError(s.to_string()))
    }
}
