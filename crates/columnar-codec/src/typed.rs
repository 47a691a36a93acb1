//! Physical-type dispatch over the generic codecs.
//!
//! [`ColumnValues`] holds a raw column whose element type is only known at
//! runtime, tagged by its [`PhysicalType`]. Encoding yields a
//! [`TypedRleColumn`] or [`TypedDictionaryColumn`] with the same variant, and
//! decoding returns a [`ColumnValues`] of that physical type again.

use crate::config::EncodeLimits;
use crate::encoding::{CompressionStats, DictionaryColumn, RleColumn};
use crate::error::{Error, Result};
use crate::physical_type::PhysicalType;

/// A raw column tagged with its physical type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnValues {
    /// 8-bit integers.
    Int8(Vec<i8>),
    /// 16-bit integers.
    Int16(Vec<i16>),
    /// 32-bit integers.
    Int32(Vec<i32>),
    /// 64-bit integers.
    Int64(Vec<i64>),
    /// Byte arrays that must all be `width` bytes long.
    FixedWidthArray {
        /// Width of every element in bytes.
        width: usize,
        /// Elements.
        values: Vec<Vec<u8>>,
    },
    /// Variable-width strings.
    VariableWidth(Vec<String>),
}

impl ColumnValues {
    /// Returns the physical type of the column.
    #[must_use]
    pub fn physical_type(&self) -> PhysicalType {
        match self {
            Self::Int8(_) => PhysicalType::Bit8,
            Self::Int16(_) => PhysicalType::Bit16,
            Self::Int32(_) => PhysicalType::Bit32,
            Self::Int64(_) => PhysicalType::Bit64,
            Self::FixedWidthArray { .. } => PhysicalType::FixedWidthArray,
            Self::VariableWidth(_) => PhysicalType::VariableWidth,
        }
    }

    /// Returns the number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Int8(v) => v.len(),
            Self::Int16(v) => v.len(),
            Self::Int32(v) => v.len(),
            Self::Int64(v) => v.len(),
            Self::FixedWidthArray { values, .. } => values.len(),
            Self::VariableWidth(v) => v.len(),
        }
    }

    /// Returns true if the column has no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks that every fixed-width element has the declared width.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WidthMismatch`] for the first element of the wrong width.
    pub fn validate(&self) -> Result<()> {
        if let Self::FixedWidthArray { width, values } = self {
            if let Some((position, value)) = values
                .iter()
                .enumerate()
                .find(|(_, value)| value.len() != *width)
            {
                return Err(Error::WidthMismatch {
                    expected: *width,
                    actual: value.len(),
                    position,
                });
            }
        }
        Ok(())
    }

    /// Run-length encodes the column with the default limits.
    pub fn rle_encode(&self) -> Result<TypedRleColumn> {
        self.rle_encode_with_limits(&EncodeLimits::default())
    }

    /// Run-length encodes the column.
    pub fn rle_encode_with_limits(&self, limits: &EncodeLimits) -> Result<TypedRleColumn> {
        self.validate()?;
        Ok(match self {
            Self::Int8(v) => TypedRleColumn::Int8(RleColumn::encode_with_limits(v, limits)?),
            Self::Int16(v) => TypedRleColumn::Int16(RleColumn::encode_with_limits(v, limits)?),
            Self::Int32(v) => TypedRleColumn::Int32(RleColumn::encode_with_limits(v, limits)?),
            Self::Int64(v) => TypedRleColumn::Int64(RleColumn::encode_with_limits(v, limits)?),
            Self::FixedWidthArray { width, values } => TypedRleColumn::FixedWidthArray {
                width: *width,
                column: RleColumn::encode_with_limits(values, limits)?,
            },
            Self::VariableWidth(v) => {
                TypedRleColumn::VariableWidth(RleColumn::encode_with_limits(v, limits)?)
            }
        })
    }

    /// Dictionary encodes the column with the default limits.
    pub fn dictionary_encode(&self) -> Result<TypedDictionaryColumn> {
        self.dictionary_encode_with_limits(&EncodeLimits::default())
    }

    /// Dictionary encodes the column.
    pub fn dictionary_encode_with_limits(
        &self,
        limits: &EncodeLimits,
    ) -> Result<TypedDictionaryColumn> {
        self.validate()?;
        Ok(match self {
            Self::Int8(v) => {
                TypedDictionaryColumn::Int8(DictionaryColumn::encode_with_limits(v, limits)?)
            }
            Self::Int16(v) => {
                TypedDictionaryColumn::Int16(DictionaryColumn::encode_with_limits(v, limits)?)
            }
            Self::Int32(v) => {
                TypedDictionaryColumn::Int32(DictionaryColumn::encode_with_limits(v, limits)?)
            }
            Self::Int64(v) => {
                TypedDictionaryColumn::Int64(DictionaryColumn::encode_with_limits(v, limits)?)
            }
            Self::FixedWidthArray { width, values } => TypedDictionaryColumn::FixedWidthArray {
                width: *width,
                column: DictionaryColumn::encode_with_limits(values, limits)?,
            },
            Self::VariableWidth(v) => TypedDictionaryColumn::VariableWidth(
                DictionaryColumn::encode_with_limits(v, limits)?,
            ),
        })
    }
}

/// A run-length encoded column tagged with its physical type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedRleColumn {
    /// 8-bit integers.
    Int8(RleColumn<i8>),
    /// 16-bit integers.
    Int16(RleColumn<i16>),
    /// 32-bit integers.
    Int32(RleColumn<i32>),
    /// 64-bit integers.
    Int64(RleColumn<i64>),
    /// Fixed-width byte arrays.
    FixedWidthArray {
        /// Width of every element in bytes.
        width: usize,
        /// Encoded elements.
        column: RleColumn<Vec<u8>>,
    },
    /// Variable-width strings.
    VariableWidth(RleColumn<String>),
}

impl TypedRleColumn {
    /// Returns the physical type of the column.
    #[must_use]
    pub fn physical_type(&self) -> PhysicalType {
        match self {
            Self::Int8(_) => PhysicalType::Bit8,
            Self::Int16(_) => PhysicalType::Bit16,
            Self::Int32(_) => PhysicalType::Bit32,
            Self::Int64(_) => PhysicalType::Bit64,
            Self::FixedWidthArray { .. } => PhysicalType::FixedWidthArray,
            Self::VariableWidth(_) => PhysicalType::VariableWidth,
        }
    }

    /// Returns the number of values the column decodes to.
    #[must_use]
    pub fn decoded_size(&self) -> usize {
        match self {
            Self::Int8(c) => c.decoded_size(),
            Self::Int16(c) => c.decoded_size(),
            Self::Int32(c) => c.decoded_size(),
            Self::Int64(c) => c.decoded_size(),
            Self::FixedWidthArray { column, .. } => column.decoded_size(),
            Self::VariableWidth(c) => c.decoded_size(),
        }
    }

    /// Returns the number of runs.
    #[must_use]
    pub fn num_runs(&self) -> usize {
        match self {
            Self::Int8(c) => c.num_runs(),
            Self::Int16(c) => c.num_runs(),
            Self::Int32(c) => c.num_runs(),
            Self::Int64(c) => c.num_runs(),
            Self::FixedWidthArray { column, .. } => column.num_runs(),
            Self::VariableWidth(c) => c.num_runs(),
        }
    }

    /// Decodes the column.
    #[must_use]
    pub fn decode(&self) -> ColumnValues {
        match self {
            Self::Int8(c) => ColumnValues::Int8(c.decode()),
            Self::Int16(c) => ColumnValues::Int16(c.decode()),
            Self::Int32(c) => ColumnValues::Int32(c.decode()),
            Self::Int64(c) => ColumnValues::Int64(c.decode()),
            Self::FixedWidthArray { width, column } => ColumnValues::FixedWidthArray {
                width: *width,
                values: column.decode(),
            },
            Self::VariableWidth(c) => ColumnValues::VariableWidth(c.decode()),
        }
    }

    /// Get compression statistics.
    #[must_use]
    pub fn stats(&self) -> CompressionStats {
        match self {
            Self::Int8(c) => c.stats(),
            Self::Int16(c) => c.stats(),
            Self::Int32(c) => c.stats(),
            Self::Int64(c) => c.stats(),
            Self::FixedWidthArray { column, .. } => column.stats(),
            Self::VariableWidth(c) => c.stats(),
        }
    }
}

/// A dictionary encoded column tagged with its physical type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedDictionaryColumn {
    /// 8-bit integers.
    Int8(DictionaryColumn<i8>),
    /// 16-bit integers.
    Int16(DictionaryColumn<i16>),
    /// 32-bit integers.
    Int32(DictionaryColumn<i32>),
    /// 64-bit integers.
    Int64(DictionaryColumn<i64>),
    /// Fixed-width byte arrays.
    FixedWidthArray {
        /// Width of every element in bytes.
        width: usize,
        /// Encoded elements.
        column: DictionaryColumn<Vec<u8>>,
    },
    /// Variable-width strings.
    VariableWidth(DictionaryColumn<String>),
}

impl TypedDictionaryColumn {
    /// Returns the physical type of the column.
    #[must_use]
    pub fn physical_type(&self) -> PhysicalType {
        match self {
            Self::Int8(_) => PhysicalType::Bit8,
            Self::Int16(_) => PhysicalType::Bit16,
            Self::Int32(_) => PhysicalType::Bit32,
            Self::Int64(_) => PhysicalType::Bit64,
            Self::FixedWidthArray { .. } => PhysicalType::FixedWidthArray,
            Self::VariableWidth(_) => PhysicalType::VariableWidth,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            Self::Int8(c) => c.size(),
            Self::Int16(c) => c.size(),
            Self::Int32(c) => c.size(),
            Self::Int64(c) => c.size(),
            Self::FixedWidthArray { column, .. } => column.size(),
            Self::VariableWidth(c) => c.size(),
        }
    }

    /// Returns the number of distinct values.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        match self {
            Self::Int8(c) => c.cardinality(),
            Self::Int16(c) => c.cardinality(),
            Self::Int32(c) => c.cardinality(),
            Self::Int64(c) => c.cardinality(),
            Self::FixedWidthArray { column, .. } => column.cardinality(),
            Self::VariableWidth(c) => c.cardinality(),
        }
    }

    /// Decodes the column.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if the column is corrupt.
    pub fn decode(&self) -> Result<ColumnValues> {
        Ok(match self {
            Self::Int8(c) => ColumnValues::Int8(c.decode()?),
            Self::Int16(c) => ColumnValues::Int16(c.decode()?),
            Self::Int32(c) => ColumnValues::Int32(c.decode()?),
            Self::Int64(c) => ColumnValues::Int64(c.decode()?),
            Self::FixedWidthArray { width, column } => ColumnValues::FixedWidthArray {
                width: *width,
                values: column.decode()?,
            },
            Self::VariableWidth(c) => ColumnValues::VariableWidth(c.decode()?),
        })
    }

    /// Get compression statistics.
    #[must_use]
    pub fn stats(&self) -> CompressionStats {
        match self {
            Self::Int8(c) => c.stats(),
            Self::Int16(c) => c.stats(),
            Self::Int32(c) => c.stats(),
            Self::Int64(c) => c.stats(),
            Self::FixedWidthArray { column, .. } => column.stats(),
            Self::VariableWidth(c) => c.stats(),
        }
    }
}
