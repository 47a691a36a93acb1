//! Dictionary encoding.
//!
//! Replaces every value with a compact `u32` index into a list of the
//! distinct values. Ideal for columns with low cardinality (e.g., country,
//! category), whatever their order.

use rustc_hash::FxHashMap;
use std::hash::Hash;

use super::stats::{CompressionStats, EncodedSize, EncodingKind};
use crate::config::EncodeLimits;
use crate::error::{Error, Result};

/// A dictionary encoded column.
///
/// The dictionary lists distinct values in first-occurrence order. Columns
/// built by [`encode`](Self::encode) only hold valid indices; columns built by
/// [`from_parts`](Self::from_parts) are checked lazily, on decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryColumn<T> {
    /// Distinct values, in first-occurrence order.
    dictionary: Vec<T>,
    /// One dictionary position per row.
    indices: Vec<u32>,
}

impl<T> Default for DictionaryColumn<T> {
    fn default() -> Self {
        Self {
            dictionary: Vec::new(),
            indices: Vec::new(),
        }
    }
}

impl<T: Hash + Eq + Clone> DictionaryColumn<T> {
    /// Encodes `raw` with the default limits.
    ///
    /// Total for every input of at most `u32::MAX` values, including the
    /// empty slice. The `Result` only carries the overflow policy: longer
    /// inputs cannot be addressed by 32-bit indices and are rejected with
    /// [`Error::TooManyValues`] before any scanning.
    pub fn encode(raw: &[T]) -> Result<Self> {
        Self::encode_with_limits(raw, &EncodeLimits::default())
    }

    /// Encodes `raw`, failing fast if it breaches `limits`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooManyValues`] before scanning if `raw` is too long,
    /// or [`Error::DictionaryOverflow`] once a new distinct value would push
    /// the dictionary past its limit.
    pub fn encode_with_limits(raw: &[T], limits: &EncodeLimits) -> Result<Self> {
        limits.check_len(raw.len())?;
        let max_entries = limits.effective_max_dictionary_entries();

        // Keys borrow from `raw`; each distinct value is cloned once, into the dictionary.
        let mut positions: FxHashMap<&T, u32> = FxHashMap::default();
        let mut dictionary = Vec::new();
        let mut indices = Vec::with_capacity(raw.len());

        for value in raw {
            let index = match positions.get(value) {
                Some(&index) => index,
                None => {
                    if dictionary.len() >= max_entries {
                        tracing::warn!(max = max_entries, "encode rejected: dictionary overflow");
                        return Err(Error::DictionaryOverflow { max: max_entries });
                    }
                    // Bounded by `max_entries`, which never exceeds u32::MAX.
                    let index = u32::try_from(dictionary.len())
                        .map_err(|_| Error::DictionaryOverflow { max: max_entries })?;
                    positions.insert(value, index);
                    dictionary.push(value.clone());
                    index
                }
            };
            indices.push(index);
        }

        tracing::debug!(
            input_len = raw.len(),
            cardinality = dictionary.len(),
            "dictionary encoded column"
        );

        Ok(Self {
            dictionary,
            indices,
        })
    }
}

impl<T> DictionaryColumn<T> {
    /// Builds a column from previously encoded parts.
    ///
    /// Indices are not validated here; [`decode`](Self::decode) and
    /// [`get`](Self::get) report out-of-range indices as corruption.
    #[must_use]
    pub fn from_parts(dictionary: Vec<T>, indices: Vec<u32>) -> Self {
        Self {
            dictionary,
            indices,
        }
    }

    /// Returns the distinct values, in first-occurrence order.
    #[must_use]
    pub fn dictionary(&self) -> &[T] {
        &self.dictionary
    }

    /// Returns the per-row dictionary indices.
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns the number of rows, i.e. the decoded length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.indices.len()
    }

    /// Returns the number of distinct values.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.dictionary.len()
    }

    /// Returns true if the column holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the value at row `position`, or `None` past the last row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if the row's index is corrupt.
    pub fn get(&self, position: usize) -> Result<Option<&T>> {
        match self.indices.get(position) {
            Some(&index) => self.lookup(index, position).map(Some),
            None => Ok(None),
        }
    }

    /// Consumes the column, returning `(dictionary, indices)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, Vec<u32>) {
        (self.dictionary, self.indices)
    }

    fn lookup(&self, index: u32, position: usize) -> Result<&T> {
        self.dictionary.get(index as usize).ok_or_else(|| {
            tracing::warn!(
                index,
                position,
                dictionary_len = self.dictionary.len(),
                "corrupt dictionary index"
            );
            Error::IndexOutOfRange {
                index,
                position,
                dictionary_len: self.dictionary.len(),
            }
        })
    }
}

impl<T: EncodedSize> DictionaryColumn<T> {
    /// Get compression statistics.
    ///
    /// Rows whose index is out of range contribute nothing to the raw size.
    #[must_use]
    pub fn stats(&self) -> CompressionStats {
        let entry_sizes: Vec<usize> = self
            .dictionary
            .iter()
            .map(EncodedSize::encoded_size)
            .collect();
        let raw_size_bytes = self
            .indices
            .iter()
            .filter_map(|&index| entry_sizes.get(index as usize))
            .sum();

        CompressionStats::new(
            EncodingKind::Dictionary,
            self.size(),
            self.cardinality(),
            raw_size_bytes,
            entry_sizes.iter().sum(),
            self.indices.len(),
        )
    }
}

impl<T: Clone> DictionaryColumn<T> {
    /// Decodes the column back into the original sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] for the first index past the end of
    /// the dictionary. No partial output is returned.
    pub fn decode(&self) -> Result<Vec<T>> {
        let mut result = Vec::with_capacity(self.indices.len());

        for (position, &index) in self.indices.iter().enumerate() {
            result.push(self.lookup(index, position)?.clone());
        }

        Ok(result)
    }
}
