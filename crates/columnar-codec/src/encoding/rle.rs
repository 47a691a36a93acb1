//! Run-length encoding.
//!
//! Collapses each maximal run of equal adjacent values into one stored value
//! and a `u32` run length. Effective on sorted or clustered columns.

use std::iter::FusedIterator;

use super::stats::{CompressionStats, EncodedSize, EncodingKind};
use crate::config::EncodeLimits;
use crate::error::{Error, Result};

/// A run-length encoded column.
///
/// `values` and `lengths` always have the same length, every run length is at
/// least one, and no two adjacent runs hold equal values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RleColumn<T> {
    /// Value of each run, in run order.
    values: Vec<T>,
    /// Length of each run.
    lengths: Vec<u32>,
}

impl<T> Default for RleColumn<T> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            lengths: Vec::new(),
        }
    }
}

impl<T: Eq + Clone> RleColumn<T> {
    /// Encodes `raw` with the default limits.
    ///
    /// Total for every input of at most `u32::MAX` values, including the
    /// empty slice. The `Result` only carries the overflow policy: longer
    /// inputs cannot be described by 32-bit run lengths and are rejected with
    /// [`Error::TooManyValues`] before any scanning.
    pub fn encode(raw: &[T]) -> Result<Self> {
        Self::encode_with_limits(raw, &EncodeLimits::default())
    }

    /// Encodes `raw`, rejecting it up front if it breaches `limits`.
    pub fn encode_with_limits(raw: &[T], limits: &EncodeLimits) -> Result<Self> {
        limits.check_len(raw.len())?;

        let Some((first, rest)) = raw.split_first() else {
            return Ok(Self::default());
        };

        let mut values = Vec::new();
        let mut lengths = Vec::new();
        let mut current = first;
        let mut run_length: u32 = 1;

        for value in rest {
            if value == current {
                run_length += 1;
            } else {
                values.push(current.clone());
                lengths.push(run_length);
                current = value;
                run_length = 1;
            }
        }

        // Flush the trailing run.
        values.push(current.clone());
        lengths.push(run_length);

        tracing::debug!(
            input_len = raw.len(),
            runs = values.len(),
            "run-length encoded column"
        );

        Ok(Self { values, lengths })
    }

    /// Builds a column from previously encoded parts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedRuns`] if the slices differ in length, a run
    /// is empty, or two adjacent runs hold the same value.
    pub fn from_parts(values: Vec<T>, lengths: Vec<u32>) -> Result<Self> {
        if values.len() != lengths.len() {
            return Err(Error::MalformedRuns(format!(
                "{} values but {} run lengths",
                values.len(),
                lengths.len()
            )));
        }
        if let Some(run) = lengths.iter().position(|&len| len == 0) {
            return Err(Error::MalformedRuns(format!("run {run} has length 0")));
        }
        if let Some(run) = values.windows(2).position(|pair| pair[0] == pair[1]) {
            return Err(Error::MalformedRuns(format!(
                "runs {run} and {} hold the same value",
                run + 1
            )));
        }

        Ok(Self { values, lengths })
    }
}

impl<T> RleColumn<T> {
    /// Returns the value of each run.
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns the length of each run.
    #[must_use]
    pub fn lengths(&self) -> &[u32] {
        &self.lengths
    }

    /// Returns the number of runs.
    #[must_use]
    pub fn num_runs(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the column holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of values the column decodes to.
    #[must_use]
    pub fn decoded_size(&self) -> usize {
        self.lengths.iter().map(|&len| len as usize).sum()
    }

    /// Iterates over the decoded values without materializing them.
    #[must_use]
    pub fn iter(&self) -> RleIter<'_, T> {
        RleIter {
            values: &self.values,
            lengths: &self.lengths,
            run: 0,
            emitted_in_run: 0,
            remaining: self.decoded_size(),
        }
    }

    /// Consumes the column, returning `(values, lengths)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, Vec<u32>) {
        (self.values, self.lengths)
    }
}

impl<T: EncodedSize> RleColumn<T> {
    /// Get compression statistics.
    #[must_use]
    pub fn stats(&self) -> CompressionStats {
        let raw_size_bytes = self
            .values
            .iter()
            .zip(&self.lengths)
            .map(|(value, &len)| value.encoded_size() * len as usize)
            .sum();
        let stored_value_bytes = self.values.iter().map(EncodedSize::encoded_size).sum();

        CompressionStats::new(
            EncodingKind::RunLength,
            self.decoded_size(),
            self.num_runs(),
            raw_size_bytes,
            stored_value_bytes,
            self.lengths.len(),
        )
    }
}

impl<T: Clone> RleColumn<T> {
    /// Decodes the column back into the original sequence.
    #[must_use]
    pub fn decode(&self) -> Vec<T> {
        let mut result = Vec::with_capacity(self.decoded_size());

        for (value, &len) in self.values.iter().zip(&self.lengths) {
            result.resize(result.len() + len as usize, value.clone());
        }

        result
    }
}

impl<'a, T> IntoIterator for &'a RleColumn<T> {
    type Item = &'a T;
    type IntoIter = RleIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over the decoded values of an [`RleColumn`].
#[derive(Debug, Clone)]
pub struct RleIter<'a, T> {
    values: &'a [T],
    lengths: &'a [u32],
    run: usize,
    emitted_in_run: u32,
    remaining: usize,
}

impl<'a, T> Iterator for RleIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&len) = self.lengths.get(self.run) {
            if self.emitted_in_run < len {
                self.emitted_in_run += 1;
                self.remaining -= 1;
                return self.values.get(self.run);
            }
            self.run += 1;
            self.emitted_in_run = 0;
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for RleIter<'_, T> {}

impl<T> FusedIterator for RleIter<'_, T> {}
