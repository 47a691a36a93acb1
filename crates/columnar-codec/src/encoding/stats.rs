//! Size estimates for encoded columns.

use serde::{Deserialize, Serialize};
use std::mem::size_of;

/// Which encoding produced a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodingKind {
    /// Run-length encoding.
    RunLength,
    /// Dictionary encoding.
    Dictionary,
}

/// Payload size of a single column value, used for [`CompressionStats`].
///
/// Fixed-width values report their width; variable-width values report the
/// bytes they own (a `String`'s UTF-8 length, a `Vec<u8>`'s length), not
/// their in-memory header.
pub trait EncodedSize {
    /// Number of payload bytes this value occupies.
    fn encoded_size(&self) -> usize;
}

macro_rules! fixed_encoded_size {
    ($($ty:ty),* $(,)?) => {
        $(
            impl EncodedSize for $ty {
                fn encoded_size(&self) -> usize {
                    size_of::<$ty>()
                }
            }
        )*
    };
}

fixed_encoded_size!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, bool, char);

impl EncodedSize for String {
    fn encoded_size(&self) -> usize {
        self.len()
    }
}

impl EncodedSize for str {
    fn encoded_size(&self) -> usize {
        self.len()
    }
}

impl EncodedSize for Vec<u8> {
    fn encoded_size(&self) -> usize {
        self.len()
    }
}

impl EncodedSize for [u8] {
    fn encoded_size(&self) -> usize {
        self.len()
    }
}

impl<T: EncodedSize + ?Sized> EncodedSize for &T {
    fn encoded_size(&self) -> usize {
        (**self).encoded_size()
    }
}

/// Compression statistics.
///
/// Sizes count value payload (see [`EncodedSize`]) plus four bytes per run
/// length or index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressionStats {
    /// Encoding that produced the column.
    pub encoding: EncodingKind,
    /// Number of values in the decoded column.
    pub total_values: usize,
    /// Number of stored values (runs or dictionary entries).
    pub encoded_entries: usize,
    /// Payload size of the decoded column in bytes.
    pub raw_size_bytes: usize,
    /// Payload size of the encoded column in bytes.
    pub encoded_size_bytes: usize,
    /// Compression ratio (raw / encoded), `0.0` for an empty column.
    pub compression_ratio: f64,
}

impl CompressionStats {
    pub(crate) fn new(
        encoding: EncodingKind,
        total_values: usize,
        encoded_entries: usize,
        raw_size_bytes: usize,
        stored_value_bytes: usize,
        count_words: usize,
    ) -> Self {
        let encoded_size_bytes = stored_value_bytes + count_words * size_of::<u32>();

        let compression_ratio = if encoded_size_bytes > 0 {
            raw_size_bytes as f64 / encoded_size_bytes as f64
        } else {
            0.0
        };

        Self {
            encoding,
            total_values,
            encoded_entries,
            raw_size_bytes,
            encoded_size_bytes,
            compression_ratio,
        }
    }
}
