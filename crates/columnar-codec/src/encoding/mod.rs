//! Column encodings.
//!
//! - Run-length encoding for consecutive duplicates
//! - Dictionary encoding for repeated values
//!
//! Both are lossless: decoding reproduces the encoded sequence exactly,
//! order and multiplicity included.

mod dictionary;
mod rle;
mod stats;

pub use dictionary::DictionaryColumn;
pub use rle::{RleColumn, RleIter};
pub use stats::{CompressionStats, EncodedSize, EncodingKind};

#[cfg(test)]
mod proptests;
