//! # Columnar Codec
//!
//! In-memory column encodings for a column-oriented data store.
//!
//! Two independent, lossless encodings are provided, both generic over the
//! element type:
//!
//! - **Run-length encoding** ([`RleColumn`]): collapses consecutive repeated
//!   values into `(value, run length)` pairs. Best on sorted or clustered data.
//! - **Dictionary encoding** ([`DictionaryColumn`]): stores each distinct value
//!   once, in first-occurrence order, plus one `u32` index per row. Best on
//!   low-cardinality data regardless of order.
//!
//! Encoded columns are immutable after construction and can be decoded any
//! number of times, from any number of threads.
//!
//! ## Quick Start
//!
//! ```rust
//! use columnar_codec::{DictionaryColumn, RleColumn};
//!
//! let rle = RleColumn::encode(&[5, 5, 5, 2, 2, 9])?;
//! assert_eq!(rle.values(), &[5, 2, 9]);
//! assert_eq!(rle.lengths(), &[3, 2, 1]);
//! assert_eq!(rle.decode(), vec![5, 5, 5, 2, 2, 9]);
//!
//! let dict = DictionaryColumn::encode(&["fr", "es", "fr", "it"])?;
//! assert_eq!(dict.dictionary(), &["fr", "es", "it"]);
//! assert_eq!(dict.indices(), &[0, 1, 0, 2]);
//! assert_eq!(dict.decode()?, vec!["fr", "es", "fr", "it"]);
//! # Ok::<(), columnar_codec::Error>(())
//! ```
//!
//! ## Physical types
//!
//! Callers that only know a column's [`PhysicalType`] at runtime can go
//! through [`ColumnValues`], which dispatches to the right instantiation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)] // Acceptable for size ratios
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

pub mod config;
pub mod encoding;
pub mod error;
pub mod physical_type;
pub mod typed;
#[cfg(test)]
mod typed_tests;

pub use config::{CodecConfig, ConfigError, EncodeLimits};
pub use encoding::{
    CompressionStats, DictionaryColumn, EncodedSize, EncodingKind, RleColumn, RleIter,
};
pub use error::{Error, Result};
pub use physical_type::{ParsePhysicalTypeError, PhysicalType};
pub use typed::{ColumnValues, TypedDictionaryColumn, TypedRleColumn};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
