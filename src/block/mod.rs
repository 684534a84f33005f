//! LZ4 block compression and decompression.
//!
//! Layered bottom-up: [`types`] (constants, readers, hash) → [`varint`]
//! (length extensions) → [`token`] (sequence encode/parse) →
//! `match_finder` → [`compress`] / [`decompress`].

pub mod compress;
pub mod decompress;
pub(crate) mod match_finder;
pub(crate) mod sink;
pub mod token;
pub mod types;
pub mod varint;

// Re-export the most important public API items at the module level.
pub use compress::{compress, compress_bound, compress_fast, compress_into};
pub use decompress::{decompress, decompress_into, decompress_to_slice, decompress_with_limit};
pub use token::{Match, Sequence, SequenceReader};
pub use types::{DISTANCE_MAX, LASTLITERALS, MFLIMIT, MINMATCH};
