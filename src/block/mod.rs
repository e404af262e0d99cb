//! Single-shot block decompression.
//!
//! A [`BlockCodec`] call produces a raw result, which is either a byte count
//! or an error sentinel. [`classify`] turns it into an [`Outcome`].
mod classify;
mod codec;
mod decompress;
mod outcome;
mod report;

pub use self::classify::classify;
pub use self::codec::{BlockCodec, Zstd};
pub use self::decompress::{
    allocate, decompress, decompress_to_vec, decompress_with, DecompressionError,
};
pub use self::outcome::{ByteCount, ErrorKind, Outcome};
pub use self::report::{Reporter, TracingReporter, VERBOSE_DIAGNOSTICS};
