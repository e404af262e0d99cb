use std::collections::TryReserveError;

use super::{
    classify::classify,
    codec::{BlockCodec, Zstd},
    outcome::{ErrorKind, Outcome},
    report::Reporter,
};

#[derive(Debug, thiserror::Error)]
pub enum DecompressionError {
    #[error("failed to allocate {size} bytes for the decompressed data")]
    Allocation {
        size: usize,
        #[source]
        source: TryReserveError,
    },
    #[error("failed to decompress with error {code}: {0}", code = .0.code())]
    Codec(#[from] ErrorKind),
}

/// Decompresses zstd frames from `src` into `dst` with a single call.
///
/// Returns the amount of decompressed bytes, or a negative
/// [`ErrorKind`] code.
pub fn decompress(src: &[u8], dst: &mut [u8]) -> i32 {
    decompress_with(&Zstd, src, dst, None).code()
}

/// Decompresses `src` into `dst` using `codec` and classifies the result.
///
/// `dst` must be large enough to hold the entire decompressed data, the
/// codec does not make partial progress.
pub fn decompress_with<C>(
    codec: &C,
    src: &[u8],
    dst: &mut [u8],
    reporter: Option<&mut dyn Reporter>,
) -> Outcome
where
    C: BlockCodec + ?Sized,
{
    let rc = codec.decompress(src, dst);
    let outcome = classify(codec, rc, reporter);

    tracing::trace!(
        src = src.len(),
        dst = dst.len(),
        "decompressed block with result {outcome}"
    );

    outcome
}

/// Allocates a zeroed destination buffer of `size` bytes without aborting
/// on allocation failure.
pub fn allocate(size: usize) -> Result<Vec<u8>, DecompressionError> {
    let mut content = Vec::new();
    content
        .try_reserve_exact(size)
        .map_err(|source| DecompressionError::Allocation { size, source })?;
    content.resize(size, 0);
    Ok(content)
}

/// Decompresses zstd frames from `src` into a new buffer of at most
/// `capacity` bytes.
///
/// The returned buffer is truncated to the decompressed size.
pub fn decompress_to_vec(src: &[u8], capacity: usize) -> Result<Vec<u8>, DecompressionError> {
    let mut content = allocate(capacity)?;
    let n = decompress_with(&Zstd, src, &mut content, None).into_result()?;
    content.truncate(n.get());

    Ok(content)
}
