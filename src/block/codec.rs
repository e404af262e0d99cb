/// A single-shot block decompressor.
///
/// The raw result of [`BlockCodec::decompress`] is either the amount of bytes
/// written to the destination or an error sentinel, only
/// [`BlockCodec::is_error`] can tell them apart.
pub trait BlockCodec {
    fn decompress(&self, src: &[u8], dst: &mut [u8]) -> usize;

    fn is_error(&self, rc: usize) -> bool;

    /// Human readable description of a raw result.
    fn error_name(&self, rc: usize) -> &'static str;
}

/// Zstandard, backed by libzstd.
#[derive(Debug, Default, Clone, Copy)]
pub struct Zstd;

impl BlockCodec for Zstd {
    fn decompress(&self, src: &[u8], dst: &mut [u8]) -> usize {
        zstd_raw::decompress(src, dst)
    }

    fn is_error(&self, rc: usize) -> bool {
        zstd_raw::is_error(rc)
    }

    fn error_name(&self, rc: usize) -> &'static str {
        zstd_raw::error_name(rc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zstd_codec() {
        let src = zstd::bulk::compress(b"ABCABC", 3).unwrap();
        let mut dst = [0u8; 6];

        let rc = Zstd.decompress(&src, &mut dst);

        assert!(!Zstd.is_error(rc));
        assert_eq!(rc, 6);
        assert_eq!(&dst, b"ABCABC");
    }

    #[test]
    fn zstd_codec_error() {
        let src = zstd::bulk::compress(b"ABCABC", 3).unwrap();

        let rc = Zstd.decompress(&src, &mut []);

        assert!(Zstd.is_error(rc));
        assert!(!Zstd.error_name(rc).is_empty());
    }
}
