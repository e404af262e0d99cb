use super::{
    codec::BlockCodec,
    outcome::{ByteCount, ErrorKind, Outcome},
    report::{self, Reporter},
};

/// Classifies the raw result `rc` of a `codec` call.
///
/// Errors flagged by the codec become [`ErrorKind::Unknown`], byte counts
/// of `i32::MAX` or more become [`ErrorKind::SizeTooLarge`]. Failures are passed on to `reporter`, or to
/// the default reporter when built with verbose diagnostics.
pub fn classify<C>(codec: &C, rc: usize, reporter: Option<&mut dyn Reporter>) -> Outcome
where
    C: BlockCodec + ?Sized,
{
    if codec.is_error(rc) {
        report::emit(reporter, |r| r.codec_error(rc, codec.error_name(rc)));
        return Outcome::Failed(ErrorKind::Unknown);
    }

    match ByteCount::new(rc) {
        Some(n) => Outcome::Decompressed(n),
        None => {
            report::emit(reporter, |r| r.size_error(rc, codec.error_name(rc)));
            Outcome::Failed(ErrorKind::SizeTooLarge)
        }
    }
}
