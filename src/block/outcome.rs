use std::fmt;

/// Kinds of failure a block decompression can end in.
///
/// Every kind has a stable negative code, see [`ErrorKind::code`].
/// Only [`ErrorKind::Unknown`] and [`ErrorKind::SizeTooLarge`] are produced by
/// single-shot decompression, the remaining kinds belong to context and
/// dictionary based codec calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("codec reported an error")]
    Unknown,
    #[error("decompressed size does not fit into the result")]
    SizeTooLarge,
    #[error("failed to allocate a compression context")]
    AllocateCompressionContext,
    #[error("failed to allocate a decompression context")]
    AllocateDecompressionContext,
    #[error("failed to load a compression dictionary")]
    LoadCompressionDictionary,
    #[error("failed to load a decompression dictionary")]
    LoadDecompressionDictionary,
}

impl ErrorKind {
    pub const fn code(self) -> i32 {
        match self {
            Self::Unknown => -1,
            Self::SizeTooLarge => -2,
            Self::AllocateCompressionContext => -3,
            Self::AllocateDecompressionContext => -4,
            Self::LoadCompressionDictionary => -5,
            Self::LoadDecompressionDictionary => -6,
        }
    }

    pub const fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            -1 => Self::Unknown,
            -2 => Self::SizeTooLarge,
            -3 => Self::AllocateCompressionContext,
            -4 => Self::AllocateDecompressionContext,
            -5 => Self::LoadCompressionDictionary,
            -6 => Self::LoadDecompressionDictionary,
            _ => return None,
        })
    }
}

/// Amount of decompressed bytes, always in `0..i32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteCount(i32);

impl ByteCount {
    /// Narrows a codec byte count, `None` if it is `i32::MAX` or larger.
    pub fn new(n: usize) -> Option<Self> {
        match i32::try_from(n) {
            Ok(n) if n < i32::MAX => Some(Self(n)),
            _ => None,
        }
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }

    pub fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ByteCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Classified result of a single decompression call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Decompressed(ByteCount),
    Failed(ErrorKind),
}

impl Outcome {
    /// Integer encoding of the outcome.
    ///
    /// Non-negative values are the amount of decompressed bytes,
    /// negative values are [`ErrorKind`] codes.
    pub fn code(self) -> i32 {
        match self {
            Self::Decompressed(n) => n.as_i32(),
            Self::Failed(kind) => kind.code(),
        }
    }

    /// Reverse of [`Outcome::code`].
    pub fn from_code(code: i32) -> Option<Self> {
        if code >= 0 {
            ByteCount::new(code as usize).map(Self::Decompressed)
        } else {
            ErrorKind::from_code(code).map(Self::Failed)
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Self::Decompressed(_))
    }

    pub fn into_result(self) -> Result<ByteCount, ErrorKind> {
        match self {
            Self::Decompressed(n) => Ok(n),
            Self::Failed(kind) => Err(kind),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.code(), f)
    }
}
