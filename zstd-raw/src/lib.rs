//! Raw single-shot zstd decompression.
//!
//! Every function here is a direct call into libzstd, results are
//! returned exactly as the library reports them.
use std::ffi::{c_void, CStr};

/// Decompresses one or more complete frames from `src` into `dst`.
///
/// Returns either the number of bytes written to `dst` or an error code,
/// use [`is_error`] to tell them apart.
pub fn decompress(src: &[u8], dst: &mut [u8]) -> usize {
    unsafe {
        zstd_sys::ZSTD_decompress(
            dst.as_mut_ptr() as *mut c_void,
            dst.len(),
            src.as_ptr() as *const c_void,
            src.len(),
        )
    }
}

pub fn is_error(rc: usize) -> bool {
    unsafe { zstd_sys::ZSTD_isError(rc) != 0 }
}

/// Human readable name of a result code, `"No error detected"` for results
/// which are not errors.
pub fn error_name(rc: usize) -> &'static str {
    // SAFETY: libzstd returns pointers to static, nul terminated strings.
    let name = unsafe { CStr::from_ptr(zstd_sys::ZSTD_getErrorName(rc)) };
    name.to_str().unwrap_or("Unspecified error code")
}
