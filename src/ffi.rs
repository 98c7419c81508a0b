//! C FFI bindings for sqldigest.
//!
//! Mirrors the original's pointer/buffer contract from
//! `mysql_query_digest_and_first_comment` / `mysql_query_strip_comments` /
//! `c_split_2`, layered over the safe Rust API. Enable with the `c-api`
//! feature.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use crate::Config;

/// Create a new configuration object with default values.
///
/// Must be freed with [`sqldigest_config_free`].
#[unsafe(no_mangle)]
pub extern "C" fn sqldigest_config_new() -> *mut Config {
    Box::into_raw(Box::new(Config::default()))
}

/// Free a configuration object.
///
/// # Safety
/// - `cfg` must be a pointer returned by [`sqldigest_config_new`], or NULL.
/// - Do not use `cfg` after calling this function.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sqldigest_config_free(cfg: *mut Config) {
    unsafe {
        if !cfg.is_null() {
            drop(Box::from_raw(cfg));
        }
    }
}

/// Set `max_query_length`.
///
/// # Safety
/// - `cfg` must be a valid pointer to [`Config`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sqldigest_config_set_max_query_length(cfg: *mut Config, value: usize) {
    unsafe {
        if let Some(cfg) = cfg.as_mut() {
            cfg.max_query_length = value;
        }
    }
}

/// Set `lowercase`.
///
/// # Safety
/// - `cfg` must be a valid pointer to [`Config`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sqldigest_config_set_lowercase(cfg: *mut Config, value: bool) {
    unsafe {
        if let Some(cfg) = cfg.as_mut() {
            cfg.lowercase = value;
        }
    }
}

/// Set `replace_null`.
///
/// # Safety
/// - `cfg` must be a valid pointer to [`Config`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sqldigest_config_set_replace_null(cfg: *mut Config, value: bool) {
    unsafe {
        if let Some(cfg) = cfg.as_mut() {
            cfg.replace_null = value;
        }
    }
}

/// Set `no_digits`.
///
/// # Safety
/// - `cfg` must be a valid pointer to [`Config`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sqldigest_config_set_no_digits(cfg: *mut Config, value: bool) {
    unsafe {
        if let Some(cfg) = cfg.as_mut() {
            cfg.no_digits = value;
        }
    }
}

/// Set `grouping_limit`.
///
/// # Safety
/// - `cfg` must be a valid pointer to [`Config`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sqldigest_config_set_grouping_limit(cfg: *mut Config, value: usize) {
    unsafe {
        if let Some(cfg) = cfg.as_mut() {
            cfg.grouping_limit = value;
        }
    }
}

/// Digest a NUL-terminated SQL string.
///
/// The input is treated as a raw byte stream, not required to be valid
/// UTF-8 (the engine has no Unicode handling; see spec's Non-goals).
///
/// # Safety
/// - `s` must be a valid NUL-terminated byte string, or NULL.
/// - `cfg` must be a valid pointer to [`Config`], or NULL for defaults.
/// - `first_comment_out`, if non-NULL, receives a freshly allocated,
///   NUL-terminated string (freed with [`sqldigest_free`]) when the
///   input contains a `/* ... */` comment, and is left untouched
///   otherwise. The caller must initialize `*first_comment_out` to NULL
///   before the call if it wants to reliably detect "no comment found".
/// - The returned string must be freed with [`sqldigest_free`].
/// - Returns NULL on NULL input or allocation failure.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sqldigest_digest(
    s: *const c_char,
    cfg: *const Config,
    first_comment_out: *mut *mut c_char,
) -> *mut c_char {
    unsafe {
        if s.is_null() {
            return ptr::null_mut();
        }
        let bytes = CStr::from_ptr(s).to_bytes();
        let default_cfg = Config::default();
        let cfg = if cfg.is_null() { &default_cfg } else { &*cfg };

        match crate::digest_with_first_comment(bytes, cfg) {
            Ok((bytes, first_comment)) => {
                if !first_comment_out.is_null() {
                    if let Some(comment) = first_comment {
                        if let Ok(c) = CString::new(comment) {
                            *first_comment_out = c.into_raw();
                        }
                    }
                }
                CString::new(bytes).map(CString::into_raw).unwrap_or(ptr::null_mut())
            }
            Err(_) => ptr::null_mut(),
        }
    }
}

/// Strip comments from a NUL-terminated SQL string without replacing
/// any literal.
///
/// The input is treated as a raw byte stream, not required to be valid
/// UTF-8.
///
/// # Safety
/// - `s` must be a valid NUL-terminated byte string, or NULL.
/// - `cfg` must be a valid pointer to [`Config`], or NULL for defaults.
/// - The returned string must be freed with [`sqldigest_free`].
/// - Returns NULL on NULL input or allocation failure.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sqldigest_strip_comments(s: *const c_char, cfg: *const Config) -> *mut c_char {
    unsafe {
        if s.is_null() {
            return ptr::null_mut();
        }
        let bytes = CStr::from_ptr(s).to_bytes();
        let default_cfg = Config::default();
        let cfg = if cfg.is_null() { &default_cfg } else { &*cfg };

        match crate::strip_comments(bytes, cfg) {
            Ok(bytes) => CString::new(bytes).map(CString::into_raw).unwrap_or(ptr::null_mut()),
            Err(_) => ptr::null_mut(),
        }
    }
}

/// Split a NUL-terminated string into its first two delimiter-separated
/// fields, ignoring empty fields.
///
/// The input and delimiter set are treated as raw byte streams, not
/// required to be valid UTF-8.
///
/// # Safety
/// - `s` and `delimiters` must be valid NUL-terminated byte strings.
/// - `out1`/`out2` must be valid, non-NULL pointers to receive freshly
///   allocated, NUL-terminated strings (freed with [`sqldigest_free`]);
///   an empty string is written if the corresponding field is absent.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sqldigest_split2(
    s: *const c_char,
    delimiters: *const c_char,
    out1: *mut *mut c_char,
    out2: *mut *mut c_char,
) {
    unsafe {
        if s.is_null() || delimiters.is_null() || out1.is_null() || out2.is_null() {
            return;
        }
        let bytes = CStr::from_ptr(s).to_bytes();
        let delims = CStr::from_ptr(delimiters).to_bytes();

        let (a, b) = crate::split_2(bytes, delims);
        *out1 = CString::new(a).unwrap_or_default().into_raw();
        *out2 = CString::new(b).unwrap_or_default().into_raw();
    }
}

/// Free a string allocated by this library.
///
/// # Safety
/// - `s` must be a string returned by this library, or NULL.
/// - Do not use `s` after calling this function.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sqldigest_free(s: *mut c_char) {
    unsafe {
        if !s.is_null() {
            drop(CString::from_raw(s));
        }
    }
}

/// Get the library version string.
///
/// Returns a static string, do not free.
#[unsafe(no_mangle)]
pub extern "C" fn sqldigest_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}
