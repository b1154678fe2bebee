// C ABI for hosts (e.g. a browser shell) that own the UI and speech I/O.
// Strings returned here are heap-allocated and must be released with
// `pronounce_free_string`.
use crate::core::evaluator::evaluate;
use crate::core::normalizer::normalize;
use crate::core::types::DifficultyMode;
use std::borrow::Cow;
use std::ffi::{c_char, CStr, CString};
use std::panic::catch_unwind;
use std::ptr;

// Invalid UTF-8 degrades to U+FFFD, which normalization then drops.
unsafe fn read_str<'a>(ptr: *const c_char) -> Cow<'a, str> {
    if ptr.is_null() {
        return Cow::Borrowed("");
    }
    CStr::from_ptr(ptr).to_string_lossy()
}

fn into_c_string(s: String) -> *mut c_char {
    // Normalized text and JSON never contain NUL, but guard anyway.
    match CString::new(s) {
        Ok(c) => c.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// # Safety
/// `text` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn pronounce_normalize(text: *const c_char) -> *mut c_char {
    let text = read_str(text);
    let result = catch_unwind(|| normalize(&text));
    match result {
        Ok(normalized) => into_c_string(normalized),
        Err(_) => {
            tracing::error!("panic in pronounce_normalize");
            ptr::null_mut()
        }
    }
}

/// Returns the verdict as `{"correct":..,"bestToken":..,"distance":..,"exact":..}`.
/// An unrecognized `mode` falls back to tolerant.
///
/// # Safety
/// Each argument must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn pronounce_evaluate(
    target: *const c_char,
    heard: *const c_char,
    mode: *const c_char,
) -> *mut c_char {
    let target = read_str(target);
    let heard = read_str(heard);
    let mode: DifficultyMode = read_str(mode).parse().unwrap_or_default();

    let result = catch_unwind(|| {
        let verdict = evaluate(&target, &heard, mode);
        serde_json::to_string(&verdict).unwrap_or_else(|_| "{}".to_string())
    });
    match result {
        Ok(json) => into_c_string(json),
        Err(_) => {
            tracing::error!("panic in pronounce_evaluate");
            ptr::null_mut()
        }
    }
}

/// # Safety
/// `s` must be null or a pointer previously returned by this module.
#[no_mangle]
pub unsafe extern "C" fn pronounce_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = CString::from_raw(s);
    }
}
