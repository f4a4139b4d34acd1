// C entry points. Payloads cross the boundary as JSON strings that the
// caller releases with `kannada_free_string`. Panics are caught here.
use crate::core::engine::PhonologyEngine;
use crate::pairs::finder::DiscardRegistry;
use libc::c_char;
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;

fn read_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn into_c_string(s: String) -> *mut c_char {
    CString::new(s).map(CString::into_raw).unwrap_or(ptr::null_mut())
}

fn word_json(word: &str) -> Option<String> {
    let engine = PhonologyEngine::new().ok()?;
    match engine.word2phonemes(word) {
        Ok(w) => serde_json::to_string(&w).ok(),
        Err(e) => {
            log::warn!("[c_api] {}", e);
            None
        }
    }
}

fn pair_json(left: &str, right: &str) -> Option<String> {
    let left: Vec<String> = serde_json::from_str(left).ok()?;
    let right: Vec<String> = serde_json::from_str(right).ok()?;
    let engine = PhonologyEngine::new().ok()?;
    let pair = engine.find_minimal_pair(&left, &right, &mut DiscardRegistry::new());
    serde_json::to_string(&pair.as_ref().map(|p| p.as_tuple())).ok()
}

/// Tokenizes a Kannada word. Returns the word as JSON, or null on failure.
#[no_mangle]
pub extern "C" fn kannada_word_to_phonemes(word: *const c_char) -> *mut c_char {
    let Some(word) = read_str(word) else {
        return ptr::null_mut();
    };
    let result = catch_unwind(AssertUnwindSafe(|| word_json(word)));
    match result {
        Ok(Some(json)) => into_c_string(json),
        Ok(None) => ptr::null_mut(),
        Err(_) => {
            log::error!("[c_api] panic in kannada_word_to_phonemes");
            ptr::null_mut()
        }
    }
}

/// Compares two JSON arrays of IPA symbols. Returns `["a","b"]` for an
/// accepted minimal pair, `null` otherwise, or a null pointer on bad input.
#[no_mangle]
pub extern "C" fn kannada_find_minimal_pair(left: *const c_char, right: *const c_char) -> *mut c_char {
    let (Some(left), Some(right)) = (read_str(left), read_str(right)) else {
        return ptr::null_mut();
    };
    match catch_unwind(AssertUnwindSafe(|| pair_json(left, right))) {
        Ok(Some(json)) => into_c_string(json),
        Ok(None) => ptr::null_mut(),
        Err(_) => {
            log::error!("[c_api] panic in kannada_find_minimal_pair");
            ptr::null_mut()
        }
    }
}

#[no_mangle]
pub extern "C" fn kannada_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}
