//! FFI bindings for Orate
//!
//! C-compatible entry points for embedding the engine in host apps. All
//! functions use null-terminated C strings and return allocated memory that
//! must be freed by the caller using `orate_free_string`.

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use crate::encoder::ReportEncoder;
use crate::report::generate_performance_report;
use crate::session::parse_session;
use crate::ENGINE_VERSION;

// Thread-local storage for the last error message
thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Helper to convert C string to Rust string
unsafe fn cstr_to_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string())
}

/// Helper to convert Rust string to C string (caller must free)
fn string_to_cstr(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(cstr) => cstr.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Analyze a session JSON payload and return a report envelope as JSON.
///
/// # Safety
/// - `session_json` must be a valid null-terminated C string.
/// - Returns a newly allocated string that must be freed with
///   `orate_free_string`.
/// - Returns NULL on error; call `orate_last_error` for the message.
#[no_mangle]
pub unsafe extern "C" fn orate_analyze_session(session_json: *const c_char) -> *mut c_char {
    clear_last_error();

    let json = match cstr_to_string(session_json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid session JSON pointer");
            return ptr::null_mut();
        }
    };

    let input = match parse_session(&json) {
        Ok(input) => input,
        Err(e) => {
            set_last_error(&e.to_string());
            return ptr::null_mut();
        }
    };

    let report = generate_performance_report(&input);
    match ReportEncoder::new().encode_to_json(&report) {
        Ok(envelope_json) => string_to_cstr(&envelope_json),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

/// Get the last error message, or NULL when the last call succeeded.
///
/// # Safety
/// - The returned pointer is owned by thread-local storage and must NOT be
///   freed; it is valid until the next FFI call on this thread.
#[no_mangle]
pub unsafe extern "C" fn orate_last_error() -> *const c_char {
    LAST_ERROR.with(|e| {
        e.borrow()
            .as_ref()
            .map(|cstr| cstr.as_ptr())
            .unwrap_or(ptr::null())
    })
}

/// Free a string returned by this library.
///
/// # Safety
/// - `s` must be a pointer returned by an `orate_*` function, or NULL.
#[no_mangle]
pub unsafe extern "C" fn orate_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

/// Engine version string.
///
/// # Safety
/// - Returns a newly allocated string that must be freed with
///   `orate_free_string`.
#[no_mangle]
pub unsafe extern "C" fn orate_version() -> *mut c_char {
    string_to_cstr(ENGINE_VERSION)
}
