use std::ffi::{CStr, CString, OsStr};
use std::io;
use std::os::unix::ffi::OsStrExt;

use libc::{c_char, c_int};

use crate::fs::NulByteError;

const STRERROR_BUFFER_SIZE: usize = 256;

pub fn err_no() -> c_int {
    // Zero if nothing has set errno since it was last cleared.
    io::Error::last_os_error().raw_os_error().unwrap_or_default()
}

pub fn clear_err_no() {
    // SAFETY: __errno_location always returns a valid pointer to the calling thread's errno.
    unsafe { *libc::__errno_location() = 0 };
}

/// Translates an `errno` value into the system's description of it.
pub fn strerror(code: c_int) -> String {
    let mut buf = [0 as c_char; STRERROR_BUFFER_SIZE];
    // SAFETY: buf is valid for writes of its whole length, which is the length provided. The XSI
    // strerror_r always nul-terminates on success.
    if unsafe { libc::strerror_r(code, buf.as_mut_ptr(), buf.len()) } != 0 {
        return format!("Unknown error {code}");
    }
    // SAFETY: strerror_r succeeded, so buf holds a nul-terminated string.
    unsafe { CStr::from_ptr(buf.as_ptr()) }.to_string_lossy().into_owned()
}

/// Copies `path` into a nul-terminated string that can be handed to the OS.
pub fn c_path(path: &OsStr) -> Result<CString, NulByteError> {
    CString::new(path.as_bytes()).map_err(|_| NulByteError)
}
