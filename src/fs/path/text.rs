use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::{OsStrExt, OsStringExt};

use crate::fs::PathLengthError;

/// The longest path, including its nul terminator, that the OS accepts.
pub const PATH_MAX: usize = libc::PATH_MAX as usize;

/// Returns the final component of `path`, ignoring trailing slashes.
///
/// An empty path produces `.`, while a path consisting only of slashes produces `/`.
///
/// # Errors
/// Paths of [`PATH_MAX`] bytes or more are rejected with a [`PathLengthError`].
pub fn basename<P: AsRef<OsStr>>(path: P) -> Result<OsString, PathLengthError> {
    let buf = bounded_copy(path.as_ref())?;
    if buf.is_empty() {
        return Ok(OsString::from("."));
    }

    let trimmed = trim_trailing_slashes(&buf);
    if trimmed.is_empty() {
        return Ok(OsString::from("/"));
    }

    let start = trimmed.iter().rposition(|b| *b == b'/').map_or(0, |i| i + 1);
    Ok(OsString::from_vec(trimmed[start..].to_vec()))
}

/// Returns everything but the final component of `path`, ignoring trailing slashes.
///
/// A path without any slashes produces `.` (as does an empty one), while the parent of a top
/// level entry, or of the root itself, is `/`.
///
/// # Errors
/// Paths of [`PATH_MAX`] bytes or more are rejected with a [`PathLengthError`].
pub fn dirname<P: AsRef<OsStr>>(path: P) -> Result<OsString, PathLengthError> {
    let buf = bounded_copy(path.as_ref())?;
    let trimmed = trim_trailing_slashes(&buf);

    let parent: &[u8] = match trimmed.iter().rposition(|b| *b == b'/') {
        _ if buf.is_empty() => b".",
        _ if trimmed.is_empty() => b"/",
        None => b".",
        Some(sep) => match trim_trailing_slashes(&trimmed[..sep]) {
            [] => b"/",
            head => head,
        },
    };
    Ok(OsString::from_vec(parent.to_vec()))
}

// Work on a copy so that the caller's value is never touched, rejecting anything that wouldn't fit
// in a PATH_MAX sized buffer.
fn bounded_copy(path: &OsStr) -> Result<Vec<u8>, PathLengthError> {
    let bytes = path.as_bytes();
    if bytes.len() >= PATH_MAX {
        Err(PathLengthError)?
    }
    Ok(bytes.to_vec())
}

fn trim_trailing_slashes(bytes: &[u8]) -> &[u8] {
    match bytes.iter().rposition(|b| *b != b'/') {
        Some(last) => &bytes[..=last],
        None => &[],
    }
}
