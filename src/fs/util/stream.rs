use std::ffi::CStr;
use std::ptr::NonNull;

use libc::{DIR, c_int};

use crate::fs::util;

#[cfg(test)]
thread_local! {
    /// The number of directory streams released by the current thread.
    pub(crate) static RELEASED_STREAMS: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

/// An owned `DIR*`. The only way to release the stream is [`DirStream::close`], which consumes it;
/// the owner is responsible for calling it.
#[derive(Debug)]
pub(crate) struct DirStream(NonNull<DIR>);

impl DirStream {
    pub fn open(pathname: &CStr) -> Result<DirStream, c_int> {
        // SAFETY: pathname is a valid nul-terminated string.
        match NonNull::new(unsafe { libc::opendir(pathname.as_ptr()) }) {
            Some(dir) => Ok(DirStream(dir)),
            None => Err(util::err_no()),
        }
    }

    /// Reads the next entry's name from the stream, or `None` if there aren't any left. The name
    /// is only valid until the next read, which the borrow enforces.
    pub fn read(&mut self) -> Result<Option<&CStr>, c_int> {
        // readdir only reports errors through errno, leaving it untouched at the end of a stream.
        util::clear_err_no();
        // SAFETY: self.0 is an open stream, owned exclusively by self.
        let entry = unsafe { libc::readdir(self.0.as_ptr()) };
        if entry.is_null() {
            return match util::err_no() {
                0 => Ok(None),
                e => Err(e),
            };
        }
        // SAFETY: readdir returned a valid entry, with a nul-terminated d_name, that isn't
        // overwritten until the next call on this stream.
        Ok(Some(unsafe { CStr::from_ptr((*entry).d_name.as_ptr()) }))
    }

    pub fn close(self) -> Result<(), c_int> {
        // SAFETY: self.0 is an open stream, and closedir invalidates it regardless of the outcome,
        // which is fine because self is consumed here.
        let result = unsafe { libc::closedir(self.0.as_ptr()) };
        count_release();
        match result {
            -1 => Err(util::err_no()),
            _ => Ok(()),
        }
    }
}

#[inline(always)]
fn count_release() {
    #[cfg(test)]
    RELEASED_STREAMS.with(|count| count.set(count.get() + 1));
}
