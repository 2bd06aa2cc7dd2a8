use std::ffi::{CStr, OsStr, OsString};
use std::iter::FusedIterator;
use std::os::unix::ffi::OsStrExt;

use derive_more::Display;
use tracing::{debug, warn};

use crate::fs::util::{self, DirStream};
use crate::fs::{ClosedDirectoryError, FsError, OsError};

/// An open directory, producing the names of its entries. See the [module docs](super) for when
/// the underlying stream is released.
#[derive(Debug)]
pub struct Directory {
    stream: Option<DirStream>,
    path: OsString,
}

/// What caused a directory stream to be released, for diagnostics.
#[derive(Debug, Display, Clone, Copy)]
enum Release {
    #[display("close")]
    Close,
    #[display("exhausted")]
    Exhausted,
    #[display("error")]
    Error,
    #[display("drop")]
    Drop,
}

impl Directory {
    pub fn open<P: AsRef<OsStr>>(dir_path: P) -> Result<Directory, FsError> {
        let path = dir_path.as_ref();
        let pathname = util::c_path(path)?;

        let stream = DirStream::open(&pathname).map_err(|code| OsError::new(code, Some(path)))?;
        debug!(path = ?path, "opened directory stream");

        Ok(Directory {
            stream: Some(stream),
            path: path.to_owned(),
        })
    }

    /// Opens the current working directory.
    pub fn open_cwd() -> Result<Directory, FsError> {
        Directory::open(".")
    }

    pub fn path(&self) -> &OsStr {
        &self.path
    }

    pub const fn is_closed(&self) -> bool {
        self.stream.is_none()
    }

    /// Returns the name of the next entry, skipping `.` and `..`.
    ///
    /// When there are no entries left, the stream is released and `Ok(None)` is returned. Once that
    /// has happened (or the directory has been closed), this method fails with a
    /// [`ClosedDirectoryError`].
    pub fn next_entry(&mut self) -> Result<Option<OsString>, FsError> {
        let stream = self.stream.as_mut().ok_or(ClosedDirectoryError)?;

        let read = loop {
            match stream.read() {
                Ok(Some(name)) if is_self_or_parent(name) => continue,
                Ok(Some(name)) => break Ok(Some(OsStr::from_bytes(name.to_bytes()).to_owned())),
                Ok(None) => break Ok(None),
                Err(code) => break Err(code),
            }
        };

        match read {
            Ok(Some(name)) => Ok(Some(name)),
            Ok(None) => {
                if let Err(e) = self.release(Release::Exhausted) {
                    warn!(error = %e, "failed to release exhausted directory stream");
                }
                Ok(None)
            },
            Err(code) => {
                if let Err(e) = self.release(Release::Error) {
                    warn!(error = %e, "failed to release directory stream after read error");
                }
                Err(OsError::new(code, Some(&self.path)).into())
            },
        }
    }

    /// Releases the underlying stream, if it hasn't been already. Closing an already closed
    /// directory does nothing.
    pub fn close(&mut self) -> Result<(), FsError> {
        Ok(self.release(Release::Close)?)
    }

    fn release(&mut self, trigger: Release) -> Result<(), OsError> {
        match self.stream.take() {
            Some(stream) => {
                debug!(path = ?self.path, %trigger, "released directory stream");
                stream.close().map_err(|code| OsError::new(code, Some(&self.path)))
            },
            None => Ok(()),
        }
    }
}

impl Iterator for Directory {
    type Item = Result<OsString, FsError>;

    /// Adapts [`Directory::next_entry`] to the iterator protocol. Unlike `next_entry`, a closed
    /// directory simply ends the iteration.
    fn next(&mut self) -> Option<Self::Item> {
        if self.is_closed() {
            return None;
        }
        self.next_entry().transpose()
    }
}

impl FusedIterator for Directory {}

impl Drop for Directory {
    fn drop(&mut self) {
        if let Err(e) = self.release(Release::Drop) {
            warn!(error = %e, "failed to release dropped directory stream");
        }
    }
}

fn is_self_or_parent(name: &CStr) -> bool {
    matches!(name.to_bytes(), b"." | b"..")
}
