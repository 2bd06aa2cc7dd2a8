use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::OsStringExt;

use libc::{ENAMETOOLONG, mode_t};
use tracing::{debug, warn};

use super::path::PATH_MAX;
use super::{FsError, OsError, util};

/// The mode requested for new directories, before the process umask is applied.
pub const DIR_MODE: mode_t = 0o777;

/// Returns the absolute path of the current working directory.
pub fn current_dir() -> Result<OsString, OsError> {
    let mut buf = vec![0_u8; PATH_MAX];
    // SAFETY: buf is valid for writes of its whole length, which is the length provided.
    if unsafe { libc::getcwd(buf.as_mut_ptr().cast(), buf.len()) }.is_null() {
        Err(OsError::last_with("."))?
    }
    let len = buf.iter().position(|b| *b == 0).unwrap_or(buf.len());
    buf.truncate(len);
    Ok(OsString::from_vec(buf))
}

/// Changes the working directory to `path`, returning the absolute path of the previous one.
///
/// The previous directory is captured before anything changes. Changing to `.` is a no-op that
/// only reports the current directory. If the change fails, the working directory is left as it
/// was.
pub fn change_dir<P: AsRef<OsStr>>(path: P) -> Result<OsString, FsError> {
    let path = path.as_ref();
    let previous = current_dir()?;

    if path != "." {
        let pathname = util::c_path(path)?;
        // SAFETY: pathname is a valid nul-terminated string.
        if unsafe { libc::chdir(pathname.as_ptr()) } == -1 {
            Err(OsError::last_with(path))?
        }
        debug!(from = ?previous, to = ?path, "changed working directory");
    }

    Ok(previous)
}

/// Creates a link at `new` pointing to `old`, which is symbolic if `symbolic` is set and a hard
/// link otherwise. Failures aren't attributed to either path.
pub fn link<O: AsRef<OsStr>, N: AsRef<OsStr>>(old: O, new: N, symbolic: bool) -> Result<(), FsError> {
    let old_path = util::c_path(old.as_ref())?;
    let new_path = util::c_path(new.as_ref())?;

    // SAFETY: Both paths are valid nul-terminated strings.
    let result = unsafe {
        if symbolic {
            libc::symlink(old_path.as_ptr(), new_path.as_ptr())
        } else {
            libc::link(old_path.as_ptr(), new_path.as_ptr())
        }
    };
    if result == -1 {
        Err(OsError::last())?
    }

    debug!(old = ?old.as_ref(), new = ?new.as_ref(), symbolic, "created link");
    Ok(())
}

/// Creates a directory at `path`, requesting [`DIR_MODE`].
pub fn make_dir<P: AsRef<OsStr>>(path: P) -> Result<(), FsError> {
    let path = path.as_ref();
    let pathname = util::c_path(path)?;

    // SAFETY: pathname is a valid nul-terminated string.
    if unsafe { libc::mkdir(pathname.as_ptr(), DIR_MODE) } == -1 {
        Err(OsError::last_with(path))?
    }

    debug!(path = ?path, "created directory");
    Ok(())
}

/// Reads the target of the symlink at `path`.
///
/// Targets are read into a [`PATH_MAX`] sized buffer. A target that fills the whole buffer may
/// have been truncated, so it is reported as an [`ENAMETOOLONG`] error rather than returned.
pub fn read_link<P: AsRef<OsStr>>(path: P) -> Result<OsString, FsError> {
    let path = path.as_ref();
    let pathname = util::c_path(path)?;

    let mut buf = vec![0_u8; PATH_MAX];
    // SAFETY: pathname is a valid nul-terminated string and buf is valid for writes of its whole
    // length, which is the length provided.
    let count = unsafe { libc::readlink(pathname.as_ptr(), buf.as_mut_ptr().cast(), buf.len()) };

    match usize::try_from(count) {
        Err(_) => Err(OsError::last_with(path).into()),
        Ok(len) if len >= buf.len() => {
            warn!(path = ?path, "symlink target exceeds the maximum path length");
            Err(OsError::new(ENAMETOOLONG, Some(path)).into())
        },
        Ok(len) => {
            buf.truncate(len);
            Ok(OsString::from_vec(buf))
        },
    }
}
