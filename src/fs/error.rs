use std::ffi::{OsStr, OsString};
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant};
use libc::c_int;

use crate::attr::BadOptionError;
use crate::fs::util;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("too long")]
pub struct PathLengthError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("path contains a nul byte")]
pub struct NulByteError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("closed directory")]
pub struct ClosedDirectoryError;

/// An error caused by the arguments of a call rather than the state of the filesystem. Retrying
/// won't help.
#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, IsVariant)]
pub enum ValidationError {
    BadOption(BadOptionError),
    PathLength(PathLengthError),
    NulByte(NulByteError),
    ClosedDirectory(ClosedDirectoryError),
}

/// A failed syscall. The `errno` is captured straight after the call, before anything else gets a
/// chance to overwrite it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct OsError {
    context: Option<OsString>,
    code: c_int,
}

impl OsError {
    pub fn new<C: AsRef<OsStr>>(code: c_int, context: Option<C>) -> OsError {
        OsError {
            context: context.map(|c| c.as_ref().to_owned()),
            code,
        }
    }

    /// Creates an error from the current `errno`, with `context` (normally the path that the
    /// failing call was given) prefixed to the message.
    pub(crate) fn last_with<C: AsRef<OsStr>>(context: C) -> OsError {
        OsError::new(util::err_no(), Some(context))
    }

    /// Creates an error from the current `errno`, with no context.
    pub(crate) fn last() -> OsError {
        OsError::new::<&OsStr>(util::err_no(), None)
    }

    pub const fn code(&self) -> c_int {
        self.code
    }

    pub fn context(&self) -> Option<&OsStr> {
        self.context.as_deref()
    }

    /// The message for this error, with the context's bytes kept exactly as the OS saw them.
    pub fn message(&self) -> OsString {
        let description = util::strerror(self.code);
        match &self.context {
            Some(context) => {
                let mut message = OsString::with_capacity(context.len() + 2 + description.len());
                message.push(context);
                message.push(": ");
                message.push(description);
                message
            },
            None => OsString::from(description),
        }
    }
}

impl Display for OsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message().to_string_lossy())
    }
}

/// Either of the errors that a filesystem operation can produce.
#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, IsVariant)]
pub enum FsError {
    Invalid(ValidationError),
    Os(OsError),
}

impl FsError {
    /// Returns the `errno` of the underlying failure, if it came from the OS.
    pub const fn os_code(&self) -> Option<c_int> {
        match self {
            FsError::Os(e) => Some(e.code),
            FsError::Invalid(_) => None,
        }
    }
}

macro_rules! validation_into_fs_error {
    ($($error:ty),*) => {
        $(
            impl From<$error> for FsError {
                fn from(value: $error) -> Self {
                    FsError::Invalid(value.into())
                }
            }
        )*
    };
}

validation_into_fs_error!(BadOptionError, PathLengthError, NulByteError, ClosedDirectoryError);
