//! Thin wrappers around the POSIX calls this crate exposes, with strongly typed results.
//!
//! Everything here takes paths as [`OsStr`](std::ffi::OsStr)s and hands them to the OS as they
//! are. Failures of the OS calls themselves are reported as [`OsError`]s, which remember the
//! `errno` and (usually) the path involved, while misuse is reported as a [`ValidationError`].
//! Operations that can produce either return an [`FsError`].
#![cfg(target_os = "linux")]

pub mod dir;
pub mod path;

mod error;
mod file_type;
mod metadata;
mod ops;
pub(crate) mod util;

pub use dir::Directory;
pub use error::*;
pub use file_type::*;
pub use metadata::*;
pub use ops::*;
pub use path::{basename, dirname};
