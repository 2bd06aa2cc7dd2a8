//! A small library of POSIX path operations, written to be embedded in a host environment (such as
//! a scripting runtime) that wants filesystem access expressed in its own values.
//!
//! # Purpose
//! The operations themselves are thin: inspect metadata, walk a directory, create links and
//! directories, read links, split paths and change the working directory. The interesting parts
//! are the ones in between the OS and the host:
//! - [`attr`] projects resolved attributes into either a keyed record or an ordered list of values,
//!   depending on how the caller asked for them. It doesn't know anything about files.
//! - [`fs::dir::Directory`] owns a native directory stream and makes sure that it is released
//!   exactly once, whether that happens because the caller closed it, because it ran out of
//!   entries or because it was dropped.
//!
//! # Paths
//! Paths are taken as [`OsStr`](std::ffi::OsStr)s and passed to the OS verbatim. There is no
//! normalization and no attempt at portability beyond Linux.
//!
//! # Error Handling
//! Errors are strongly typed, using enums for static dispatch with small structs (mostly ZSTs) that
//! implement [`Error`](std::error::Error). There are two broad kinds:
//! - [`ValidationError`](fs::ValidationError)s are the caller's fault: bad option names, overly
//!   long paths or a closed directory.
//! - [`OsError`](fs::OsError)s carry the `errno` of a failed syscall along with the path that it
//!   was called on, if any.
//!
//! The [`host`] module maps these onto the convention most hosts expect: validation errors abort
//! the call, while OS errors become a `(nil, message)` pair.
//!
//! # Dependencies
//! The [`fs`] module relies on `libc` for its syscall wrappers. Error types use `derive_more` and
//! diagnostics are emitted as `tracing` events, without installing a subscriber.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod attr;
pub mod fs;
#[cfg(feature = "host")]
pub mod host;


/// The library's version identifier, exposed to hosts alongside the operations.
pub const VERSION: &str = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION"));
