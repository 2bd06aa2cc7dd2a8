//! Types for enumerating the entries of a directory, primarily the [`Directory`] handle.
//!
//! # Releasing
//! A [`Directory`] owns a native directory stream, which is released exactly once by whichever of
//! these happens first:
//! - [`Directory::close`] is called.
//! - [`Directory::next_entry`] runs out of entries (or the OS fails to read one).
//! - The `Directory` is dropped.
//!
//! After the stream is released, the handle is closed for good. Further reads fail with a
//! [`ClosedDirectoryError`](crate::fs::ClosedDirectoryError), while further closes do nothing.
//!
//! # Ordering
//! Entries are produced in whatever order the OS provides them, which isn't sorted or necessarily
//! stable. The `.` and `..` entries are always skipped.

mod dir;
mod tests;

pub use dir::*;
