//! The operations of this crate, shaped for a host environment.
//!
//! Hosts usually distinguish between two kinds of failure. Misuse (a bad argument) aborts the call
//! outright, while a failure of the operation itself is returned as a value that the caller can
//! inspect, conventionally an absent value followed by a message. Every function here returns a
//! [`ValidationError`](crate::fs::ValidationError) for the former and an [`Outcome`] for the
//! latter.
//!
//! Hosts are expected to provide their own value marshalling, iteration protocol and finalization.
//! A [`Directory`](crate::fs::Directory) that the host loses track of is released when it is
//! dropped.
#![cfg(target_os = "linux")]

mod library;
mod reply;

pub use library::*;
pub use reply::*;

pub use crate::VERSION;
