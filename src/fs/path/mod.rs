//! Textual decomposition of paths, following the POSIX `basename` and `dirname` rules. Nothing here
//! touches the filesystem.

mod text;

pub use text::*;
