use std::ffi::{OsStr, OsString};

use super::{Outcome, report};
use crate::attr::{Projection, Selection, Value};
use crate::fs::{self, Directory, ValidationError};

/// Describes `path` itself (not the target, if it is a symlink), delivering the attributes as
/// requested by `selection`.
pub fn attributes<'c, P: AsRef<OsStr>>(
    path: P,
    selection: Selection<'c, Value>,
) -> Result<Outcome<Projection<'c, Value>>, ValidationError> {
    report(fs::attributes(path, selection))
}

pub fn basename<P: AsRef<OsStr>>(path: P) -> Result<OsString, ValidationError> {
    Ok(fs::basename(path)?)
}

pub fn dirname<P: AsRef<OsStr>>(path: P) -> Result<OsString, ValidationError> {
    Ok(fs::dirname(path)?)
}

/// Changes the working directory, producing the previous one.
pub fn change_directory<P: AsRef<OsStr>>(path: P) -> Result<Outcome<OsString>, ValidationError> {
    report(fs::change_dir(path))
}

/// Opens `path`, or the working directory if there isn't one, for iteration.
pub fn open_directory(path: Option<&OsStr>) -> Result<Outcome<Directory>, ValidationError> {
    report(Directory::open(path.unwrap_or(OsStr::new("."))))
}

/// Advances `dir`, producing `None` at the end of the sequence.
pub fn next_entry(dir: &mut Directory) -> Result<Outcome<Option<OsString>>, ValidationError> {
    report(dir.next_entry())
}

pub fn close_directory(dir: &mut Directory) -> Result<Outcome<()>, ValidationError> {
    report(dir.close())
}

pub fn link<O: AsRef<OsStr>, N: AsRef<OsStr>>(
    old: O,
    new: N,
    symbolic: bool,
) -> Result<Outcome<()>, ValidationError> {
    report(fs::link(old, new, symbolic))
}

pub fn make_directory<P: AsRef<OsStr>>(path: P) -> Result<Outcome<()>, ValidationError> {
    report(fs::make_dir(path))
}

pub fn read_link<P: AsRef<OsStr>>(path: P) -> Result<Outcome<OsString>, ValidationError> {
    report(fs::read_link(path))
}
