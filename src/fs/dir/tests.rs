#![cfg(test)]

use std::cell::Cell;
use std::ffi::OsString;
use std::fs::{self, File};

use tempfile::TempDir;

use super::*;
use crate::fs::util::{self, DirStream, RELEASED_STREAMS};
use crate::fs::{FsError, ValidationError};
use crate::util::test::cwd_lock;

fn released() -> usize {
    RELEASED_STREAMS.with(Cell::get)
}

fn populated_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in ["alpha", "beta", ".hidden"] {
        File::create(dir.path().join(name)).unwrap();
    }
    fs::create_dir(dir.path().join("gamma")).unwrap();
    dir
}

fn assert_closed_error(result: Result<Option<OsString>, FsError>) {
    assert!(
        matches!(result, Err(FsError::Invalid(ValidationError::ClosedDirectory(_)))),
        "Reading a closed directory should fail with a closed directory error, got {result:?}."
    );
}

#[test]
fn test_enumerates_each_entry_once() {
    let tmp = populated_dir();
    let before = released();
    let mut dir = Directory::open(tmp.path()).unwrap();

    let mut names = Vec::new();
    while let Some(name) = dir.next_entry().unwrap() {
        names.push(name);
    }
    names.sort();

    assert_eq!(
        names,
        [".hidden", "alpha", "beta", "gamma"],
        "Every entry should be produced exactly once, without '.' or '..'."
    );
    assert!(dir.is_closed(), "Exhausting a directory should close it.");
    assert_eq!(released() - before, 1, "Exhaustion should release the stream.");

    assert_closed_error(dir.next_entry());
    dir.close().unwrap();
    drop(dir);
    assert_eq!(released() - before, 1, "The stream should only ever be released once.");
}

#[test]
fn test_empty_directory() {
    let tmp = TempDir::new().unwrap();
    let mut dir = Directory::open(tmp.path()).unwrap();

    assert_eq!(dir.next_entry().unwrap(), None);
    assert!(dir.is_closed());
}

#[test]
fn test_close_before_exhaustion() {
    let tmp = populated_dir();
    let before = released();
    let mut dir = Directory::open(tmp.path()).unwrap();

    assert!(dir.next_entry().unwrap().is_some());
    dir.close().unwrap();

    assert!(dir.is_closed());
    assert_eq!(released() - before, 1);
    assert_closed_error(dir.next_entry());

    dir.close().expect("Closing a closed directory should do nothing.");
    drop(dir);
    assert_eq!(released() - before, 1, "Neither a second close nor drop should release again.");
}

#[test]
fn test_drop_releases_stream() {
    let tmp = populated_dir();
    let before = released();

    let mut dir = Directory::open(tmp.path()).unwrap();
    dir.next_entry().unwrap();
    drop(dir);

    assert_eq!(released() - before, 1, "Dropping an open directory should release its stream.");
}

#[test]
fn test_open_missing_directory() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("missing");

    let err = Directory::open(&missing).unwrap_err();
    assert_eq!(err.os_code(), Some(libc::ENOENT));
    assert_eq!(
        err.to_string(),
        format!("{}: No such file or directory", missing.display())
    );
}

#[test]
fn test_open_file_as_directory() {
    let tmp = populated_dir();
    let err = Directory::open(tmp.path().join("alpha")).unwrap_err();
    assert_eq!(err.os_code(), Some(libc::ENOTDIR));
}

#[test]
fn test_iterator_protocol() {
    let tmp = populated_dir();
    let mut dir = Directory::open(tmp.path()).unwrap();

    let mut names = dir.by_ref().collect::<Result<Vec<_>, _>>().unwrap();
    names.sort();

    assert_eq!(names, [".hidden", "alpha", "beta", "gamma"]);
    assert!(dir.next().is_none(), "A finished directory should stay finished.");
    assert!(dir.is_closed());
}

#[test]
fn test_open_cwd() {
    let _guard = cwd_lock();
    let mut expected: Vec<OsString> = fs::read_dir(".")
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    expected.sort();

    let mut names = Directory::open_cwd()
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    names.sort();

    assert_eq!(names, expected);
}

#[test]
fn test_stream_close_is_the_only_release() {
    let tmp = TempDir::new().unwrap();
    let pathname = util::c_path(tmp.path().as_os_str()).unwrap();
    let before = released();

    let stream = DirStream::open(&pathname).unwrap();
    assert_eq!(released() - before, 0);
    stream.close().unwrap();

    assert_eq!(released() - before, 1, "Closing a stream should release it exactly once.");
}
