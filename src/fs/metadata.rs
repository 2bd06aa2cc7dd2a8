use std::ffi::OsStr;
use std::mem::MaybeUninit;

use libc::stat as Stat;
use tracing::trace;

use super::{FileType, FsError, OsError, util};
use crate::attr::{self, AttributeSchema, Projection, Selection, Value};

/// The metadata of a single path entry, taken from one `lstat` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub inode_num: u64,      // st_ino
    pub device_id: u64,      // st_dev
    pub links: u64,          // st_nlink
    pub uid: u32,            // st_uid
    pub gid: u32,            // st_gid
    pub size: i64,           // st_size
    pub time_accessed: i64,  // st_atime
    pub time_modified: i64,  // st_mtime
    pub time_changed: i64,   // st_ctime
    pub file_type: FileType, // st_mode
}

impl Metadata {
    /// The attributes of [`Metadata`], in the order that they are projected.
    pub const SCHEMA: AttributeSchema = AttributeSchema::new(&[
        "inode",
        "device",
        "link-count",
        "owner-uid",
        "owner-gid",
        "size",
        "access-time",
        "modify-time",
        "change-time",
        "type",
    ]);

    #[allow(clippy::unnecessary_cast)]
    pub(crate) const fn from_stat(raw: Stat) -> Metadata {
        Metadata {
            inode_num: raw.st_ino as u64,
            device_id: raw.st_dev as u64,
            links: raw.st_nlink as u64,
            uid: raw.st_uid,
            gid: raw.st_gid,
            size: raw.st_size as i64,
            time_accessed: raw.st_atime as i64,
            time_modified: raw.st_mtime as i64,
            time_changed: raw.st_ctime as i64,
            file_type: FileType::from_stat_mode(raw.st_mode),
        }
    }

    /// Retrieves the metadata of `path` itself. If `path` is a symlink, the metadata is that of the
    /// link rather than its target.
    pub fn no_follow<P: AsRef<OsStr>>(path: P) -> Result<Metadata, FsError> {
        let path = path.as_ref();
        let pathname = util::c_path(path)?;

        let mut raw_meta: MaybeUninit<Stat> = MaybeUninit::uninit();
        // SAFETY: pathname is a valid nul-terminated string and raw_meta is valid for writes.
        if unsafe { libc::lstat(pathname.as_ptr(), raw_meta.as_mut_ptr()) } == -1 {
            Err(OsError::last_with(path))?
        }
        // SAFETY: lstat either initializes raw_meta or returns an error, which returns above.
        let raw = unsafe { raw_meta.assume_init() };

        trace!(path = ?path, "resolved metadata");
        Ok(Metadata::from_stat(raw))
    }

    /// Produces the value of the attribute at `index` within [`Metadata::SCHEMA`], or
    /// [`Value::Nil`] if there isn't one.
    pub fn value_of(&self, index: usize) -> Value {
        match Self::SCHEMA.name(index) {
            Some("inode") => Value::Integer(reinterpret(self.inode_num)),
            Some("device") => Value::Integer(reinterpret(self.device_id)),
            Some("link-count") => Value::Integer(reinterpret(self.links)),
            Some("owner-uid") => Value::Integer(self.uid.into()),
            Some("owner-gid") => Value::Integer(self.gid.into()),
            Some("size") => Value::Integer(self.size),
            Some("access-time") => Value::Integer(self.time_accessed),
            Some("modify-time") => Value::Integer(self.time_modified),
            Some("change-time") => Value::Integer(self.time_changed),
            Some("type") => Value::from(self.file_type.to_string().as_str()),
            _ => Value::Nil,
        }
    }
}

/// Hosts only have signed integers. Identifiers above `i64::MAX` keep their bits and come out
/// negative, so distinct inodes and devices stay distinct and `as u64` recovers the original.
pub(crate) const fn reinterpret(value: u64) -> i64 {
    i64::from_ne_bytes(value.to_ne_bytes())
}

/// Resolves the metadata of `path` (without following a terminal symlink) and projects it
/// according to `selection`.
///
/// The lookup happens first and either fully succeeds or produces an [`OsError`], so a failed
/// lookup never projects anything.
pub fn attributes<'c, P: AsRef<OsStr>>(
    path: P,
    selection: Selection<'c, Value>,
) -> Result<Projection<'c, Value>, FsError> {
    let metadata = Metadata::no_follow(path)?;
    Ok(attr::project(&Metadata::SCHEMA, selection, |index| metadata.value_of(index))?)
}
