use derive_more::{Display, IsVariant};

/// The type of a file, as reported by its mode. Each type displays as the label hosts see.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum FileType {
    #[display("file")]
    Regular,
    #[display("link")]
    Symlink,
    #[display("directory")]
    Directory,
    #[display("character-device")]
    CharDevice,
    #[display("block-device")]
    BlockDevice,
    #[display("fifo")]
    Fifo,
    #[display("socket")]
    Socket,
    #[display("other")]
    Other,
}

use FileType::*;

impl FileType {
    #[inline(always)]
    pub(crate) const fn from_stat_mode(st_mode: libc::mode_t) -> FileType {
        match st_mode & libc::S_IFMT {
            libc::S_IFREG => Regular,
            libc::S_IFLNK => Symlink,
            libc::S_IFDIR => Directory,
            libc::S_IFCHR => CharDevice,
            libc::S_IFBLK => BlockDevice,
            libc::S_IFIFO => Fifo,
            libc::S_IFSOCK => Socket,
            _ => Other,
        }
    }
}
