mod stream;
mod syscall;

pub(crate) use stream::*;
pub use syscall::*;
