use derive_more::{Display, Error};

/// A requested attribute name that isn't part of the schema being projected.
#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("bad argument #{} (invalid option '{name}')", position + 1)]
pub struct BadOptionError {
    pub name: String,
    /// The zero-based position of the name within the request.
    pub position: usize,
}
