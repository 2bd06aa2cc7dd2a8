//! Generic attribute projection.
//!
//! A host asking for attributes of some resolved object can do so in three ways: it can ask for
//! everything and get a fresh record back, it can hand over a record of its own to be filled in, or
//! it can name the attributes it wants and get their values back in the same positions. This module
//! implements that dispatch once, for any [`AttributeSchema`] and any value type, so that the
//! object specific part is reduced to a function from schema index to value.
//!
//! [`Value`] is the value type used by the rest of this crate, but [`project`] doesn't depend on
//! it.

mod error;
mod projector;
mod schema;
mod selection;
mod value;
mod tests;

pub use error::*;
pub use projector::*;
pub use schema::*;
pub use selection::*;
pub use value::*;
