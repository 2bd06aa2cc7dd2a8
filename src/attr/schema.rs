use std::iter::Copied;
use std::slice::Iter;

/// An ordered, fixed list of attribute names. The position of a name in the list is its index,
/// which is what value functions passed to [`project`](super::project) receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSchema {
    fields: &'static [&'static str],
}

impl AttributeSchema {
    pub const fn new(fields: &'static [&'static str]) -> AttributeSchema {
        AttributeSchema { fields }
    }

    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn name(&self, index: usize) -> Option<&'static str> {
        self.fields.get(index).copied()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| *field == name)
    }

    pub fn names(&self) -> Copied<Iter<'static, &'static str>> {
        self.fields.iter().copied()
    }
}
