use derive_more::IsVariant;

use super::Record;

/// How a caller wants attributes delivered.
#[derive(Debug, IsVariant)]
pub enum Selection<'c, V> {
    /// Every attribute, in a freshly allocated record.
    Unspecified,
    /// Every attribute, written into an existing record. Entries with the same name are
    /// overwritten, everything else in the record is left alone.
    Container(&'c mut Record<V>),
    /// Only the named attributes, each replaced by its value in place.
    Named(Vec<String>),
}

impl<'c, V> Selection<'c, V> {
    /// Creates a [`Selection::Named`] from the provided names. No names at all is the same as not
    /// providing a selection, so an empty iterator produces [`Selection::Unspecified`].
    pub fn named<I, S>(names: I) -> Selection<'c, V>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            Selection::Unspecified
        } else {
            Selection::Named(names)
        }
    }
}

/// The result of a projection, shaped after the [`Selection`] that produced it.
#[derive(Debug, IsVariant)]
pub enum Projection<'c, V> {
    Record(Record<V>),
    /// The caller's own record, returned so that identity is preserved.
    Container(&'c mut Record<V>),
    Values(Vec<V>),
}

impl<'c, V> Projection<'c, V> {
    /// Returns the record produced by this projection, whether it was fresh or provided.
    pub fn as_record(&self) -> Option<&Record<V>> {
        match self {
            Projection::Record(record) => Some(record),
            Projection::Container(record) => Some(&**record),
            Projection::Values(_) => None,
        }
    }

    pub fn into_values(self) -> Option<Vec<V>> {
        match self {
            Projection::Values(values) => Some(values),
            _ => None,
        }
    }
}
