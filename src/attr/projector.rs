use super::{AttributeSchema, BadOptionError, Projection, Record, Selection};

/// Resolves `selection` against `schema`, computing values with `value_of`.
///
/// For [`Selection::Unspecified`] and [`Selection::Container`], every attribute is computed in
/// schema order and inserted under its name. For [`Selection::Named`], each name is validated
/// immediately before its value is computed, so the first unknown name aborts the projection and
/// any values computed so far are discarded. Names may repeat.
///
/// `value_of` is expected to be a pure projection of something already resolved: it may be called
/// any number of times for the same index.
pub fn project<'c, V, F>(
    schema: &AttributeSchema,
    selection: Selection<'c, V>,
    mut value_of: F,
) -> Result<Projection<'c, V>, BadOptionError>
where
    F: FnMut(usize) -> V,
{
    match selection {
        Selection::Unspecified => {
            let mut record = Record::with_capacity(schema.len());
            fill(schema, &mut record, &mut value_of);
            Ok(Projection::Record(record))
        },
        Selection::Container(record) => {
            fill(schema, record, &mut value_of);
            Ok(Projection::Container(record))
        },
        Selection::Named(names) => {
            let mut values = Vec::with_capacity(names.len());
            for (position, name) in names.into_iter().enumerate() {
                match schema.index_of(&name) {
                    Some(index) => values.push(value_of(index)),
                    None => Err(BadOptionError { name, position })?,
                }
            }
            Ok(Projection::Values(values))
        },
    }
}

fn fill<V, F>(schema: &AttributeSchema, record: &mut Record<V>, value_of: &mut F)
where
    F: FnMut(usize) -> V,
{
    for (index, name) in schema.names().enumerate() {
        record.insert(name.to_owned(), value_of(index));
    }
}
