#![cfg(test)]

use std::cell::Cell;
use std::ffi::OsStr;

use super::*;

const POINT: AttributeSchema = AttributeSchema::new(&["x", "y", "z"]);

fn coord(index: usize) -> i64 {
    [3, -1, 7][index]
}

#[test]
fn test_schema_lookup() {
    assert_eq!(POINT.len(), 3);
    assert_eq!(POINT.index_of("y"), Some(1));
    assert_eq!(POINT.index_of("w"), None, "Unknown names shouldn't resolve to an index.");
    assert_eq!(POINT.name(2), Some("z"));
    assert_eq!(POINT.name(3), None);
    assert_eq!(POINT.names().collect::<Vec<_>>(), ["x", "y", "z"]);
}

#[test]
fn test_unspecified_produces_full_record() {
    let projection = project(&POINT, Selection::Unspecified, coord).unwrap();
    let record = projection.as_record().unwrap();

    assert!(projection.is_record(), "No selection should produce a fresh record.");
    assert_eq!(record.len(), 3);
    assert_eq!(record["x"], 3);
    assert_eq!(record["y"], -1);
    assert_eq!(record["z"], 7);
}

#[test]
fn test_container_is_filled_in_place() {
    let mut container = Record::<i64>::new();
    container.insert("x".to_owned(), 100);
    container.insert("extra".to_owned(), 42);
    let address: *const Record<i64> = &container;

    let projection = project(&POINT, Selection::Container(&mut container), coord).unwrap();
    match projection {
        Projection::Container(record) => assert!(
            std::ptr::eq(record, address),
            "The caller's container should be returned, not a copy."
        ),
        other => panic!("expected the container back, got {other:?}"),
    }

    assert_eq!(container["x"], 3, "Existing entries should be overwritten.");
    assert_eq!(container["extra"], 42, "Unrelated entries should be left alone.");
    assert_eq!(container.len(), 4);
}

#[test]
fn test_named_values_are_positional() {
    let values = project(&POINT, Selection::named(["z", "x", "z"]), coord)
        .unwrap()
        .into_values()
        .unwrap();

    assert_eq!(values, [7, 3, 7], "Each name should be replaced by its value, repeats included.");
}

#[test]
fn test_empty_names_are_unspecified() {
    let selection = Selection::<i64>::named(Vec::<String>::new());
    assert!(selection.is_unspecified());
}

#[test]
fn test_bad_option_aborts() {
    let calls = Cell::new(0);
    let result = project(&POINT, Selection::named(["x", "w", "y"]), |index| {
        calls.set(calls.get() + 1);
        coord(index)
    });

    assert_eq!(
        result.unwrap_err(),
        BadOptionError { name: "w".to_owned(), position: 1 }
    );
    assert_eq!(
        calls.get(), 1,
        "Names after the bad option shouldn't be computed."
    );
}

#[test]
fn test_bad_option_before_any_value() {
    let calls = Cell::new(0);
    let result = project(&POINT, Selection::named(["bogus"]), |index| {
        calls.set(calls.get() + 1);
        coord(index)
    });

    assert!(result.is_err());
    assert_eq!(calls.get(), 0, "No value should be computed for an invalid request.");
    assert_eq!(
        result.unwrap_err().to_string(),
        "bad argument #1 (invalid option 'bogus')"
    );
}

#[test]
fn test_value_helpers() {
    assert_eq!(Value::from(5_i64).as_integer(), Some(5));
    assert_eq!(Value::from("file").as_os_str(), Some(OsStr::new("file")));
    assert!(Value::Nil.is_nil());
    assert!(Value::from(true).is_boolean());
}
