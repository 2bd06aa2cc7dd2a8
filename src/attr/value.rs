use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

use derive_more::{From, IsVariant};

/// A keyed record, as produced by a projection.
pub type Record<V = Value> = HashMap<String, V>;

/// A value as a host environment sees it. Strings are raw OS strings, because that is what paths
/// and directory entries are.
#[derive(Debug, Clone, PartialEq, From, IsVariant)]
pub enum Value {
    #[from(skip)]
    Nil,
    Boolean(bool),
    Integer(i64),
    String(OsString),
    List(Vec<Value>),
    Record(Record),
}

impl Value {
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(int) => Some(*int),
            _ => None,
        }
    }

    pub fn as_os_str(&self) -> Option<&OsStr> {
        match self {
            Value::String(string) => Some(string),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(OsString::from(value))
    }
}
