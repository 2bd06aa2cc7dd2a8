use std::ffi::OsString;
use std::fmt::{self, Display, Formatter};

use derive_more::Error;

use crate::attr::{Projection, Value};
use crate::fs::{FsError, OsError, ValidationError};

/// The result of an operation that a host can inspect: either its values or a [`Failure`].
pub type Outcome<T> = Result<T, Failure>;

/// A failed operation, carrying a message of the form `<context>: <system error>`, or just the
/// system error if there is no context. The context's bytes are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct Failure {
    pub message: OsString,
}

impl Failure {
    /// The values a host conventionally returns for a failure: nothing, then the message.
    pub fn into_values(self) -> Vec<Value> {
        vec![Value::Nil, Value::String(self.message)]
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message.to_string_lossy())
    }
}

impl From<OsError> for Failure {
    fn from(value: OsError) -> Self {
        Failure {
            message: value.message(),
        }
    }
}

/// Splits the result of a filesystem operation into what aborts the call and what is reported.
pub fn report<T>(result: Result<T, FsError>) -> Result<Outcome<T>, ValidationError> {
    match result {
        Ok(value) => Ok(Ok(value)),
        Err(FsError::Os(e)) => Ok(Err(e.into())),
        Err(FsError::Invalid(e)) => Err(e),
    }
}

/// Conversion of an [`Outcome`] into the values returned to the host.
///
/// There is no conversion for an opened [`Directory`](crate::fs::Directory): it is a handle that
/// the host holds on to, not a value. Its failures are still converted with
/// [`Failure::into_values`].
pub trait IntoValues {
    fn into_values(self) -> Vec<Value>;
}

impl IntoValues for Outcome<()> {
    fn into_values(self) -> Vec<Value> {
        match self {
            Ok(()) => vec![Value::Boolean(true)],
            Err(failure) => failure.into_values(),
        }
    }
}

impl IntoValues for Outcome<OsString> {
    fn into_values(self) -> Vec<Value> {
        match self {
            Ok(string) => vec![Value::String(string)],
            Err(failure) => failure.into_values(),
        }
    }
}

/// An entry produces its name, while the end of the sequence produces nothing at all.
impl IntoValues for Outcome<Option<OsString>> {
    fn into_values(self) -> Vec<Value> {
        match self {
            Ok(Some(name)) => vec![Value::String(name)],
            Ok(None) => vec![],
            Err(failure) => failure.into_values(),
        }
    }
}

/// A record produces a single [`Value::Record`], while named attributes produce one value each, in
/// the order that they were named. A container is copied into the value, the host is expected to
/// have written it back into its own record already.
impl IntoValues for Outcome<Projection<'_, Value>> {
    fn into_values(self) -> Vec<Value> {
        match self {
            Ok(Projection::Record(record)) => vec![Value::Record(record)],
            Ok(Projection::Container(record)) => vec![Value::Record(record.clone())],
            Ok(Projection::Values(values)) => values,
            Err(failure) => failure.into_values(),
        }
    }
}
