//! Row materialisation.
//!
//! A backend returns each result row as positional [`Value`]s. [`FromRow`]
//! reads a typed Rust value starting at a column offset, so a tuple or a
//! joined projection can split one row across several types.

#[cfg(feature = "rusqlite")]
mod rusqlite;

use crate::error::{QueryError, Result};
use crate::value::Value;

/// One result row, as positional values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Returns the value at `index`, failing if the row is too short.
    pub fn get(&self, index: usize) -> Result<&Value> {
        self.values.get(index).ok_or_else(|| {
            QueryError::Mapping(format!(
                "column {index} requested from a row of {} columns",
                self.values.len()
            ))
        })
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}

// =============================================================================
// FromValue: single column conversion
// =============================================================================

/// Converts a single column value into a Rust value.
#[diagnostic::on_unimplemented(
    message = "cannot read `{Self}` from a single column value",
    label = "this type does not implement FromValue"
)]
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Result<Self>;
}

fn mismatch<T>(expected: &str, value: &Value) -> Result<T> {
    Err(QueryError::Mapping(format!(
        "expected {expected}, found {}",
        value.kind()
    )))
}

macro_rules! impl_from_value_integer {
    ($($ty:ty),*) => { $(
        impl FromValue for $ty {
            fn from_value(value: &Value) -> Result<Self> {
                match value {
                    Value::Integer(v) => Ok(<$ty>::try_from(*v)?),
                    other => mismatch(stringify!($ty), other),
                }
            }
        }
    )* }
}

impl_from_value_integer!(i16, i32, u64);

impl FromValue for i64 {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Integer(v) => Ok(*v),
            other => mismatch("i64", other),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Real(v) => Ok(*v),
            // aggregates such as MAX over an integer column come back as INTEGER
            Value::Integer(v) => Ok(*v as f64),
            other => mismatch("f64", other),
        }
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Result<Self> {
        f64::from_value(value).map(|v| v as f32)
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Integer(v) => Ok(*v != 0),
            other => mismatch("bool", other),
        }
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Text(v) => Ok(v.clone()),
            other => mismatch("String", other),
        }
    }
}

impl FromValue for Vec<u8> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Blob(v) => Ok(v.clone()),
            other => mismatch("Vec<u8>", other),
        }
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self> {
        Ok(value.clone())
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

// =============================================================================
// FromRow: offset-based row extraction
// =============================================================================

/// Extracts a Rust value from a result row at a given column offset.
///
/// Tuple impls compose: `(A, B)` reads A at `offset`, then B at
/// `offset + A::COLUMN_COUNT`.
#[diagnostic::on_unimplemented(
    message = "cannot materialise `{Self}` from a result row",
    label = "this type does not implement FromRow",
    note = "declare the type with entity! or projection!, or select a tuple of columns"
)]
pub trait FromRow: Sized {
    /// Number of columns this type reads from the row.
    const COLUMN_COUNT: usize;

    /// Read this type from `row` starting at column `offset`.
    fn from_row_at(row: &Row, offset: usize) -> Result<Self>;

    /// Read from offset 0.
    fn from_row(row: &Row) -> Result<Self> {
        Self::from_row_at(row, 0)
    }
}

macro_rules! impl_from_row_leaf {
    ($($ty:ty),*) => { $(
        impl FromRow for $ty {
            const COLUMN_COUNT: usize = 1;

            fn from_row_at(row: &Row, offset: usize) -> Result<Self> {
                match row.get(offset)? {
                    Value::Null => Err(QueryError::Mapping(format!(
                        "unexpected NULL in column {offset} for {}",
                        stringify!($ty)
                    ))),
                    value => <$ty as FromValue>::from_value(value),
                }
            }
        }
    )* }
}

impl_from_row_leaf!(i16, i32, i64, u64, f32, f64, bool, String, Vec<u8>);

impl FromRow for Value {
    const COLUMN_COUNT: usize = 1;

    fn from_row_at(row: &Row, offset: usize) -> Result<Self> {
        row.get(offset).cloned()
    }
}

impl<T: FromValue> FromRow for Option<T> {
    const COLUMN_COUNT: usize = 1;

    fn from_row_at(row: &Row, offset: usize) -> Result<Self> {
        <Option<T> as FromValue>::from_value(row.get(offset)?)
    }
}

macro_rules! impl_from_row_tuple {
    ($($T:ident),+) => {
        impl<$($T: FromRow),+> FromRow for ($($T,)+) {
            const COLUMN_COUNT: usize = 0 $(+ <$T as FromRow>::COLUMN_COUNT)+;

            #[allow(non_snake_case, unused_assignments)]
            fn from_row_at(row: &Row, offset: usize) -> Result<Self> {
                let mut __off = offset;
                $(
                    let $T = <$T as FromRow>::from_row_at(row, __off)?;
                    __off += <$T as FromRow>::COLUMN_COUNT;
                )+
                Ok(($($T,)+))
            }
        }
    };
}

impl_from_row_tuple!(A);
impl_from_row_tuple!(A, B);
impl_from_row_tuple!(A, B, C);
impl_from_row_tuple!(A, B, C, D);
impl_from_row_tuple!(A, B, C, D, E);
impl_from_row_tuple!(A, B, C, D, E, F);
impl_from_row_tuple!(A, B, C, D, E, F, G);
impl_from_row_tuple!(A, B, C, D, E, F, G, H);

// =============================================================================
// WrapNullable: Option<T> wrapping based on nullability
// =============================================================================

/// Wraps a Rust type in `Option<T>` when nullable.
pub trait WrapNullable<T> {
    type Output;
}

impl<T> WrapNullable<T> for crate::expr::NonNull {
    type Output = T;
}

impl<T> WrapNullable<T> for crate::expr::Null {
    type Output = Option<T>;
}
