//! SQL data type markers for compile-time type safety.
//!
//! Zero-sized markers represent SQL data types at the Rust type level, so the
//! compiler can reject comparisons and arithmetic between incompatible
//! columns.
//!
//! ```text
//! DataType (base trait)
//! ├── Numeric (SmallInt, Int, BigInt, Float, Double)
//! ├── Textual (Text)
//! ├── BooleanLike (Bool)
//! └── Bytes
//! ```
//!
//! ```compile_fail
//! use qdsl_core::types::{Compatible, Int, Text};
//!
//! fn requires_compatible<L: Compatible<R>, R: qdsl_core::types::DataType>() {}
//! requires_compatible::<Int, Text>();
//! ```

mod coerce;
mod ops;

pub use coerce::*;
pub use ops::*;

use crate::value::Value;

mod private {
    pub trait Sealed {}
}

/// Represents a SQL data type at the type level.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a recognized SQL data type",
    label = "use a SQL type marker (Int, Text, Bool, etc.)"
)]
pub trait DataType: private::Sealed + SQLTypeToRust + Copy + Default + 'static {}

/// Numeric SQL types that support arithmetic and SUM / AVG.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a numeric SQL type",
    label = "arithmetic and numeric aggregates require SmallInt, Int, BigInt, Float, or Double"
)]
pub trait Numeric: DataType {}

/// String SQL types.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a text SQL type",
    label = "expected Text"
)]
pub trait Textual: DataType {}

/// Types usable as a predicate.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a boolean SQL type",
    label = "WHERE / HAVING / WHEN conditions must be boolean expressions"
)]
pub trait BooleanLike: DataType {}

/// SQL SMALLINT type marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SmallInt;

/// SQL INTEGER type marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Int;

/// SQL BIGINT type marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BigInt;

/// SQL REAL type marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Float;

/// SQL DOUBLE PRECISION type marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Double;

/// SQL TEXT type marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Text;

/// SQL BOOLEAN type marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bool;

/// SQL BLOB type marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bytes;

/// Dynamic/unknown SQL type marker, compatible with every other type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Any;

macro_rules! impl_data_types {
    ($($ty:ident),*) => { $(
        impl private::Sealed for $ty {}
        impl DataType for $ty {}
    )* }
}

impl_data_types!(SmallInt, Int, BigInt, Float, Double, Text, Bool, Bytes, Any);

impl Numeric for SmallInt {}
impl Numeric for Int {}
impl Numeric for BigInt {}
impl Numeric for Float {}
impl Numeric for Double {}
impl Numeric for Any {}

impl Textual for Text {}
impl Textual for Any {}

impl BooleanLike for Bool {}
impl BooleanLike for Any {}

// =============================================================================
// SQLTypeToRust: SQL type marker → canonical Rust type
// =============================================================================

/// Maps a SQL type marker to the Rust type a computed expression of that
/// type materialises into.
pub trait SQLTypeToRust {
    type RustType;
}

macro_rules! sql_rust_mapping {
    ($($sql:ident => $rust:ty),+ $(,)?) => {
        $(
            impl SQLTypeToRust for $sql {
                type RustType = $rust;
            }
        )+
    };
}

sql_rust_mapping! {
    SmallInt => i16,
    Int      => i32,
    BigInt   => i64,
    Float    => f32,
    Double   => f64,
    Text     => String,
    Bool     => bool,
    Bytes    => Vec<u8>,
    Any      => Value,
}
