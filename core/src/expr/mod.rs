//! Typed SQL expressions.
//!
//! Every path expression, literal, and computed expression implements
//! [`Expr`], which carries three pieces of type-level information:
//!
//! - `SQLType`: the SQL data type marker, used for compatibility checks
//! - `Nullable`: whether the expression may evaluate to NULL
//! - `Value`: the Rust type one result column of this expression materialises into
//!
//! Operators build new [`SQLExpr`] nodes, so an expression tree is a flat
//! [`SQL`](crate::sql::SQL) fragment plus phantom type markers.
//!
//! ```compile_fail
//! use qdsl_core::expr::eq;
//!
//! // an INTEGER literal cannot be compared with TEXT
//! let _ = eq(1_i32, "x");
//! ```

mod agg;
mod case;
mod cmp;
mod ext;
mod logical;
mod null;
mod ops;
mod set;
mod typed;

pub use agg::*;
pub use case::*;
pub use cmp::*;
pub use ext::*;
pub use logical::*;
pub use null::*;
pub use ops::*;
pub use set::*;
pub use typed::*;

pub(crate) use ops::impl_arithmetic_ops;

use crate::traits::ToSQL;
use crate::types::{BigInt, Bool, DataType, Double, Float, Int, SmallInt, Text};
use crate::value::Value;

// =============================================================================
// Nullability markers
// =============================================================================

mod private {
    pub trait Sealed {}
}

/// Whether an expression may evaluate to NULL.
pub trait Nullability: private::Sealed + Copy + Default + 'static {}

/// The expression never evaluates to NULL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NonNull;

/// The expression may evaluate to NULL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Null;

impl private::Sealed for NonNull {}
impl private::Sealed for Null {}
impl Nullability for NonNull {}
impl Nullability for Null {}

// =============================================================================
// Expr
// =============================================================================

/// A typed SQL expression.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a typed SQL expression",
    label = "expected a column, a literal, an expression, or a subquery"
)]
pub trait Expr: ToSQL {
    /// SQL data type marker.
    type SQLType: DataType;
    /// Nullability marker.
    type Nullable: Nullability;
    /// Rust type of one materialised result column.
    type Value;
}

/// A boolean condition, as accepted by `where` / `having` / `when`.
pub type Predicate = SQLExpr<Bool, NonNull>;

/// Nullability of a Rust field type: `Option<T>` is nullable, everything else
/// is not.
pub trait ValueNullability {
    type Nullable: Nullability;
}

impl<T> ValueNullability for Option<T> {
    type Nullable = Null;
}

macro_rules! non_null_values {
    ($($ty:ty),*) => { $(
        impl ValueNullability for $ty {
            type Nullable = NonNull;
        }
    )* }
}

non_null_values!(i16, i32, i64, u64, f32, f64, bool, String, Vec<u8>, Value);

// =============================================================================
// Literal expressions
// =============================================================================

macro_rules! literal_exprs {
    ($($ty:ty => $sql:ty),* $(,)?) => { $(
        impl Expr for $ty {
            type SQLType = $sql;
            type Nullable = NonNull;
            type Value = $ty;
        }
    )* }
}

literal_exprs! {
    i16 => SmallInt,
    i32 => Int,
    i64 => BigInt,
    f32 => Float,
    f64 => Double,
    bool => Bool,
    String => Text,
}

impl Expr for &str {
    type SQLType = Text;
    type Nullable = NonNull;
    type Value = String;
}
