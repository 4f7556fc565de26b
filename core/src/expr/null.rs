//! NULL propagation.

use crate::sql::{SQL, Token};
use crate::types::Compatible;

use super::{Expr, NonNull, Null, Nullability, SQLExpr};

/// Combine nullability: if either input is nullable, output is nullable.
///
/// | Left | Right | Output |
/// |------|-------|--------|
/// | NonNull | NonNull | NonNull |
/// | NonNull | Null | Null |
/// | Null | NonNull | Null |
/// | Null | Null | Null |
pub trait NullOr<Rhs: Nullability>: Nullability {
    /// The resulting nullability.
    type Output: Nullability;
}

impl NullOr<NonNull> for NonNull {
    type Output = NonNull;
}
impl NullOr<Null> for NonNull {
    type Output = Null;
}
impl NullOr<NonNull> for Null {
    type Output = Null;
}
impl NullOr<Null> for Null {
    type Output = Null;
}

/// COALESCE(expr, default): the first non-null of the two.
///
/// The result keeps the expression's SQL type and takes the default's
/// nullability.
///
/// ```ignore
/// coalesce(user.department_id, 0_i64)
/// ```
pub fn coalesce<E, D>(expr: E, default: D) -> SQLExpr<E::SQLType, D::Nullable>
where
    E: Expr,
    D: Expr,
    E::SQLType: Compatible<D::SQLType>,
{
    SQLExpr::new(SQL::func(
        "COALESCE",
        expr.into_sql().push(Token::COMMA).append(default.into_sql()),
    ))
}
