//! Type-safe aggregate functions.
//!
//! Aggregates are ordinary expressions: they can be selected, compared
//! against in `having`, or embedded as the single column of a subquery.
//!
//! # Type Safety
//!
//! - `sum`, `avg`: Require `Numeric` types
//! - `count`: Works with any type
//! - `min`, `max`: Work with any type
//!
//! ```compile_fail
//! use qdsl_core::expr::sum;
//!
//! let _ = sum("text");
//! ```

use crate::sql::{SQL, Token};
use crate::types::{BigInt, Double, Numeric};

use super::{Expr, NonNull, Null, SQLExpr};

// =============================================================================
// COUNT
// =============================================================================

/// COUNT(*) - counts all rows.
pub fn count_all() -> SQLExpr<BigInt, NonNull> {
    SQLExpr::new(SQL::func("COUNT", SQL::token(Token::STAR)))
}

/// COUNT(expr) - counts non-null values.
pub fn count<E: Expr>(expr: E) -> SQLExpr<BigInt, NonNull> {
    SQLExpr::new(SQL::func("COUNT", expr.into_sql()))
}

/// COUNT(DISTINCT expr) - counts distinct non-null values.
pub fn count_distinct<E: Expr>(expr: E) -> SQLExpr<BigInt, NonNull> {
    SQLExpr::new(SQL::func(
        "COUNT",
        SQL::token(Token::DISTINCT).append(expr.into_sql()),
    ))
}

// =============================================================================
// SUM / AVG
// =============================================================================

/// SUM(expr) - sums numeric values.
///
/// Preserves the input expression's SQL type. Nullable: an empty set sums
/// to NULL.
pub fn sum<E>(expr: E) -> SQLExpr<E::SQLType, Null>
where
    E: Expr,
    E::SQLType: Numeric,
{
    SQLExpr::new(SQL::func("SUM", expr.into_sql()))
}

/// AVG(expr) - averages numeric values.
///
/// Always yields a DOUBLE; NULL for an empty set.
pub fn avg<E>(expr: E) -> SQLExpr<Double, Null>
where
    E: Expr,
    E::SQLType: Numeric,
{
    SQLExpr::new(SQL::func("AVG", expr.into_sql()))
}

// =============================================================================
// MIN / MAX
// =============================================================================

/// MAX(expr) - the largest value; NULL for an empty set.
pub fn max<E: Expr>(expr: E) -> SQLExpr<E::SQLType, Null> {
    SQLExpr::new(SQL::func("MAX", expr.into_sql()))
}

/// MIN(expr) - the smallest value; NULL for an empty set.
pub fn min<E: Expr>(expr: E) -> SQLExpr<E::SQLType, Null> {
    SQLExpr::new(SQL::func("MIN", expr.into_sql()))
}
