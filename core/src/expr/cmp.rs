//! Type-safe comparison functions.
//!
//! These functions enforce type compatibility at compile time using the
//! `Expr` trait and `Compatible` constraint. Comparing incompatible types
//! (e.g., `eq(user.age, "text")`) fails to compile.
//!
//! # Type Safety
//!
//! - `eq`, `ne`, `gt`, `goe`, `lt`, `loe`: Require compatible types
//! - `like`, `not_like`: Require textual types on both sides
//! - `between`: Requires expr compatible with both bounds
//! - `is_null`, `is_not_null`: No type constraint (any type can be null-checked)

use crate::sql::{SQL, Token};
use crate::types::{Compatible, Textual};

use super::{Expr, Predicate, SQLExpr};

fn binary_op<L: Expr, R: Expr>(left: L, operator: Token, right: R) -> Predicate {
    SQLExpr::new(left.into_sql().push(operator).append(right.into_sql()))
}

// =============================================================================
// Equality Comparisons
// =============================================================================

/// Equality comparison (`=`).
///
/// The right-hand side may be a literal, another path, or a subquery.
///
/// ```ignore
/// eq(user.name, "user1");
/// eq(user.age, select(max(u2.age)).from(u2));
/// ```
pub fn eq<L, R>(left: L, right: R) -> Predicate
where
    L: Expr,
    R: Expr,
    L::SQLType: Compatible<R::SQLType>,
{
    binary_op(left, Token::EQ, right)
}

/// Inequality comparison (`<>`).
pub fn ne<L, R>(left: L, right: R) -> Predicate
where
    L: Expr,
    R: Expr,
    L::SQLType: Compatible<R::SQLType>,
{
    binary_op(left, Token::NE, right)
}

// =============================================================================
// Ordering Comparisons
// =============================================================================

/// Greater-than comparison (`>`).
pub fn gt<L, R>(left: L, right: R) -> Predicate
where
    L: Expr,
    R: Expr,
    L::SQLType: Compatible<R::SQLType>,
{
    binary_op(left, Token::GT, right)
}

/// Greater-or-equal comparison (`>=`).
pub fn goe<L, R>(left: L, right: R) -> Predicate
where
    L: Expr,
    R: Expr,
    L::SQLType: Compatible<R::SQLType>,
{
    binary_op(left, Token::GE, right)
}

/// Less-than comparison (`<`).
pub fn lt<L, R>(left: L, right: R) -> Predicate
where
    L: Expr,
    R: Expr,
    L::SQLType: Compatible<R::SQLType>,
{
    binary_op(left, Token::LT, right)
}

/// Less-or-equal comparison (`<=`).
pub fn loe<L, R>(left: L, right: R) -> Predicate
where
    L: Expr,
    R: Expr,
    L::SQLType: Compatible<R::SQLType>,
{
    binary_op(left, Token::LE, right)
}

// =============================================================================
// Pattern Matching
// =============================================================================

/// LIKE pattern matching.
///
/// Requires both operands to be textual.
pub fn like<L, R>(left: L, pattern: R) -> Predicate
where
    L: Expr,
    R: Expr,
    L::SQLType: Textual,
    R::SQLType: Textual,
{
    binary_op(left, Token::LIKE, pattern)
}

/// NOT LIKE pattern matching.
pub fn not_like<L, R>(left: L, pattern: R) -> Predicate
where
    L: Expr,
    R: Expr,
    L::SQLType: Textual,
    R::SQLType: Textual,
{
    SQLExpr::new(
        left.into_sql()
            .push(Token::NOT)
            .push(Token::LIKE)
            .append(pattern.into_sql()),
    )
}

// =============================================================================
// Range Comparisons
// =============================================================================

fn range<E: Expr, L: Expr, H: Expr>(expr: E, negated: bool, low: L, high: H) -> Predicate {
    let mut sql = SQL::from(Token::LPAREN).append(expr.into_sql());
    if negated {
        sql.push_mut(Token::NOT);
    }
    SQLExpr::new(
        sql.push(Token::BETWEEN)
            .append(low.into_sql())
            .push(Token::AND)
            .append(high.into_sql())
            .push(Token::RPAREN),
    )
}

/// BETWEEN comparison (inclusive on both ends).
pub fn between<E, L, H>(expr: E, low: L, high: H) -> Predicate
where
    E: Expr,
    L: Expr,
    H: Expr,
    E::SQLType: Compatible<L::SQLType> + Compatible<H::SQLType>,
{
    range(expr, false, low, high)
}

/// NOT BETWEEN comparison.
pub fn not_between<E, L, H>(expr: E, low: L, high: H) -> Predicate
where
    E: Expr,
    L: Expr,
    H: Expr,
    E::SQLType: Compatible<L::SQLType> + Compatible<H::SQLType>,
{
    range(expr, true, low, high)
}

// =============================================================================
// NULL Checks
// =============================================================================

/// IS NULL check.
pub fn is_null<E: Expr>(expr: E) -> Predicate {
    SQLExpr::new(expr.into_sql().push(Token::IS).push(Token::NULL))
}

/// IS NOT NULL check.
pub fn is_not_null<E: Expr>(expr: E) -> Predicate {
    SQLExpr::new(
        expr.into_sql()
            .push(Token::IS)
            .push(Token::NOT)
            .push(Token::NULL),
    )
}
