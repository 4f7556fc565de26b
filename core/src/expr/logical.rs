//! Logical operators (AND, OR, NOT).
//!
//! Both function-based and operator-based forms are provided:
//!
//! ```ignore
//! // Function style
//! and(condition1, condition2)
//! or(condition1, condition2)
//! not(condition)
//!
//! // Operator style (via std::ops traits)
//! condition1 & condition2   // BitAnd
//! condition1 | condition2   // BitOr
//! !condition                // Not
//! ```
//!
//! [`all_of`] and [`any_of`] fold optional predicates: absent members are
//! skipped and an all-absent input stays absent.

use core::ops::{BitAnd, BitOr, Not};

use crate::sql::{SQL, Token};
use crate::types::{BooleanLike, DataType};

use super::{Expr, Nullability, Predicate, SQLExpr};

fn combine<I>(conditions: I, separator: Token) -> Option<Predicate>
where
    I: IntoIterator<Item = Option<Predicate>>,
{
    let mut present = conditions.into_iter().flatten();
    let first = present.next()?;
    let Some(second) = present.next() else {
        return Some(first);
    };
    let all = [first, second].into_iter().chain(present).map(SQLExpr::into_inner);
    Some(SQLExpr::new(SQL::join(all, separator).parens()))
}

/// Logical NOT.
pub fn not<E>(expr: E) -> Predicate
where
    E: Expr,
    E::SQLType: BooleanLike,
{
    SQLExpr::new(SQL::from(Token::NOT).append(expr.into_sql().parens()))
}

/// Logical AND of two conditions.
pub fn and<L, R>(left: L, right: R) -> Predicate
where
    L: Expr,
    R: Expr,
    L::SQLType: BooleanLike,
    R::SQLType: BooleanLike,
{
    SQLExpr::new(
        left.into_sql()
            .push(Token::AND)
            .append(right.into_sql())
            .parens(),
    )
}

/// Logical OR of two conditions.
pub fn or<L, R>(left: L, right: R) -> Predicate
where
    L: Expr,
    R: Expr,
    L::SQLType: BooleanLike,
    R::SQLType: BooleanLike,
{
    SQLExpr::new(
        left.into_sql()
            .push(Token::OR)
            .append(right.into_sql())
            .parens(),
    )
}

/// Conjunction of the present predicates; `None` if every member is absent.
///
/// ```ignore
/// let filter = all_of([name_eq(None), age_eq(Some(30))]);
/// // "user"."age" = ?
/// ```
pub fn all_of<I>(conditions: I) -> Option<Predicate>
where
    I: IntoIterator<Item = Option<Predicate>>,
{
    combine(conditions, Token::AND)
}

/// Disjunction of the present predicates; `None` if every member is absent.
pub fn any_of<I>(conditions: I) -> Option<Predicate>
where
    I: IntoIterator<Item = Option<Predicate>>,
{
    combine(conditions, Token::OR)
}

// =============================================================================
// Operator Trait Implementations
// =============================================================================

/// Implements `!expr` for boolean expressions (SQL NOT).
impl<T, N> Not for SQLExpr<T, N>
where
    T: BooleanLike,
    N: Nullability,
    SQLExpr<T, N>: Expr<SQLType = T>,
{
    type Output = Predicate;

    fn not(self) -> Self::Output {
        not(self)
    }
}

/// Implements `expr1 & expr2` for boolean expressions (SQL AND).
impl<T, N, Rhs> BitAnd<Rhs> for SQLExpr<T, N>
where
    T: BooleanLike + DataType,
    N: Nullability,
    SQLExpr<T, N>: Expr<SQLType = T>,
    Rhs: Expr,
    Rhs::SQLType: BooleanLike,
{
    type Output = Predicate;

    fn bitand(self, rhs: Rhs) -> Self::Output {
        and(self, rhs)
    }
}

/// Implements `expr1 | expr2` for boolean expressions (SQL OR).
impl<T, N, Rhs> BitOr<Rhs> for SQLExpr<T, N>
where
    T: BooleanLike + DataType,
    N: Nullability,
    SQLExpr<T, N>: Expr<SQLType = T>,
    Rhs: Expr,
    Rhs::SQLType: BooleanLike,
{
    type Output = Predicate;

    fn bitor(self, rhs: Rhs) -> Self::Output {
        or(self, rhs)
    }
}
