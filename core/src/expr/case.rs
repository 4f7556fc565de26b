//! Type-safe CASE/WHEN expressions.
//!
//! Two forms, both with a mandatory default:
//!
//! ```ignore
//! // searched: conditions evaluated top to bottom, first match wins
//! case()
//!     .when(user.age.between(0, 20), "child")
//!     .when(user.age.between(21, 30), "youth")
//!     .otherwise("adult")
//!
//! // simple: the operand is compared with each WHEN value
//! user.age.when(10).then("ten").when(20).then("twenty").otherwise("other")
//! ```
//!
//! The first branch fixes the result type; later branches and the default
//! must be compatible with it. Nullability accumulates over every branch.

use core::marker::PhantomData;

use crate::sql::{SQL, Token};
use crate::types::{BooleanLike, Compatible, DataType};

use super::null::NullOr;
use super::{Expr, Nullability, SQLExpr};

// =============================================================================
// Searched CASE
// =============================================================================

/// Start building a searched CASE expression.
pub fn case() -> CaseInit {
    CaseInit {
        sql: SQL::token(Token::CASE),
    }
}

/// Builder state before the first WHEN branch.
#[derive(Debug, Clone)]
pub struct CaseInit {
    sql: SQL,
}

impl CaseInit {
    /// Add the first WHEN branch. This establishes the result type.
    pub fn when<C, R>(self, condition: C, result: R) -> CaseBuilder<R::SQLType, R::Nullable>
    where
        C: Expr,
        R: Expr,
        C::SQLType: BooleanLike,
    {
        CaseBuilder {
            sql: branch(self.sql, condition.into_sql(), result.into_sql()),
            _marker: PhantomData,
        }
    }
}

/// Builder state after at least one WHEN branch has been added.
#[derive(Debug, Clone)]
pub struct CaseBuilder<T: DataType, N: Nullability> {
    sql: SQL,
    _marker: PhantomData<(T, N)>,
}

impl<T: DataType, N: Nullability> CaseBuilder<T, N> {
    /// Add another WHEN branch.
    pub fn when<C, R>(self, condition: C, result: R) -> CaseBuilder<T, <N as NullOr<R::Nullable>>::Output>
    where
        C: Expr,
        R: Expr,
        C::SQLType: BooleanLike,
        T: Compatible<R::SQLType>,
        N: NullOr<R::Nullable>,
    {
        CaseBuilder {
            sql: branch(self.sql, condition.into_sql(), result.into_sql()),
            _marker: PhantomData,
        }
    }

    /// Finish the CASE expression with its default.
    pub fn otherwise<D>(self, default: D) -> SQLExpr<T, <N as NullOr<D::Nullable>>::Output>
    where
        D: Expr,
        T: Compatible<D::SQLType>,
        N: NullOr<D::Nullable>,
    {
        SQLExpr::new(finish(self.sql, default.into_sql()))
    }
}

fn branch(sql: SQL, when: SQL, then: SQL) -> SQL {
    sql.push(Token::WHEN)
        .append(when)
        .push(Token::THEN)
        .append(then)
}

fn finish(sql: SQL, default: SQL) -> SQL {
    sql.push(Token::ELSE).append(default).push(Token::END)
}

// =============================================================================
// Simple CASE
// =============================================================================

/// Start a simple CASE over `operand` with its first WHEN value.
///
/// Usually reached through [`ExprExt::when`](super::ExprExt::when).
pub fn case_of<E, V>(operand: E, value: V) -> SimpleCaseThen<E::SQLType>
where
    E: Expr,
    V: Expr,
    E::SQLType: Compatible<V::SQLType>,
{
    SimpleCaseThen {
        sql: SQL::token(Token::CASE)
            .append(operand.into_sql())
            .push(Token::WHEN)
            .append(value.into_sql()),
        _marker: PhantomData,
    }
}

/// A simple CASE waiting for the result of its first WHEN value.
#[derive(Debug, Clone)]
pub struct SimpleCaseThen<O: DataType> {
    sql: SQL,
    _marker: PhantomData<O>,
}

impl<O: DataType> SimpleCaseThen<O> {
    /// Result of the first branch; establishes the result type.
    pub fn then<R: Expr>(self, result: R) -> SimpleCase<O, R::SQLType, R::Nullable> {
        SimpleCase {
            sql: self.sql.push(Token::THEN).append(result.into_sql()),
            _marker: PhantomData,
        }
    }
}

/// A simple CASE with at least one complete branch.
#[derive(Debug, Clone)]
pub struct SimpleCase<O: DataType, T: DataType, N: Nullability> {
    sql: SQL,
    _marker: PhantomData<(O, T, N)>,
}

impl<O: DataType, T: DataType, N: Nullability> SimpleCase<O, T, N> {
    /// Start another branch matching `value`.
    pub fn when<V>(self, value: V) -> SimpleCaseNext<O, T, N>
    where
        V: Expr,
        O: Compatible<V::SQLType>,
    {
        SimpleCaseNext {
            sql: self.sql.push(Token::WHEN).append(value.into_sql()),
            _marker: PhantomData,
        }
    }

    /// Finish the CASE expression with its default.
    pub fn otherwise<D>(self, default: D) -> SQLExpr<T, <N as NullOr<D::Nullable>>::Output>
    where
        D: Expr,
        T: Compatible<D::SQLType>,
        N: NullOr<D::Nullable>,
    {
        SQLExpr::new(finish(self.sql, default.into_sql()))
    }
}

/// A simple CASE waiting for the result of a later WHEN value.
#[derive(Debug, Clone)]
pub struct SimpleCaseNext<O: DataType, T: DataType, N: Nullability> {
    sql: SQL,
    _marker: PhantomData<(O, T, N)>,
}

impl<O: DataType, T: DataType, N: Nullability> SimpleCaseNext<O, T, N> {
    pub fn then<R>(self, result: R) -> SimpleCase<O, T, <N as NullOr<R::Nullable>>::Output>
    where
        R: Expr,
        T: Compatible<R::SQLType>,
        N: NullOr<R::Nullable>,
    {
        SimpleCase {
            sql: self.sql.push(Token::THEN).append(result.into_sql()),
            _marker: PhantomData,
        }
    }
}
