//! Method syntax for building expressions from path expressions.

use crate::order::{OrderSpec, SortDirection};
use crate::projection::Projection;
use crate::query::SelectQuery;
use crate::types::{BigInt, Compatible, DataType, Double, Numeric, Textual};

use super::{Expr, NonNull, Null, Nullability, Predicate, SQLExpr, SimpleCaseThen};

/// Fluent counterparts of the free expression functions.
///
/// Implemented for columns, computed expressions, and subqueries, so
/// callers can write `user.age.goe(18)` instead of `goe(user.age, 18)`.
pub trait ExprExt: Expr + Sized {
    fn eq<R>(self, rhs: R) -> Predicate
    where
        R: Expr,
        Self::SQLType: Compatible<R::SQLType>,
    {
        super::eq(self, rhs)
    }

    fn ne<R>(self, rhs: R) -> Predicate
    where
        R: Expr,
        Self::SQLType: Compatible<R::SQLType>,
    {
        super::ne(self, rhs)
    }

    fn gt<R>(self, rhs: R) -> Predicate
    where
        R: Expr,
        Self::SQLType: Compatible<R::SQLType>,
    {
        super::gt(self, rhs)
    }

    fn goe<R>(self, rhs: R) -> Predicate
    where
        R: Expr,
        Self::SQLType: Compatible<R::SQLType>,
    {
        super::goe(self, rhs)
    }

    fn lt<R>(self, rhs: R) -> Predicate
    where
        R: Expr,
        Self::SQLType: Compatible<R::SQLType>,
    {
        super::lt(self, rhs)
    }

    fn loe<R>(self, rhs: R) -> Predicate
    where
        R: Expr,
        Self::SQLType: Compatible<R::SQLType>,
    {
        super::loe(self, rhs)
    }

    fn between<L, H>(self, low: L, high: H) -> Predicate
    where
        L: Expr,
        H: Expr,
        Self::SQLType: Compatible<L::SQLType> + Compatible<H::SQLType>,
    {
        super::between(self, low, high)
    }

    fn not_between<L, H>(self, low: L, high: H) -> Predicate
    where
        L: Expr,
        H: Expr,
        Self::SQLType: Compatible<L::SQLType> + Compatible<H::SQLType>,
    {
        super::not_between(self, low, high)
    }

    fn in_list<I>(self, values: I) -> Predicate
    where
        I: IntoIterator,
        I::Item: Expr,
        Self::SQLType: Compatible<<I::Item as Expr>::SQLType>,
    {
        super::in_list(self, values)
    }

    fn not_in_list<I>(self, values: I) -> Predicate
    where
        I: IntoIterator,
        I::Item: Expr,
        Self::SQLType: Compatible<<I::Item as Expr>::SQLType>,
    {
        super::not_in_list(self, values)
    }

    fn in_query<P, X>(self, query: SelectQuery<P, X>) -> Predicate
    where
        P: Projection + Expr,
        Self::SQLType: Compatible<P::SQLType>,
    {
        super::in_query(self, query)
    }

    fn like<R>(self, pattern: R) -> Predicate
    where
        R: Expr,
        Self::SQLType: Textual,
        R::SQLType: Textual,
    {
        super::like(self, pattern)
    }

    fn is_null(self) -> Predicate {
        super::is_null(self)
    }

    fn is_not_null(self) -> Predicate {
        super::is_not_null(self)
    }

    fn asc(self) -> OrderSpec {
        OrderSpec::new(self, SortDirection::Asc)
    }

    fn desc(self) -> OrderSpec {
        OrderSpec::new(self, SortDirection::Desc)
    }

    fn count(self) -> SQLExpr<BigInt, NonNull> {
        super::count(self)
    }

    fn count_distinct(self) -> SQLExpr<BigInt, NonNull> {
        super::count_distinct(self)
    }

    fn sum(self) -> SQLExpr<Self::SQLType, Null>
    where
        Self::SQLType: Numeric,
    {
        super::sum(self)
    }

    fn avg(self) -> SQLExpr<Double, Null>
    where
        Self::SQLType: Numeric,
    {
        super::avg(self)
    }

    fn max(self) -> SQLExpr<Self::SQLType, Null> {
        super::max(self)
    }

    fn min(self) -> SQLExpr<Self::SQLType, Null> {
        super::min(self)
    }

    /// Start a simple CASE over this expression.
    fn when<V>(self, value: V) -> SimpleCaseThen<Self::SQLType>
    where
        V: Expr,
        Self::SQLType: Compatible<V::SQLType>,
    {
        super::case_of(self, value)
    }
}

impl<T, N> ExprExt for SQLExpr<T, N>
where
    T: DataType,
    N: Nullability,
    SQLExpr<T, N>: Expr,
{
}
