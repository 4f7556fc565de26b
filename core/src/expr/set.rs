//! Set membership: IN lists and IN subqueries.

use crate::projection::Projection;
use crate::query::SelectQuery;
use crate::sql::{SQL, Token};
use crate::traits::ToSQL;
use crate::types::Compatible;

use super::{Expr, Predicate, SQLExpr};

fn membership<E, I>(expr: E, negated: bool, values: I) -> Predicate
where
    E: Expr,
    I: IntoIterator,
    I::Item: Expr,
{
    let mut sql = expr.into_sql();
    if negated {
        sql.push_mut(Token::NOT);
    }
    let mut values = values.into_iter().peekable();
    if values.peek().is_none() {
        // an empty list matches nothing; IN () is not portable
        return SQLExpr::new(
            sql.push(Token::IN).append(
                SQL::from_iter([Token::SELECT, Token::NULL, Token::WHERE])
                    .append(SQL::number(1))
                    .push(Token::EQ)
                    .append(SQL::number(0))
                    .parens(),
            ),
        );
    }
    let list = SQL::join(values.map(|value| value.into_sql()), Token::COMMA);
    SQLExpr::new(sql.push(Token::IN).append(list.parens()))
}

/// IN check against a list of values.
///
/// An empty list yields a predicate that matches no rows.
pub fn in_list<E, I>(expr: E, values: I) -> Predicate
where
    E: Expr,
    I: IntoIterator,
    I::Item: Expr,
    E::SQLType: Compatible<<I::Item as Expr>::SQLType>,
{
    membership(expr, false, values)
}

/// NOT IN check against a list of values.
///
/// An empty list yields a predicate that matches every row.
pub fn not_in_list<E, I>(expr: E, values: I) -> Predicate
where
    E: Expr,
    I: IntoIterator,
    I::Item: Expr,
    E::SQLType: Compatible<<I::Item as Expr>::SQLType>,
{
    membership(expr, true, values)
}

/// IN check against the single-column result of a subquery.
///
/// ```ignore
/// user.age.in_query(select(u2.age).from(u2).r#where(u2.age.goe(20)))
/// ```
pub fn in_query<E, P, X>(expr: E, query: SelectQuery<P, X>) -> Predicate
where
    E: Expr,
    P: Projection + Expr,
    E::SQLType: Compatible<P::SQLType>,
{
    SQLExpr::new(expr.into_sql().push(Token::IN).append(query.render()))
}

/// NOT IN check against the single-column result of a subquery.
pub fn not_in_query<E, P, X>(expr: E, query: SelectQuery<P, X>) -> Predicate
where
    E: Expr,
    P: Projection + Expr,
    E::SQLType: Compatible<P::SQLType>,
{
    SQLExpr::new(
        expr.into_sql()
            .push(Token::NOT)
            .push(Token::IN)
            .append(query.render()),
    )
}
