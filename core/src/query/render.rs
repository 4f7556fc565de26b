//! Statement rendering for [`SelectQuery`].

use crate::error::{QueryError, Result};
use crate::executor::Statement;
use crate::projection::Projection;
use crate::row::FromRow;
use crate::sql::{SQL, Token};
use crate::traits::ToSQL;

use super::SelectQuery;

/// LIMIT and OFFSET are signed 64-bit in the backend; larger values are
/// clamped, which still means "all rows" / "past the end".
const MAX_ROWS: u64 = i64::MAX as u64;

impl<P: Projection, X> SelectQuery<P, X> {
    /// Fails with the first recorded configuration error, a missing source,
    /// or a projection whose row type reads a different number of columns
    /// than it selects.
    pub(crate) fn check(&self) -> Result<()> {
        if let Some(message) = &self.error {
            return Err(QueryError::Configuration(message.clone()));
        }
        if self.from.is_none() {
            return Err(QueryError::Configuration(
                "query has no source; call from() or use select_from()".to_string(),
            ));
        }
        let selected = self.projection.select_list().len();
        let expected = <P::Row as FromRow>::COLUMN_COUNT;
        if selected != expected {
            return Err(QueryError::Configuration(format!(
                "projection selects {selected} expressions but its row type reads {expected} columns"
            )));
        }
        Ok(())
    }

    /// `FROM ... JOIN ... WHERE ...`, shared by the data and count statements.
    fn source_sql(&self) -> SQL {
        let mut sql = SQL::token(Token::FROM);
        if let Some(source) = self.from {
            sql.append_mut(
                SQL::ident(source.table)
                    .push(Token::AS)
                    .append(SQL::ident(source.alias)),
            );
        }
        for join in &self.joins {
            sql.append_mut(join.to_sql());
        }
        if !self.predicates.is_empty() {
            sql.push_mut(Token::WHERE);
            sql.append_mut(SQL::join(&self.predicates, Token::AND));
        }
        sql
    }

    /// `SELECT [DISTINCT] list FROM ... [GROUP BY] [HAVING]`.
    fn grouped_sql(&self) -> SQL {
        let mut sql = SQL::token(Token::SELECT);
        if self.distinct {
            sql.push_mut(Token::DISTINCT);
        }
        sql.append_mut(SQL::join(self.projection.select_list(), Token::COMMA));
        sql.append_mut(self.source_sql());
        if !self.group_by.is_empty() {
            sql.append_mut(SQL::from_iter([Token::GROUP, Token::BY]));
            sql.append_mut(SQL::join(&self.group_by, Token::COMMA));
        }
        if !self.having.is_empty() {
            sql.push_mut(Token::HAVING);
            sql.append_mut(SQL::join(&self.having, Token::AND));
        }
        sql
    }

    /// The full data statement with `limit` in place of the configured one.
    pub(crate) fn select_sql(&self, limit: Option<u64>) -> SQL {
        let mut sql = self.grouped_sql();
        if !self.order_by.is_empty() {
            sql.append_mut(SQL::from_iter([Token::ORDER, Token::BY]));
            sql.append_mut(SQL::join(&self.order_by, Token::COMMA));
        }
        let offset = self.offset.filter(|&n| n > 0);
        match (limit, offset) {
            (Some(n), _) => {
                sql.push_mut(Token::LIMIT);
                sql.append_mut(SQL::number(n.min(MAX_ROWS)));
            }
            // an OFFSET needs a LIMIT; -1 means unbounded
            (None, Some(_)) => {
                sql.push_mut(Token::LIMIT);
                sql.append_mut(SQL::raw("-1"));
            }
            (None, None) => {}
        }
        if let Some(n) = offset {
            sql.push_mut(Token::OFFSET);
            sql.append_mut(SQL::number(n.min(MAX_ROWS)));
        }
        sql
    }

    /// The count statement: same source, joins and predicates, no
    /// projection, ordering or paging. Grouped and distinct queries are
    /// counted through a derived table.
    pub(crate) fn count_sql(&self) -> SQL {
        let count = SQL::token(Token::SELECT).append(crate::expr::count_all());
        if self.distinct || !self.group_by.is_empty() || !self.having.is_empty() {
            count
                .push(Token::FROM)
                .append(self.grouped_sql().parens())
        } else {
            count.append(self.source_sql())
        }
    }

    /// The parenthesised statement, for embedding as a subquery.
    ///
    /// A misconfigured subquery carries its error along, so the outer
    /// statement fails to build instead of running a broken query.
    pub(crate) fn render(&self) -> SQL {
        let sql = self.select_sql(self.limit).parens();
        match self.check() {
            Ok(()) => sql,
            Err(err) => sql.append(SQL::invalid(format!("invalid subquery: {err}"))),
        }
    }

    /// The data statement this query runs.
    pub fn statement(&self) -> Result<Statement> {
        self.check()?;
        self.select_sql(self.limit).build()
    }

    /// The count statement `fetch_count` runs.
    pub fn count_statement(&self) -> Result<Statement> {
        self.check()?;
        self.count_sql().build()
    }
}
