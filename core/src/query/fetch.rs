//! Terminal operations: statement generation plus execution.

use crate::error::{QueryError, Result};
use crate::executor::Executor;
use crate::projection::Projection;
use crate::row::{FromRow, Row};
use crate::tracing::qdsl_trace_fetch;

use super::SelectQuery;

/// A page of results plus the unrestricted total.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResults<T> {
    /// The rows of this page.
    pub results: Vec<T>,
    /// Number of rows matching the query without offset / limit.
    pub total: u64,
    /// The requested page size; `None` means unbounded.
    pub limit: Option<u64>,
    /// Rows skipped before this page.
    pub offset: u64,
}

impl<T> QueryResults<T> {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

fn materialise<T: FromRow>(rows: &[Row]) -> Result<Vec<T>> {
    rows.iter().map(T::from_row).collect()
}

impl<P: Projection, X: Executor> SelectQuery<P, X> {
    fn run(&self, limit: Option<u64>) -> Result<Vec<P::Row>> {
        self.check()?;
        let statement = self.select_sql(limit).build()?;
        let rows = self.executor.query(&statement)?;
        materialise(&rows)
    }

    /// All matching rows, in query order.
    pub fn fetch(&self) -> Result<Vec<P::Row>> {
        let rows = self.run(self.limit)?;
        qdsl_trace_fetch!("fetch", rows.len());
        Ok(rows)
    }

    /// The single matching row, or `None` if nothing matches.
    ///
    /// Fails with [`QueryError::NonUniqueResult`] if more than one row
    /// matches; at most two rows are read to find out.
    pub fn fetch_one(&self) -> Result<Option<P::Row>> {
        let cap = self.limit.map_or(2, |n| n.min(2));
        let mut rows = self.run(Some(cap))?;
        qdsl_trace_fetch!("fetch_one", rows.len());
        if rows.len() > 1 {
            return Err(QueryError::NonUniqueResult);
        }
        Ok(rows.pop())
    }

    /// The first row in query order, or `None` if nothing matches. A
    /// configured limit is replaced by 1; the offset still applies.
    pub fn fetch_first(&self) -> Result<Option<P::Row>> {
        let rows = self.run(Some(1))?;
        qdsl_trace_fetch!("fetch_first", rows.len());
        Ok(rows.into_iter().next())
    }

    /// Number of matching rows, ignoring offset and limit.
    pub fn fetch_count(&self) -> Result<u64> {
        let statement = self.count_statement()?;
        let rows = self.executor.query(&statement)?;
        let row = rows
            .first()
            .ok_or_else(|| QueryError::Mapping("count statement returned no row".to_string()))?;
        let total = u64::try_from(i64::from_row(row)?)?;
        qdsl_trace_fetch!("fetch_count", 1);
        Ok(total)
    }

    /// One page of rows plus the unrestricted total.
    ///
    /// The count runs first; when it is zero the data statement is skipped.
    pub fn fetch_results(&self) -> Result<QueryResults<P::Row>> {
        let total = self.fetch_count()?;
        let results = if total == 0 {
            Vec::new()
        } else {
            self.run(self.limit)?
        };
        qdsl_trace_fetch!("fetch_results", results.len());
        Ok(QueryResults {
            results,
            total,
            limit: self.limit,
            offset: self.offset.unwrap_or(0),
        })
    }
}
