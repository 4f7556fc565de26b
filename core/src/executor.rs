//! The statement-execution seam between query construction and a backend.

use std::fmt;

use crate::error::Result;
use crate::row::Row;
use crate::value::Value;

/// A rendered statement: SQL text with `?` placeholders and the values bound
/// to them, in placeholder order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<Value>,
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

/// Runs statements against a relational backend.
///
/// Implementations return every result row as positional values; typed
/// materialisation happens in the query layer. Backend failures are returned
/// unmodified.
pub trait Executor {
    fn query(&self, statement: &Statement) -> Result<Vec<Row>>;
}

impl<E: Executor + ?Sized> Executor for &E {
    fn query(&self, statement: &Statement) -> Result<Vec<Row>> {
        (**self).query(statement)
    }
}
