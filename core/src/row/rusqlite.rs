//! Backend binding for [`rusqlite::Connection`].

use ::rusqlite::types::{ToSqlOutput, ValueRef};
use ::rusqlite::{Connection, params_from_iter};

use crate::error::{QueryError, Result};
use crate::executor::{Executor, Statement};
use crate::row::Row;
use crate::tracing::qdsl_trace_query;
use crate::value::Value;

impl ::rusqlite::ToSql for Value {
    fn to_sql(&self) -> ::rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Null => ToSqlOutput::Owned(::rusqlite::types::Value::Null),
            Value::Integer(i) => ToSqlOutput::Owned(::rusqlite::types::Value::Integer(*i)),
            Value::Real(f) => ToSqlOutput::Owned(::rusqlite::types::Value::Real(*f)),
            Value::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
            Value::Blob(b) => ToSqlOutput::Borrowed(ValueRef::Blob(b)),
        })
    }
}

/// Copies a borrowed column value out of the result set.
///
/// TEXT that is not valid UTF-8 is a [`QueryError::Mapping`] rather than a
/// lossy replacement.
fn owned_value(value: ValueRef<'_>, column: usize) -> Result<Value> {
    Ok(match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Integer(i),
        ValueRef::Real(f) => Value::Real(f),
        ValueRef::Text(bytes) => {
            let text = core::str::from_utf8(bytes).map_err(|e| {
                QueryError::Mapping(format!("column {column} holds invalid UTF-8 text: {e}"))
            })?;
            Value::Text(text.to_owned())
        }
        ValueRef::Blob(bytes) => Value::Blob(bytes.to_vec()),
    })
}

impl Executor for Connection {
    fn query(&self, statement: &Statement) -> Result<Vec<Row>> {
        qdsl_trace_query!(&statement.sql, statement.params.len());

        let mut stmt = self.prepare(&statement.sql)?;
        let width = stmt.column_count();
        let mut rows = stmt.query(params_from_iter(statement.params.iter()))?;

        let mut results = Vec::new();
        while let Some(row) = rows.next()? {
            let values = (0..width)
                .map(|i| owned_value(row.get_ref(i)?, i))
                .collect::<Result<Vec<_>>>()?;
            results.push(Row::new(values));
        }
        Ok(results)
    }
}
