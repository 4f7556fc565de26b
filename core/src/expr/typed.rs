//! SQLExpr - A typed SQL expression wrapper.

use core::fmt::{self, Display};
use core::marker::PhantomData;

use crate::row::WrapNullable;
use crate::sql::SQL;
use crate::traits::ToSQL;
use crate::types::{DataType, SQLTypeToRust};

use super::{Expr, NonNull, Nullability};

/// A SQL expression that carries type information.
///
/// This wrapper preserves the SQL type through operations, enabling
/// compile-time type checking of SQL expressions.
///
/// # Type Parameters
///
/// - `T`: The SQL data type marker (Int, Text, etc.)
/// - `N`: The nullability marker (NonNull or Null)
#[derive(Debug, Clone)]
pub struct SQLExpr<T: DataType, N: Nullability = NonNull> {
    sql: SQL,
    _ty: PhantomData<(T, N)>,
}

impl<T: DataType, N: Nullability> SQLExpr<T, N> {
    /// Create a new typed expression from raw SQL.
    #[inline]
    pub fn new(sql: SQL) -> Self {
        Self {
            sql,
            _ty: PhantomData,
        }
    }

    /// Consume the wrapper and return the inner SQL.
    #[inline]
    pub fn into_inner(self) -> SQL {
        self.sql
    }

    /// Get a reference to the inner SQL.
    #[inline]
    pub fn as_sql(&self) -> &SQL {
        &self.sql
    }
}

impl<T: DataType, N: Nullability> ToSQL for SQLExpr<T, N> {
    fn to_sql(&self) -> SQL {
        self.sql.clone()
    }

    fn into_sql(self) -> SQL {
        self.sql
    }
}

impl<T: DataType, N: Nullability> From<SQLExpr<T, N>> for SQL {
    fn from(expr: SQLExpr<T, N>) -> Self {
        expr.sql
    }
}

impl<T, N> Expr for SQLExpr<T, N>
where
    T: DataType,
    N: Nullability + WrapNullable<<T as SQLTypeToRust>::RustType>,
{
    type SQLType = T;
    type Nullable = N;
    type Value = <N as WrapNullable<<T as SQLTypeToRust>::RustType>>::Output;
}

/// Display the SQL text of the expression, with `?` placeholders.
impl<T: DataType, N: Nullability> Display for SQLExpr<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.sql, f)
    }
}
