//! Entity metadata: typed handles and their path expressions.
//!
//! Each entity declared with [`entity!`](crate::entity) gets a model struct
//! and a `Copy` handle (a "Q-type") whose public fields are path
//! expressions bound to one table alias. Handles are immutable and can be
//! shared freely; [`Entity::aliased`] creates an independent alias of the
//! same table for self-joins and subqueries.

use core::fmt;
use core::marker::PhantomData;

use crate::expr::{Expr, ExprExt, ValueNullability, impl_arithmetic_ops};
use crate::projection::Projection;
use crate::row::FromRow;
use crate::sql::SQL;
use crate::traits::ToSQL;
use crate::types::DataType;

/// A typed entity handle.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an entity handle",
    label = "declare the entity with entity!"
)]
pub trait Entity: Projection + Copy + Default {
    /// Table name.
    const TABLE: &'static str;

    /// Column names, in declaration order.
    const COLUMNS: &'static [&'static str];

    /// The alias this handle's paths are bound to.
    fn alias(&self) -> &'static str;

    /// A handle for the same table under another alias.
    fn aliased(alias: &'static str) -> Self;
}

/// The model struct an entity handle materialises into.
pub type Model<E> = <E as Projection>::Row;

/// A path expression: one column of one aliased entity.
///
/// - `E`: the owning entity handle
/// - `T`: the SQL type marker
/// - `R`: the Rust field type (`Option<_>` for nullable columns)
pub struct Column<E, T, R> {
    alias: &'static str,
    name: &'static str,
    _marker: PhantomData<fn() -> (E, T, R)>,
}

impl<E, T, R> Column<E, T, R> {
    pub const fn new(alias: &'static str, name: &'static str) -> Self {
        Self {
            alias,
            name,
            _marker: PhantomData,
        }
    }

    pub const fn alias(&self) -> &'static str {
        self.alias
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<E, T, R> Clone for Column<E, T, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, T, R> Copy for Column<E, T, R> {}

impl<E, T, R> fmt::Debug for Column<E, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("alias", &self.alias)
            .field("name", &self.name)
            .finish()
    }
}

impl<E, T, R> ToSQL for Column<E, T, R> {
    fn to_sql(&self) -> SQL {
        SQL::column(self.alias, self.name)
    }
}

impl<E, T, R> Expr for Column<E, T, R>
where
    T: DataType,
    R: ValueNullability,
{
    type SQLType = T;
    type Nullable = R::Nullable;
    type Value = R;
}

impl<E, T, R> ExprExt for Column<E, T, R>
where
    T: DataType,
    R: ValueNullability,
{
}

impl<E, T, R> Projection for Column<E, T, R>
where
    R: FromRow,
{
    type Row = R;

    fn select_list(&self) -> Vec<SQL> {
        vec![self.to_sql()]
    }
}

impl_arithmetic_ops!([E, T: crate::types::DataType, R] Column<E, T, R>);
