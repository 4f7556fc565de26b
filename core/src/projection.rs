//! Projections: the declared output shape of a query.
//!
//! A projection knows the expressions it selects and the Rust type each
//! result row materialises into. Single columns, computed expressions,
//! subqueries, tuples of projections, entity handles and
//! [`projection!`](crate::projection) DTOs are all projections.

use crate::expr::{Expr, Nullability, SQLExpr};
use crate::row::FromRow;
use crate::sql::SQL;
use crate::types::DataType;

/// The output shape of a query.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be selected",
    label = "select a column, an expression, a tuple, an entity handle, or a projection! DTO"
)]
pub trait Projection {
    /// The materialised row type.
    type Row: FromRow;

    /// The selected expressions, in row order.
    fn select_list(&self) -> Vec<SQL>;
}

impl<T, N> Projection for SQLExpr<T, N>
where
    T: DataType,
    N: Nullability,
    SQLExpr<T, N>: Expr,
    <SQLExpr<T, N> as Expr>::Value: FromRow,
{
    type Row = <SQLExpr<T, N> as Expr>::Value;

    fn select_list(&self) -> Vec<SQL> {
        vec![self.as_sql().clone()]
    }
}

macro_rules! impl_projection_tuple {
    ($($T:ident),+) => {
        impl<$($T: Projection),+> Projection for ($($T,)+) {
            type Row = ($($T::Row,)+);

            #[allow(non_snake_case)]
            fn select_list(&self) -> Vec<SQL> {
                let ($($T,)+) = self;
                let mut list = Vec::new();
                $(list.extend($T.select_list());)+
                list
            }
        }
    };
}

impl_projection_tuple!(A);
impl_projection_tuple!(A, B);
impl_projection_tuple!(A, B, C);
impl_projection_tuple!(A, B, C, D);
impl_projection_tuple!(A, B, C, D, E);
impl_projection_tuple!(A, B, C, D, E, F);
impl_projection_tuple!(A, B, C, D, E, F, G);
impl_projection_tuple!(A, B, C, D, E, F, G, H);
