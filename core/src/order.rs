//! ORDER BY keys.

use crate::sql::{SQL, Token};
use crate::traits::ToSQL;

/// Sort direction for ORDER BY clauses
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Placement of NULL sort keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NullOrdering {
    First,
    Last,
}

/// One ORDER BY key: an expression, a direction, and an optional
/// null-ordering.
///
/// Created with [`ExprExt::asc`](crate::expr::ExprExt::asc) /
/// [`ExprExt::desc`](crate::expr::ExprExt::desc). Without an explicit
/// null-ordering the backend default applies.
#[derive(Debug, Clone)]
pub struct OrderSpec {
    pub expr: SQL,
    pub direction: SortDirection,
    pub nulls: Option<NullOrdering>,
}

impl OrderSpec {
    pub fn new(expr: impl ToSQL, direction: SortDirection) -> Self {
        Self {
            expr: expr.into_sql(),
            direction,
            nulls: None,
        }
    }

    pub fn nulls_first(mut self) -> Self {
        self.nulls = Some(NullOrdering::First);
        self
    }

    pub fn nulls_last(mut self) -> Self {
        self.nulls = Some(NullOrdering::Last);
        self
    }
}

impl ToSQL for OrderSpec {
    fn to_sql(&self) -> SQL {
        let mut sql = self.expr.clone().push(match self.direction {
            SortDirection::Asc => Token::ASC,
            SortDirection::Desc => Token::DESC,
        });
        if let Some(nulls) = self.nulls {
            sql.push_mut(Token::NULLS);
            sql.push_mut(match nulls {
                NullOrdering::First => Token::FIRST,
                NullOrdering::Last => Token::LAST,
            });
        }
        sql
    }
}

/// Anything accepted by `order_by`: a single key, a tuple of keys, or a
/// sequence of keys. Keys keep their declared order.
pub trait OrderKeys {
    fn into_keys(self, keys: &mut Vec<OrderSpec>);
}

impl OrderKeys for OrderSpec {
    fn into_keys(self, keys: &mut Vec<OrderSpec>) {
        keys.push(self);
    }
}

impl OrderKeys for Vec<OrderSpec> {
    fn into_keys(self, keys: &mut Vec<OrderSpec>) {
        keys.extend(self);
    }
}

impl<const N: usize> OrderKeys for [OrderSpec; N] {
    fn into_keys(self, keys: &mut Vec<OrderSpec>) {
        keys.extend(self);
    }
}

macro_rules! impl_order_keys_tuple {
    ($($T:ident),+) => {
        impl<$($T: OrderKeys),+> OrderKeys for ($($T,)+) {
            #[allow(non_snake_case)]
            fn into_keys(self, keys: &mut Vec<OrderSpec>) {
                let ($($T,)+) = self;
                $($T.into_keys(keys);)+
            }
        }
    };
}

impl_order_keys_tuple!(A);
impl_order_keys_tuple!(A, B);
impl_order_keys_tuple!(A, B, C);
impl_order_keys_tuple!(A, B, C, D);
impl_order_keys_tuple!(A, B, C, D, E);
impl_order_keys_tuple!(A, B, C, D, E, F);
