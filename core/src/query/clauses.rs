//! Argument shapes accepted by `where`, `having` and `group_by`.

use crate::entity::Column;
use crate::expr::{Nullability, SQLExpr};
use crate::sql::SQL;
use crate::traits::ToSQL;
use crate::types::{BooleanLike, DataType};

/// Zero or more predicates.
///
/// Implemented for a boolean expression, `Option` of predicates (absent is
/// dropped), tuples, arrays and vectors of predicates, and `()`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a predicate list",
    label = "pass a boolean expression, an Option of one, or a tuple / array / Vec of them"
)]
pub trait Predicates {
    fn into_predicates(self, predicates: &mut Vec<SQL>);
}

impl<T: BooleanLike, N: Nullability> Predicates for SQLExpr<T, N> {
    fn into_predicates(self, predicates: &mut Vec<SQL>) {
        predicates.push(self.into_inner());
    }
}

impl<P: Predicates> Predicates for Option<P> {
    fn into_predicates(self, predicates: &mut Vec<SQL>) {
        if let Some(p) = self {
            p.into_predicates(predicates);
        }
    }
}

impl<P: Predicates> Predicates for Vec<P> {
    fn into_predicates(self, predicates: &mut Vec<SQL>) {
        for p in self {
            p.into_predicates(predicates);
        }
    }
}

impl<P: Predicates, const N: usize> Predicates for [P; N] {
    fn into_predicates(self, predicates: &mut Vec<SQL>) {
        for p in self {
            p.into_predicates(predicates);
        }
    }
}

impl Predicates for () {
    fn into_predicates(self, _: &mut Vec<SQL>) {}
}

/// One or more grouping keys: a column, a computed expression, or a tuple
/// of keys.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a grouping key",
    label = "pass a column, an expression, or a tuple of them"
)]
pub trait GroupKeys {
    fn into_keys(self, keys: &mut Vec<SQL>);
}

impl<E, T, R> GroupKeys for Column<E, T, R> {
    fn into_keys(self, keys: &mut Vec<SQL>) {
        keys.push(self.to_sql());
    }
}

impl<T: DataType, N: Nullability> GroupKeys for SQLExpr<T, N> {
    fn into_keys(self, keys: &mut Vec<SQL>) {
        keys.push(self.into_inner());
    }
}

macro_rules! impl_clause_tuples {
    ($($T:ident),+) => {
        impl<$($T: Predicates),+> Predicates for ($($T,)+) {
            #[allow(non_snake_case)]
            fn into_predicates(self, predicates: &mut Vec<SQL>) {
                let ($($T,)+) = self;
                $($T.into_predicates(predicates);)+
            }
        }

        impl<$($T: GroupKeys),+> GroupKeys for ($($T,)+) {
            #[allow(non_snake_case)]
            fn into_keys(self, keys: &mut Vec<SQL>) {
                let ($($T,)+) = self;
                $($T.into_keys(keys);)+
            }
        }
    };
}

impl_clause_tuples!(A);
impl_clause_tuples!(A, B);
impl_clause_tuples!(A, B, C);
impl_clause_tuples!(A, B, C, D);
impl_clause_tuples!(A, B, C, D, E);
impl_clause_tuples!(A, B, C, D, E, F);
impl_clause_tuples!(A, B, C, D, E, F, G);
impl_clause_tuples!(A, B, C, D, E, F, G, H);
