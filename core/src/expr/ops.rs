//! Arithmetic over numeric expressions.
//!
//! Columns and computed expressions support `+ - * /` through the standard
//! operator traits. The result type follows [`ArithmeticOutput`] and the
//! result is nullable if either side is.
//!
//! ```ignore
//! select(user.age * 2).from(user)   // ("user"."age" * ?)
//! ```

use crate::sql::Token;
use crate::types::{ArithmeticOutput, Numeric};

use super::null::NullOr;
use super::{Expr, SQLExpr};

/// The expression type produced by `L <op> R`.
pub type Arithmetic<L, R> = SQLExpr<
    <<L as Expr>::SQLType as ArithmeticOutput<<R as Expr>::SQLType>>::Output,
    <<L as Expr>::Nullable as NullOr<<R as Expr>::Nullable>>::Output,
>;

/// Builds `(left <op> right)`.
pub fn arithmetic<L, R>(left: L, operator: Token, right: R) -> Arithmetic<L, R>
where
    L: Expr,
    R: Expr,
    L::SQLType: ArithmeticOutput<R::SQLType>,
    R::SQLType: Numeric,
    L::Nullable: NullOr<R::Nullable>,
{
    SQLExpr::new(
        left.into_sql()
            .push(operator)
            .append(right.into_sql())
            .parens(),
    )
}

/// Implements `Add`, `Sub`, `Mul` and `Div` for an expression type.
macro_rules! impl_arithmetic_ops {
    ([$($generics:tt)*] $ty:ty) => {
        $crate::expr::impl_arithmetic_ops!(@op [$($generics)*] $ty, Add, add, PLUS);
        $crate::expr::impl_arithmetic_ops!(@op [$($generics)*] $ty, Sub, sub, MINUS);
        $crate::expr::impl_arithmetic_ops!(@op [$($generics)*] $ty, Mul, mul, STAR);
        $crate::expr::impl_arithmetic_ops!(@op [$($generics)*] $ty, Div, div, SLASH);
    };
    (@op [$($generics:tt)*] $ty:ty, $trait:ident, $method:ident, $token:ident) => {
        impl<$($generics)*, __Rhs> ::core::ops::$trait<__Rhs> for $ty
        where
            $ty: $crate::expr::Expr,
            __Rhs: $crate::expr::Expr,
            <$ty as $crate::expr::Expr>::SQLType:
                $crate::types::ArithmeticOutput<<__Rhs as $crate::expr::Expr>::SQLType>,
            <__Rhs as $crate::expr::Expr>::SQLType: $crate::types::Numeric,
            <$ty as $crate::expr::Expr>::Nullable:
                $crate::expr::NullOr<<__Rhs as $crate::expr::Expr>::Nullable>,
        {
            type Output = $crate::expr::Arithmetic<$ty, __Rhs>;

            fn $method(self, rhs: __Rhs) -> Self::Output {
                $crate::expr::arithmetic(self, $crate::sql::Token::$token, rhs)
            }
        }
    };
}

pub(crate) use impl_arithmetic_ops;

impl_arithmetic_ops!([T: crate::types::DataType, N: super::Nullability] SQLExpr<T, N>);
