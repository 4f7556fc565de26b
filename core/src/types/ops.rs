//! Result types of arithmetic between numeric SQL types.

use super::{Any, BigInt, Double, Float, Int, Numeric, SmallInt};

/// The SQL type produced by `Self <op> Rhs`.
pub trait ArithmeticOutput<Rhs: Numeric = Self>: Numeric {
    type Output: Numeric;
}

macro_rules! arithmetic {
    ($($lhs:ident, $rhs:ident => $out:ident;)*) => {
        $(impl ArithmeticOutput<$rhs> for $lhs {
            type Output = $out;
        })*
    };
}

arithmetic! {
    SmallInt, SmallInt => SmallInt;
    SmallInt, Int => Int;
    SmallInt, BigInt => BigInt;
    SmallInt, Float => Float;
    SmallInt, Double => Double;
    Int, SmallInt => Int;
    Int, Int => Int;
    Int, BigInt => BigInt;
    Int, Float => Float;
    Int, Double => Double;
    BigInt, SmallInt => BigInt;
    BigInt, Int => BigInt;
    BigInt, BigInt => BigInt;
    BigInt, Float => Double;
    BigInt, Double => Double;
    Float, SmallInt => Float;
    Float, Int => Float;
    Float, BigInt => Double;
    Float, Float => Float;
    Float, Double => Double;
    Double, SmallInt => Double;
    Double, Int => Double;
    Double, BigInt => Double;
    Double, Float => Double;
    Double, Double => Double;
    Any, Any => Any;
}
