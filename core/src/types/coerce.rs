//! Type compatibility rules for SQL types.

use super::{Any, BigInt, Bool, Bytes, DataType, Double, Float, Int, SmallInt, Text};

/// Marker trait indicating two SQL types can be compared.
///
/// - every type is compatible with itself
/// - integers compare with integers and floats (and the other way round)
/// - `Any` compares with everything
///
/// Comparing an `Int` column with a `Text` value is a compile error.
#[diagnostic::on_unimplemented(
    message = "SQL type `{Self}` is not compatible with `{Rhs}`",
    label = "these SQL types cannot be compared",
    note = "compatible types include: integers with integers/floats, text with text, and any type with itself"
)]
pub trait Compatible<Rhs: DataType = Self>: DataType {}

impl<T: DataType> Compatible<T> for T {}

macro_rules! compatible {
    ($($lhs:ident => [$($rhs:ident),*];)*) => {
        $($(impl Compatible<$rhs> for $lhs {})*)*
    };
}

compatible! {
    SmallInt => [Int, BigInt, Float, Double];
    Int => [SmallInt, BigInt, Float, Double];
    BigInt => [SmallInt, Int, Float, Double];
    Float => [SmallInt, Int, BigInt, Double];
    Double => [SmallInt, Int, BigInt, Float];
}

macro_rules! any_compatible {
    ($($ty:ident),*) => { $(
        impl Compatible<$ty> for Any {}
        impl Compatible<Any> for $ty {}
    )* }
}

any_compatible!(SmallInt, Int, BigInt, Float, Double, Text, Bool, Bytes);
