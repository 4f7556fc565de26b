//! ToSQL trait for converting types to SQL fragments.

use crate::sql::{SQL, Token};

/// Trait for types that can be converted to SQL fragments.
pub trait ToSQL {
    fn to_sql(&self) -> SQL;

    /// Consume self and return SQL without cloning.
    /// Default delegates to `to_sql()` (which clones). Types that own their SQL
    /// (like `SQL` and `SQLExpr`) override this to avoid the clone.
    fn into_sql(self) -> SQL
    where
        Self: Sized,
    {
        self.to_sql()
    }
}

impl<T: ToSQL + ?Sized> ToSQL for &T {
    fn to_sql(&self) -> SQL {
        (**self).to_sql()
    }
}

impl<T: ToSQL> ToSQL for Vec<T> {
    fn to_sql(&self) -> SQL {
        SQL::join(self.iter(), Token::COMMA)
    }
}

impl<T: ToSQL> ToSQL for [T] {
    fn to_sql(&self) -> SQL {
        SQL::join(self.iter(), Token::COMMA)
    }
}

impl<T: ToSQL, const N: usize> ToSQL for [T; N] {
    fn to_sql(&self) -> SQL {
        SQL::join(self.iter(), Token::COMMA)
    }
}

// Literals bind as parameters.
macro_rules! impl_to_sql_param {
    ($($ty:ty),*) => { $(
        impl ToSQL for $ty {
            #[inline]
            fn to_sql(&self) -> SQL {
                SQL::param(self.clone())
            }
        }
    )* }
}

impl_to_sql_param!(i16, i32, i64, f32, f64, bool, String);

impl ToSQL for str {
    #[inline]
    fn to_sql(&self) -> SQL {
        SQL::param(self)
    }
}
