//! Declarative metadata: `entity!` and `projection!`.

/// Declares an entity: its model struct and its `Q`-prefixed handle.
///
/// ```ignore
/// entity! {
///     pub struct User: "users" as "user" {
///         id: i64 as BigInt,
///         name: String as Text,
///         age: i32 as Int,
///         department_id: Option<i64> as BigInt,
///     }
///     relations {
///         department: many_to_one(Department, department_id = id),
///     }
/// }
/// ```
///
/// generates
///
/// - `User`, the model struct with one public field per column
/// - `QUser`, a `Copy` handle whose fields are [`Column`](crate::entity::Column)
///   paths bound to the alias `"user"` and [`Relation`](crate::relation::Relation)
///   paths to the related handles
/// - [`Entity`](crate::entity::Entity), [`Projection`](crate::projection::Projection)
///   and [`FromRow`](crate::row::FromRow) implementations
///
/// Column names equal field names. A relation `name: kind(Target, source = target)`
/// joins the source column of this entity to the target column of `Target`;
/// `kind` is `many_to_one` (this entity owns the foreign key) or
/// `one_to_many` (the target owns it).
#[macro_export]
macro_rules! entity {
    (@kind many_to_one) => { $crate::relation::RelationKind::ManyToOne };
    (@kind one_to_many) => { $crate::relation::RelationKind::OneToMany };

    (
        $(#[$meta:meta])*
        $vis:vis struct $model:ident : $table:literal as $alias:literal {
            $( $(#[$fmeta:meta])* $field:ident : $rty:ty as $sqlty:ident ),* $(,)?
        }
        $( relations {
            $( $rel:ident : $kind:ident ( $target:ident , $src:ident = $tgt:ident ) ),* $(,)?
        } )?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $model {
            $( $(#[$fmeta])* pub $field: $rty, )*
        }

        $crate::paste::paste! {
            #[doc = concat!("Typed path expressions for [`", stringify!($model), "`].")]
            #[derive(Debug, Clone, Copy)]
            $vis struct [<Q $model>] {
                alias: &'static str,
                $( pub $field: $crate::entity::Column<[<Q $model>], $crate::types::$sqlty, $rty>, )*
                $($( pub $rel: $crate::relation::Relation<[<Q $model>], [<Q $target>]>, )*)?
            }

            impl [<Q $model>] {
                pub const fn new(alias: &'static str) -> Self {
                    Self {
                        alias,
                        $( $field: $crate::entity::Column::new(alias, stringify!($field)), )*
                        $($( $rel: $crate::relation::Relation::new(
                            alias,
                            stringify!($src),
                            stringify!($tgt),
                            $crate::entity!(@kind $kind),
                        ), )*)?
                    }
                }
            }

            impl ::core::default::Default for [<Q $model>] {
                fn default() -> Self {
                    Self::new($alias)
                }
            }

            impl $crate::entity::Entity for [<Q $model>] {
                const TABLE: &'static str = $table;
                const COLUMNS: &'static [&'static str] = &[$( stringify!($field) ),*];

                fn alias(&self) -> &'static str {
                    self.alias
                }

                fn aliased(alias: &'static str) -> Self {
                    Self::new(alias)
                }
            }

            impl $crate::projection::Projection for [<Q $model>] {
                type Row = $model;

                fn select_list(&self) -> ::std::vec::Vec<$crate::sql::SQL> {
                    ::std::vec![$( $crate::sql::SQL::column(self.alias, stringify!($field)) ),*]
                }
            }
        }

        $crate::__impl_from_row!($model { $( $field : $rty ),* });
    };
}

/// Declares a DTO projection: a plain struct plus a `Q`-prefixed
/// constructor projection that binds one expression per field, in order.
///
/// ```ignore
/// projection! {
///     pub struct UserDto {
///         name: String,
///         age: i32,
///     }
/// }
///
/// let dtos: Vec<UserDto> = factory
///     .select(QUserDto::new(user.name, user.age))
///     .from(user)
///     .fetch()?;
/// ```
///
/// Each constructor argument must be an expression whose value type is the
/// field's type, so a mismatch is a compile error.
#[macro_export]
macro_rules! projection {
    (
        $(#[$meta:meta])*
        $vis:vis struct $dto:ident {
            $( $(#[$fmeta:meta])* $field:ident : $rty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $dto {
            $( $(#[$fmeta])* pub $field: $rty, )*
        }

        $crate::paste::paste! {
            #[doc = concat!("Constructor projection for [`", stringify!($dto), "`].")]
            #[derive(Debug, Clone)]
            $vis struct [<Q $dto>] {
                select_list: ::std::vec::Vec<$crate::sql::SQL>,
            }

            impl [<Q $dto>] {
                #[allow(clippy::too_many_arguments)]
                pub fn new($( $field: impl $crate::expr::Expr<Value = $rty> ),*) -> Self {
                    Self {
                        select_list: ::std::vec![$( $crate::traits::ToSQL::into_sql($field) ),*],
                    }
                }
            }

            impl $crate::projection::Projection for [<Q $dto>] {
                type Row = $dto;

                fn select_list(&self) -> ::std::vec::Vec<$crate::sql::SQL> {
                    self.select_list.clone()
                }
            }
        }

        $crate::__impl_from_row!($dto { $( $field : $rty ),* });
    };
}

/// Positional [`FromRow`](crate::row::FromRow) for a struct whose fields are
/// read in declaration order.
#[doc(hidden)]
#[macro_export]
macro_rules! __impl_from_row {
    ($ty:ident { $( $field:ident : $rty:ty ),* }) => {
        impl $crate::row::FromRow for $ty {
            const COLUMN_COUNT: usize = 0 $( + <$rty as $crate::row::FromRow>::COLUMN_COUNT )*;

            #[allow(unused_assignments, unused_mut)]
            fn from_row_at(
                row: &$crate::row::Row,
                offset: usize,
            ) -> $crate::error::Result<Self> {
                let mut __off = offset;
                $(
                    let $field = <$rty as $crate::row::FromRow>::from_row_at(row, __off)?;
                    __off += <$rty as $crate::row::FromRow>::COLUMN_COUNT;
                )*
                Ok(Self { $( $field ),* })
            }
        }
    };
}
