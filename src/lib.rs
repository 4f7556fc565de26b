//! # qdsl
//!
//! A type-safe query layer: entities declare typed path expressions, and
//! queries are assembled from them with a fluent builder whose comparisons,
//! aggregates and projections are checked at compile time.
//!
//! ## Quick Start
//!
//! ```ignore
//! use qdsl::prelude::*;
//!
//! entity! {
//!     pub struct Department: "departments" as "department" {
//!         id: i64 as BigInt,
//!         name: String as Text,
//!     }
//! }
//!
//! entity! {
//!     pub struct User: "users" as "user" {
//!         id: i64 as BigInt,
//!         name: String as Text,
//!         age: i32 as Int,
//!         department_id: Option<i64> as BigInt,
//!     }
//!     relations {
//!         department: many_to_one(Department, department_id = id),
//!     }
//! }
//!
//! # fn main() -> qdsl::Result<()> {
//! let conn = rusqlite::Connection::open_in_memory()?;
//! let factory = QueryFactory::new(&conn);
//! let (user, department) = (QUser::default(), QDepartment::default());
//!
//! let users: Vec<User> = factory
//!     .select_from(user)
//!     .join(user.department, department)
//!     .r#where(department.name.eq("dept1"))
//!     .order_by(user.name.asc())
//!     .fetch()?;
//!
//! // a detached query embeds as a subquery
//! let oldest = factory
//!     .select_from(user)
//!     .r#where(user.age.eq(select(user.age.max()).from(user)))
//!     .fetch_one()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Backends
//!
//! | Database | Driver   | Feature Flag |
//! |----------|----------|--------------|
//! | SQLite   | rusqlite | `rusqlite`   |
//!
//! Any other backend plugs in through [`Executor`].

// each of `entity` and `projection` names both a module and its declaring macro
pub use qdsl_core::{
    entity, error, executor, expr, join, order, projection, query, relation, row, sql, traits,
    types, value,
};

pub use qdsl_core::{
    Column, Entity, Executor, FromRow, FromValue, InverseIndex, Model, NullOrdering,
    OrderSpec, Projection, QueryError, QueryFactory, QueryResults, Relation, RelationKind,
    Result, Row, SQL, SelectQuery, SortDirection, Statement, ToSQL, Value,
};
pub use qdsl_core::query::{select, select_from};

#[cfg(feature = "rusqlite")]
pub use rusqlite;

/// Everything needed to declare entities and build queries.
pub mod prelude {
    pub use qdsl_core::{entity, projection};

    pub use qdsl_core::entity::{Column, Entity, Model};
    pub use qdsl_core::error::QueryError;
    pub use qdsl_core::executor::{Executor, Statement};
    pub use qdsl_core::expr::*;
    pub use qdsl_core::join::JoinType;
    pub use qdsl_core::order::{NullOrdering, OrderSpec, SortDirection};
    pub use qdsl_core::projection::Projection;
    pub use qdsl_core::query::{QueryFactory, QueryResults, SelectQuery, select, select_from};
    pub use qdsl_core::relation::{InverseIndex, Relation, RelationKind};
    pub use qdsl_core::row::{FromRow, FromValue, Row};
    pub use qdsl_core::types::{Any, BigInt, Bool, Bytes, Double, Float, Int, SmallInt, Text};
    pub use qdsl_core::value::Value;
}
