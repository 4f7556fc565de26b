//! Core of the qdsl query layer.
//!
//! - [`entity`]: typed entity handles and path expressions
//! - [`expr`]: comparison, logical, arithmetic, aggregate and CASE expressions
//! - [`query`]: the select builder and its terminal operations
//! - [`executor`]: the seam to a relational backend
//! - [`row`]: positional row materialisation

pub mod entity;
pub mod error;
pub mod executor;
pub mod expr;
pub mod join;
pub mod order;
pub mod projection;
pub mod query;
pub mod relation;
pub mod row;
pub mod sql;
pub mod traits;
pub mod types;
pub mod value;

mod macros;
mod tracing;

#[doc(hidden)]
pub use paste;

pub use entity::{Column, Entity, Model};
pub use error::{QueryError, Result};
pub use executor::{Executor, Statement};
pub use order::{NullOrdering, OrderSpec, SortDirection};
pub use projection::Projection;
pub use query::{QueryFactory, QueryResults, SelectQuery};
pub use relation::{InverseIndex, Relation, RelationKind};
pub use row::{FromRow, FromValue, Row};
pub use sql::{SQL, SQLChunk, Token};
pub use traits::ToSQL;
pub use value::Value;
