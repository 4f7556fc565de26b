//! Core traits for SQL generation.

mod to_sql;

pub use to_sql::*;
