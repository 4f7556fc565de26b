pub mod expr;
pub mod fetch;
pub mod group_by;
pub mod joins;
pub mod select;
pub mod sql_generation;
