use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    /// The query was configured inconsistently (unregistered join source,
    /// missing FROM, projection arity mismatch, ...). Raised before any
    /// statement reaches the backend.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// `fetch_one` matched more than one row
    #[error("Non-unique result: expected at most one row, found several")]
    NonUniqueResult,

    /// Error mapping a column value into a Rust type
    #[error("Mapping error: {0}")]
    Mapping(String),

    /// Integer conversion error
    #[error("Conversion error: {0}")]
    Conversion(#[from] std::num::TryFromIntError),

    /// Rusqlite specific errors
    #[cfg(feature = "rusqlite")]
    #[error("Rusqlite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),
}

/// Result type for query construction and execution
pub type Result<T> = std::result::Result<T, QueryError>;
