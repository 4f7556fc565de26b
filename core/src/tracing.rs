//! Tracing utilities for query observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level tracing event with the SQL text and parameter count.
///
/// ```ignore
/// qdsl_trace_query!(&statement.sql, statement.params.len());
/// ```
macro_rules! qdsl_trace_query {
    ($sql:expr, $param_count:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(sql = %$sql, params = $param_count, "qdsl.query");
    };
}

/// Emit a debug-level tracing event when a terminal operation completes.
///
/// ```ignore
/// qdsl_trace_fetch!("fetch_one", rows.len());
/// ```
macro_rules! qdsl_trace_fetch {
    ($op:literal, $rows:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(op = $op, rows = $rows, "qdsl.fetch");
    };
}

pub(crate) use qdsl_trace_fetch;
pub(crate) use qdsl_trace_query;
