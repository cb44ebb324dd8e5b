//! Tracing utilities for builder observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a trace-level event for a builder mutation.
///
/// ```ignore
/// query_trace_op!(&self.resource, "sort");
/// query_trace_op!(&self.resource, "where", path);
/// ```
#[macro_export]
macro_rules! query_trace_op {
    ($resource:expr, $op:literal) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(resource = %$resource, op = $op, "strapi_query.builder");
    };
    ($resource:expr, $op:literal, $path:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(resource = %$resource, op = $op, path = %$path, "strapi_query.builder");
    };
}

/// Emit a debug-level event with the resource and encoded query length.
///
/// ```ignore
/// query_trace_encode!(&self.resource, qs.len());
/// ```
#[macro_export]
macro_rules! query_trace_encode {
    ($resource:expr, $len:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(resource = %$resource, len = $len, "strapi_query.encode");
    };
}
