//! Core of strapi-query: the query document, filter trees, the fluent
//! [`QueryBuilder`] and the bracket-notation query-string codec in [`qs`].

#[macro_use]
mod trace;

pub mod builder;
pub mod document;
pub mod error;
pub mod filters;
pub mod qs;

// Re-export key types
pub use builder::QueryBuilder;
pub use document::{Pagination, Populate, PopulateEntry, QueryDocument};
pub use error::{QueryError, Result};
pub use filters::Filters;
pub use strapi_query_types as types;

/// Creates a [`QueryBuilder`] for `resource`.
///
/// ```
/// let q = strapi_query_core::query("articles").page(2).page_size(10);
/// assert_eq!(q.to_query_string(), "pagination[page]=2&pagination[pageSize]=10");
/// ```
pub fn query(resource: impl Into<String>) -> QueryBuilder {
    QueryBuilder::new(resource)
}
