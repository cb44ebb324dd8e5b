//! # strapi-query
//!
//! A fluent builder for Strapi-style REST query parameters: filters, sorting,
//! pagination, field selection, relation population, status and locale,
//! encoded as a bracket-notation query string.
//!
//! ## Quick Start
//!
//! ```rust
//! use strapi_query::prelude::*;
//!
//! let q = query("api::article.article")
//!     .r#where("title.$containsi", "rust")
//!     .or([
//!         json!({ "category": { "$eq": "news" } }),
//!         json!({ "featured": { "$eq": true } }),
//!     ])
//!     .sort_by("publishedAt", SortDirection::Desc)
//!     .populate_nested("author", |author| author.fields(["name", "avatar"]))
//!     .page(1)
//!     .page_size(20)
//!     .published();
//!
//! assert_eq!(
//!     q.to_query_string(),
//!     "sort[0]=publishedAt%3Adesc\
//!      &filters[title][$containsi]=rust\
//!      &filters[$or][0][category][$eq]=news\
//!      &filters[$or][1][featured][$eq]=true\
//!      &populate[author][fields][0]=name\
//!      &populate[author][fields][1]=avatar\
//!      &pagination[page]=1\
//!      &pagination[pageSize]=20\
//!      &status=published"
//! );
//! ```
//!
//! ## Composition rules
//!
//! | Method                                   | Effect                                          |
//! |------------------------------------------|-------------------------------------------------|
//! | `filter`                                 | shallow merge, last write wins per top-level key |
//! | `r#where`, `where_op`, `where_nested`    | deep set at a dotted path, siblings kept        |
//! | `and`, `or`, `not`                       | append to `$and`/`$or`/`$not` in call order     |
//! | `sort`, `sort_by`, `asc`, `desc`         | append `field:direction`                        |
//! | `fields`, `select`, `populate`           | replace the whole list                          |
//! | `populate_relation`, `populate_nested`   | set one relation entry, last write wins         |
//!
//! ## Features
//!
//! - `tracing` - Emit builder and encoding events via `tracing` (enabled by default)

// =============================================================================
// Root-level exports
// =============================================================================

/// Result type for document JSON operations
pub use strapi_query_core::Result;

/// The fluent builder
pub use strapi_query_core::QueryBuilder;

/// Document model
pub use strapi_query_core::{Filters, Pagination, Populate, PopulateEntry, QueryDocument};

/// Shared vocabulary types
pub use strapi_query_types::{
    FilterOperator, LogicalOperator, Sort, SortDirection, Status, StatusParseError,
};

/// `json!` for writing filter trees inline
pub use serde_json::{Value, json};

/// Error types
pub mod error {
    pub use strapi_query_core::error::{QueryError, Result};
}

/// Bracket-notation query-string encoder and decoder.
///
/// ```rust
/// use strapi_query::{json, qs};
///
/// let encoded = qs::stringify(&json!({ "filters": { "id": { "$in": [3, 6] } } }));
/// assert_eq!(encoded, "filters[id][$in][0]=3&filters[id][$in][1]=6");
/// assert_eq!(
///     qs::parse(&encoded),
///     json!({ "filters": { "id": { "$in": ["3", "6"] } } })
/// );
/// ```
pub mod qs {
    pub use strapi_query_core::qs::*;
}

/// Document key names as they appear on the wire
pub use strapi_query_core::document::keys;

/// Creates a [`QueryBuilder`] for `resource`.
pub fn query(resource: impl Into<String>) -> QueryBuilder {
    QueryBuilder::new(resource)
}

/// Prelude module for commonly used items
pub mod prelude {
    pub use crate::{
        FilterOperator, LogicalOperator, QueryBuilder, QueryDocument, SortDirection, Status,
        json, query,
    };
}
