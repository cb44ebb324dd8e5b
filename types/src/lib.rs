//! Shared type definitions for strapi-query
//!
//! This crate provides the small vocabulary types used by the query builder:
//!
//! - [`Status`] - Draft/published content selector
//! - [`Sort`] and [`SortDirection`] - `field:direction` sort entries
//! - [`FilterOperator`] and [`LogicalOperator`] - reserved filter keys
//!
//! # Features
//!
//! - `serde` - Enable serde serialization/deserialization

mod operator;
mod sort;
mod status;

pub use operator::{FilterOperator, LogicalOperator};
pub use sort::{Sort, SortDirection, SortParseError};
pub use status::{Status, StatusParseError};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{FilterOperator, LogicalOperator, Sort, SortDirection, Status};
}
