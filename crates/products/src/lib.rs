//! Products domain module.
//!
//! The product record, payload validation, list queries (filter, search,
//! pagination) and category statistics. Deterministic logic only: no IO, no
//! HTTP, no storage.

pub mod product;
pub mod query;
pub mod seed;
pub mod statistics;
pub mod validation;

pub use product::{Price, Product, ProductDraft, ProductId};
pub use query::{ProductPage, ProductQuery, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use statistics::{category_counts, CategoryCounts};
pub use validation::{Field, ProductField, ProductPayload, ValidationError};
