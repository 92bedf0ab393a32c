//! `storefront-core`: shared domain primitives.
//!
//! Pure building blocks only: identifiers, the entity contract and the domain
//! error model. Nothing here knows about HTTP or storage.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::RecordId;
