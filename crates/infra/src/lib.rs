//! Infrastructure layer: product storage.

pub mod store;

pub use store::{InMemoryProductStore, ProductStore};
