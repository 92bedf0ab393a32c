//! Product storage abstraction.

pub mod in_memory;

pub use in_memory::InMemoryProductStore;

use std::sync::Arc;

use storefront_core::DomainResult;
use storefront_products::{CategoryCounts, Product, ProductDraft, ProductId, ProductPage, ProductQuery};

/// Authoritative product collection.
///
/// Each call is atomic with respect to every other call: no operation observes a
/// partially applied mutation, and the lookup in `get`/`update`/`delete` happens
/// under the same critical section as the decision it feeds.
pub trait ProductStore: Send + Sync {
    /// Filter, search and paginate over a consistent snapshot.
    fn list(&self, query: &ProductQuery) -> DomainResult<ProductPage>;

    fn get(&self, id: &ProductId) -> DomainResult<Product>;

    /// Assign a fresh id and append.
    fn create(&self, draft: ProductDraft) -> DomainResult<Product>;

    /// Replace every field except the id.
    fn update(&self, id: &ProductId, draft: ProductDraft) -> DomainResult<Product>;

    fn delete(&self, id: &ProductId) -> DomainResult<()>;

    /// Product count per category, computed fresh.
    fn statistics(&self) -> DomainResult<CategoryCounts>;

    /// Number of stored products.
    fn count(&self) -> DomainResult<usize>;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn list(&self, query: &ProductQuery) -> DomainResult<ProductPage> {
        (**self).list(query)
    }

    fn get(&self, id: &ProductId) -> DomainResult<Product> {
        (**self).get(id)
    }

    fn create(&self, draft: ProductDraft) -> DomainResult<Product> {
        (**self).create(draft)
    }

    fn update(&self, id: &ProductId, draft: ProductDraft) -> DomainResult<Product> {
        (**self).update(id, draft)
    }

    fn delete(&self, id: &ProductId) -> DomainResult<()> {
        (**self).delete(id)
    }

    fn statistics(&self) -> DomainResult<CategoryCounts> {
        (**self).statistics()
    }

    fn count(&self) -> DomainResult<usize> {
        (**self).count()
    }
}
