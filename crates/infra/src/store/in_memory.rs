use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use storefront_core::{DomainError, DomainResult, Entity};
use storefront_products::{
    category_counts, seed, CategoryCounts, Product, ProductDraft, ProductId, ProductPage,
    ProductQuery,
};

use super::ProductStore;

const NOT_FOUND: &str = "Product not found.";

/// In-memory, insertion-ordered product store.
///
/// One `RwLock` guards the whole collection: writers (and the read-then-decide
/// sequences of update/delete) take it exclusively, listings take a shared
/// snapshot.
#[derive(Debug)]
pub struct InMemoryProductStore {
    inner: RwLock<Vec<Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    /// A store holding the default seed catalog.
    pub fn seeded() -> Self {
        Self::with_products(seed::default_catalog())
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            inner: RwLock::new(products),
        }
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, Vec<Product>>> {
        self.inner
            .read()
            .map_err(|_| DomainError::storage("product store lock poisoned"))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, Vec<Product>>> {
        self.inner
            .write()
            .map_err(|_| DomainError::storage("product store lock poisoned"))
    }
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductStore for InMemoryProductStore {
    fn list(&self, query: &ProductQuery) -> DomainResult<ProductPage> {
        let products = self.read()?;
        Ok(query.apply(products.iter()))
    }

    fn get(&self, id: &ProductId) -> DomainResult<Product> {
        let products = self.read()?;
        products
            .iter()
            .find(|p| p.has_id(id))
            .cloned()
            .ok_or_else(|| DomainError::not_found(NOT_FOUND))
    }

    fn create(&self, draft: ProductDraft) -> DomainResult<Product> {
        let mut products = self.write()?;
        let mut id = ProductId::generate();
        while products.iter().any(|p| p.has_id(&id)) {
            id = ProductId::generate();
        }
        let product = Product::new(id, draft);
        products.push(product.clone());
        tracing::debug!(product_id = %product.id(), total = products.len(), "product stored");
        Ok(product)
    }

    fn update(&self, id: &ProductId, draft: ProductDraft) -> DomainResult<Product> {
        let mut products = self.write()?;
        let product = products
            .iter_mut()
            .find(|p| p.has_id(id))
            .ok_or_else(|| DomainError::not_found(NOT_FOUND))?;
        product.replace(draft);
        Ok(product.clone())
    }

    fn delete(&self, id: &ProductId) -> DomainResult<()> {
        let mut products = self.write()?;
        let before = products.len();
        products.retain(|p| !p.has_id(id));
        if products.len() == before {
            return Err(DomainError::not_found(NOT_FOUND));
        }
        tracing::debug!(product_id = %id, total = products.len(), "product removed");
        Ok(())
    }

    fn statistics(&self) -> DomainResult<CategoryCounts> {
        let products = self.read()?;
        Ok(category_counts(products.iter()))
    }

    fn count(&self) -> DomainResult<usize> {
        Ok(self.read()?.len())
    }
}
