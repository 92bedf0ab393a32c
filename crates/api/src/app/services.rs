//! Services shared by every handler.

use std::sync::Arc;

use storefront_infra::{InMemoryProductStore, ProductStore};

/// Handler-facing services, injected as a request extension.
///
/// Owns the product store explicitly, so each app instance (and each test)
/// works against its own collection.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn ProductStore>,
}

impl AppServices {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// Services over a fresh store holding the default seed catalog.
    pub fn seeded() -> Self {
        Self::new(Arc::new(InMemoryProductStore::seeded()))
    }

    pub fn store(&self) -> &dyn ProductStore {
        self.store.as_ref()
    }
}
