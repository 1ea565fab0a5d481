//! Shared application state.

use std::sync::Mutex;

use prodreg_core::DomainResult;
use prodreg_products::{Product, ProductChanges, ProductStore};

/// Application services handed to every handler via an `Extension`.
///
/// The store itself is not safe for concurrent mutation, so every operation
/// runs as a critical section behind one mutex. No handler suspends while
/// holding the lock.
#[derive(Debug, Default)]
pub struct AppServices {
    products: Mutex<ProductStore>,
}

impl AppServices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products_list(&self) -> Vec<Product> {
        self.products.lock().unwrap().list()
    }

    pub fn products_create(&self, product: Product) -> DomainResult<Product> {
        self.products.lock().unwrap().create(product)
    }

    pub fn products_remove(&self, id: &str) -> bool {
        self.products.lock().unwrap().remove(id)
    }

    pub fn products_replace(&self, path_id: &str, product: Product) -> DomainResult<Product> {
        self.products.lock().unwrap().replace(path_id, product)
    }

    pub fn products_merge_patch(
        &self,
        path_id: &str,
        changes: ProductChanges,
    ) -> DomainResult<Product> {
        self.products.lock().unwrap().merge_patch(path_id, changes)
    }
}
