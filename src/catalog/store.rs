//! In-memory product store.
//!
//! # Responsibilities
//! - Own the product collection and the next-id counter
//! - Serialize mutations against each other and against reads
//! - Assign monotonically increasing ids, starting at 1, never reused
//!
//! # Design Decisions
//! - Single RwLock over collection + counter: id assignment and insertion
//!   are one atomic unit relative to concurrent creates
//! - BTreeMap keyed by id, so snapshots come out in ascending id order
//! - Callers receive clones; no references into store internals escape

use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::Utc;

use crate::catalog::product::{Product, ProductPayload};

/// Failure conditions at the store layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The referenced id is not present.
    #[error("product not found")]
    NotFound,
}

#[derive(Debug, Default)]
struct StoreInner {
    products: BTreeMap<u64, Product>,
    next_id: u64,
}

/// Thread-safe in-memory collection of products.
///
/// All operations are safe to call concurrently from request handlers; every
/// read observes a consistent snapshot.
#[derive(Debug)]
pub struct ProductStore {
    inner: RwLock<StoreInner>,
}

impl ProductStore {
    /// Create an empty store. Ids start at 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                products: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Snapshot of all products in ascending id order.
    pub fn list_all(&self) -> Vec<Product> {
        let inner = self.inner.read().expect("product store lock poisoned");
        inner.products.values().cloned().collect()
    }

    /// Look up a product by id.
    pub fn get(&self, id: u64) -> Result<Product, StoreError> {
        let inner = self.inner.read().expect("product store lock poisoned");
        inner.products.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    /// Insert a new product, assigning the next unused id and both timestamps.
    pub fn create(&self, payload: ProductPayload) -> Product {
        let mut inner = self.inner.write().expect("product store lock poisoned");

        let id = inner.next_id;
        inner.next_id += 1;

        let now = Utc::now();
        let product = Product {
            id,
            name: payload.name,
            description: payload.description,
            price: payload.price,
            sku: payload.sku,
            created_at: now,
            updated_at: now,
        };
        inner.products.insert(id, product.clone());
        product
    }

    /// Replace a product's mutable fields, refreshing `updated_at`.
    ///
    /// `id` and `created_at` never change.
    pub fn update(&self, id: u64, payload: ProductPayload) -> Result<Product, StoreError> {
        let mut inner = self.inner.write().expect("product store lock poisoned");

        let product = inner.products.get_mut(&id).ok_or(StoreError::NotFound)?;
        product.name = payload.name;
        product.description = payload.description;
        product.price = payload.price;
        product.sku = payload.sku;
        product.updated_at = Utc::now();
        Ok(product.clone())
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}
