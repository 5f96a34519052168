use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;

/// Repository trait for Product persistence
///
/// Each call stands alone; nothing here opens a transaction spanning calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Get a product by ID; absence is not an error
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// All products, ordered by id
    async fn get_all(&self) -> ProductResult<Vec<Product>>;

    /// Insert a new product and return it with its assigned id
    async fn add(&self, product: Product) -> ProductResult<Product>;

    /// Overwrite a stored product. Requires an assigned id.
    async fn update(&self, product: Product) -> ProductResult<()>;

    /// Remove a stored product. Missing records are a storage error.
    async fn delete(&self, product: Product) -> ProductResult<()>;
}

#[derive(Debug, Default)]
struct Store {
    next_id: i32,
    products: BTreeMap<i32, Product>,
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn get_all(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.products.values().cloned().collect())
    }

    async fn add(&self, product: Product) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        store.next_id += 1;
        let product = product.with_id(store.next_id);
        store.products.insert(product.id(), product.clone());

        tracing::info!(product_id = product.id(), "Created product");
        Ok(product)
    }

    async fn update(&self, product: Product) -> ProductResult<()> {
        if !product.is_persisted() {
            return Err(ProductError::Storage(
                "cannot update a product without an id".to_string(),
            ));
        }

        let mut store = self.store.write().await;
        match store.products.get_mut(&product.id()) {
            Some(stored) => {
                let id = product.id();
                *stored = product;
                tracing::info!(product_id = id, "Updated product");
                Ok(())
            }
            None => Err(ProductError::Storage(format!(
                "no stored product with id {}",
                product.id()
            ))),
        }
    }

    async fn delete(&self, product: Product) -> ProductResult<()> {
        let mut store = self.store.write().await;

        if store.products.remove(&product.id()).is_some() {
            tracing::info!(product_id = product.id(), "Deleted product");
            Ok(())
        } else {
            Err(ProductError::Storage(format!(
                "no stored product with id {}",
                product.id()
            )))
        }
    }
}
