//! In-memory storage engine.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::products::model::{Product, ProductFields};
use crate::store::{ProductStore, StoreError};

/// Mutex-guarded map keyed by product id. The default engine, and the one
/// the test suite runs against.
#[derive(Debug, Default)]
pub struct MemoryStore {
    products: Mutex<HashMap<String, Product>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Product>>, StoreError> {
        self.products
            .lock()
            .map_err(|_| StoreError::Backend("product map lock poisoned".to_string()))
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn find(&self) -> Result<Vec<Product>, StoreError> {
        let products = self.lock()?;
        Ok(products.values().cloned().collect())
    }

    async fn find_one(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let products = self.lock()?;
        Ok(products.get(id).cloned())
    }

    async fn create(&self, fields: ProductFields) -> Result<Product, StoreError> {
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: fields.name,
            price: fields.price,
            quantity: fields.quantity,
        };
        let mut products = self.lock()?;
        products.insert(product.id.clone(), product.clone());
        Ok(product)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut products = self.lock()?;
        products.remove(id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        let mut products = self.lock()?;
        products.clear();
        Ok(())
    }
}
