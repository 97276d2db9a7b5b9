//! In-memory adapter for ProductRepository

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::Tables;
use crate::domain::entities::Product;
use crate::domain::ports::{ProductRepository, Repository};
use crate::error::DomainError;

/// In-memory implementation of ProductRepository
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryProductRepository {
    pub(super) fn new(tables: Arc<RwLock<Tables>>) -> Self {
        Self { tables }
    }
}

#[async_trait]
impl Repository<Product> for InMemoryProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.products.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.products.get(&id).cloned())
    }

    async fn create(&self, product: &Product) -> Result<Product, DomainError> {
        let mut tables = self.tables.write().await;
        tables.insert_product(product)
    }

    async fn update(&self, product: &Product) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        tables.check_category(product.category_id)?;

        match tables.products.get_mut(&product.id) {
            Some(stored) => {
                *stored = product.clone();
                Ok(())
            }
            None => Err(DomainError::NotFound(format!(
                "Product {} not found",
                product.id
            ))),
        }
    }

    async fn delete(&self, product: &Product) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        tables.products.remove(&product.id);
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.products.values().find(|p| p.name == name).cloned())
    }

    async fn find_by_category(&self, category_id: i32) -> Result<Vec<Product>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.products_in(category_id))
    }
}
