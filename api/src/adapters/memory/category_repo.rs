//! In-memory adapter for CategoryRepository

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::Tables;
use crate::domain::entities::Category;
use crate::domain::ports::{CategoryRepository, Repository};
use crate::error::DomainError;

/// In-memory implementation of CategoryRepository
#[derive(Debug, Clone)]
pub struct InMemoryCategoryRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryCategoryRepository {
    pub(super) fn new(tables: Arc<RwLock<Tables>>) -> Self {
        Self { tables }
    }
}

#[async_trait]
impl Repository<Category> for InMemoryCategoryRepository {
    async fn get_all(&self) -> Result<Vec<Category>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .categories
            .keys()
            .filter_map(|id| tables.load_category(*id))
            .collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Category>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.load_category(id))
    }

    async fn create(&self, category: &Category) -> Result<Category, DomainError> {
        let mut tables = self.tables.write().await;
        tables.insert_category(category)
    }

    /// Renames the category; its products are managed through the product repository
    async fn update(&self, category: &Category) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;

        match tables.categories.get_mut(&category.id) {
            Some(stored) => {
                stored.name = category.name.clone();
                Ok(())
            }
            None => Err(DomainError::NotFound(format!(
                "Category {} not found",
                category.id
            ))),
        }
    }

    async fn delete(&self, category: &Category) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        tables.remove_category(category.id);
        Ok(())
    }
}

impl CategoryRepository for InMemoryCategoryRepository {}
