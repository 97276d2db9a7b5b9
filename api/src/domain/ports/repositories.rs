//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (in-memory and SQL).

use async_trait::async_trait;

use crate::domain::entities::{Category, Identifiable, Product};
use crate::error::DomainError;

/// Generic CRUD repository over an entity type
#[async_trait]
pub trait Repository<T>: Send + Sync
where
    T: Identifiable,
{
    /// All entities, ordered by id
    async fn get_all(&self) -> Result<Vec<T>, DomainError>;

    /// Find an entity by id. A missing id is `Ok(None)`, never an error.
    async fn get_by_id(&self, id: i32) -> Result<Option<T>, DomainError>;

    /// Store a new entity, assigning an id when it has none
    async fn create(&self, entity: &T) -> Result<T, DomainError>;

    /// Replace the stored entity with the same id
    async fn update(&self, entity: &T) -> Result<(), DomainError>;

    /// Remove the stored entity. Removing a missing entity is a no-op.
    async fn delete(&self, entity: &T) -> Result<(), DomainError>;
}

/// Repository for Product entities
#[async_trait]
pub trait ProductRepository: Repository<Product> {
    /// Find the first product with exactly this name
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError>;

    /// Find all products in a category
    async fn find_by_category(&self, category_id: i32) -> Result<Vec<Product>, DomainError>;
}

/// Repository for Category entities.
///
/// Reads load each category's products; deletes cascade to them.
pub trait CategoryRepository: Repository<Category> {}
