//! Mock implementations of port traits

use async_trait::async_trait;
use mockall::mock;

use crate::domain::entities::{Category, Product};
use crate::domain::ports::Repository;
use crate::error::DomainError;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl Repository<Product> for ProductRepo {
        async fn get_all(&self) -> Result<Vec<Product>, DomainError>;
        async fn get_by_id(&self, id: i32) -> Result<Option<Product>, DomainError>;
        async fn create(&self, entity: &Product) -> Result<Product, DomainError>;
        async fn update(&self, entity: &Product) -> Result<(), DomainError>;
        async fn delete(&self, entity: &Product) -> Result<(), DomainError>;
    }
}

mock! {
    pub CategoryRepo {}

    #[async_trait]
    impl Repository<Category> for CategoryRepo {
        async fn get_all(&self) -> Result<Vec<Category>, DomainError>;
        async fn get_by_id(&self, id: i32) -> Result<Option<Category>, DomainError>;
        async fn create(&self, entity: &Category) -> Result<Category, DomainError>;
        async fn update(&self, entity: &Category) -> Result<(), DomainError>;
        async fn delete(&self, entity: &Category) -> Result<(), DomainError>;
    }
}
