//! SQL adapter for ProductRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::{check_requested_id, db_error};
use crate::domain::entities::{Identifiable, Product};
use crate::domain::ports::{ProductRepository, Repository};
use crate::entity::{categories, products};
use crate::error::DomainError;

/// SeaORM implementation of ProductRepository
pub struct SqlProductRepository {
    db: DatabaseConnection,
}

impl SqlProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository<Product> for SqlProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, DomainError> {
        let results = products::Entity::find()
            .order_by_asc(products::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, DomainError> {
        let result = products::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, product: &Product) -> Result<Product, DomainError> {
        check_requested_id("Product", product.id)?;
        ensure_category(&self.db, product.category_id).await?;

        let result = to_active_model(product)
            .insert(&self.db)
            .await
            .map_err(db_error)?;

        Ok(result.into())
    }

    async fn update(&self, product: &Product) -> Result<(), DomainError> {
        if product.is_transient() {
            return Err(DomainError::NotFound("Product 0 not found".to_string()));
        }
        ensure_category(&self.db, product.category_id).await?;

        match to_active_model(product).update(&self.db).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(DomainError::NotFound(format!(
                "Product {} not found",
                product.id
            ))),
            Err(e) => Err(db_error(e)),
        }
    }

    async fn delete(&self, product: &Product) -> Result<(), DomainError> {
        products::Entity::delete_by_id(product.id)
            .exec(&self.db)
            .await
            .map_err(db_error)?;

        Ok(())
    }
}

#[async_trait]
impl ProductRepository for SqlProductRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError> {
        let result = products::Entity::find()
            .filter(products::Column::Name.eq(name))
            .order_by_asc(products::Column::Id)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_category(&self, category_id: i32) -> Result<Vec<Product>, DomainError> {
        let results = products::Entity::find()
            .filter(products::Column::CategoryId.eq(category_id))
            .order_by_asc(products::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Reject a product that points at a category that does not exist
pub(super) async fn ensure_category<C>(db: &C, category_id: Option<i32>) -> Result<(), DomainError>
where
    C: ConnectionTrait,
{
    let Some(id) = category_id else {
        return Ok(());
    };

    let found = categories::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(db_error)?;

    match found {
        Some(_) => Ok(()),
        None => Err(DomainError::Validation(format!(
            "Category {} does not exist",
            id
        ))),
    }
}

/// Every column set, so an update replaces the whole row.
/// A transient product leaves the id to the database.
pub(super) fn to_active_model(product: &Product) -> products::ActiveModel {
    products::ActiveModel {
        id: if product.is_transient() {
            NotSet
        } else {
            Set(product.id)
        },
        name: Set(product.name.clone()),
        price: Set(product.price),
        stock: Set(product.stock),
        color: Set(product.color.clone()),
        category_id: Set(product.category_id),
    }
}

/// Convert SeaORM model to domain entity
impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Product {
            id: model.id,
            name: model.name,
            price: model.price,
            stock: model.stock,
            color: model.color,
            category_id: model.category_id,
        }
    }
}
