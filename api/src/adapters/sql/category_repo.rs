//! SQL adapter for CategoryRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::{check_requested_id, db_error};
use super::product_repo::to_active_model;
use crate::domain::entities::{Category, Identifiable, Product};
use crate::domain::ports::{CategoryRepository, Repository};
use crate::entity::{categories, products};
use crate::error::DomainError;

/// SeaORM implementation of CategoryRepository
pub struct SqlCategoryRepository {
    db: DatabaseConnection,
}

impl SqlCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository<Category> for SqlCategoryRepository {
    async fn get_all(&self) -> Result<Vec<Category>, DomainError> {
        let results = categories::Entity::find()
            .find_with_related(products::Entity)
            .order_by_asc(categories::Column::Id)
            .order_by_asc(products::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(results
            .into_iter()
            .map(|(category, products)| to_category(category, products))
            .collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Category>, DomainError> {
        let Some(category) = categories::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error)?
        else {
            return Ok(None);
        };

        let products = category
            .find_related(products::Entity)
            .order_by_asc(products::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(Some(to_category(category, products)))
    }

    /// Inserts the category and any products it carries in one transaction
    async fn create(&self, category: &Category) -> Result<Category, DomainError> {
        check_requested_id("Category", category.id)?;
        for product in &category.products {
            check_requested_id("Product", product.id)?;
        }

        let txn = self.db.begin().await.map_err(db_error)?;

        let stored = categories::ActiveModel {
            id: if category.is_transient() {
                NotSet
            } else {
                Set(category.id)
            },
            name: Set(category.name.clone()),
        }
        .insert(&txn)
        .await
        .map_err(db_error)?;

        let mut products = Vec::with_capacity(category.products.len());
        for product in &category.products {
            let product = Product {
                category_id: Some(stored.id),
                ..product.clone()
            };
            let row = to_active_model(&product)
                .insert(&txn)
                .await
                .map_err(db_error)?;
            products.push(row);
        }

        txn.commit().await.map_err(db_error)?;

        Ok(to_category(stored, products))
    }

    /// Renames the category; its products are managed through the product repository
    async fn update(&self, category: &Category) -> Result<(), DomainError> {
        let result = categories::ActiveModel {
            id: Set(category.id),
            name: Set(category.name.clone()),
        }
        .update(&self.db)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(DomainError::NotFound(format!(
                "Category {} not found",
                category.id
            ))),
            Err(e) => Err(db_error(e)),
        }
    }

    /// Deletes the category's products and then the category, atomically
    async fn delete(&self, category: &Category) -> Result<(), DomainError> {
        let txn = self.db.begin().await.map_err(db_error)?;

        let removed = products::Entity::delete_many()
            .filter(products::Column::CategoryId.eq(category.id))
            .exec(&txn)
            .await
            .map_err(db_error)?;

        categories::Entity::delete_by_id(category.id)
            .exec(&txn)
            .await
            .map_err(db_error)?;

        txn.commit().await.map_err(db_error)?;

        tracing::debug!(
            "Deleted category {} with {} products",
            category.id,
            removed.rows_affected
        );
        Ok(())
    }
}

impl CategoryRepository for SqlCategoryRepository {}

fn to_category(model: categories::Model, products: Vec<products::Model>) -> Category {
    Category {
        id: model.id,
        name: model.name,
        products: products.into_iter().map(|m| m.into()).collect(),
    }
}
