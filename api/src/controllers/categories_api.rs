//! Category JSON API

use std::sync::Arc;

use crate::controllers::{ApiResult, CreatedAtActionResult};
use crate::domain::entities::Category;
use crate::domain::ports::Repository;
use crate::error::AppError;

/// JSON actions for categories. Deleting a category deletes its products.
pub struct CategoriesApiController<R: ?Sized> {
    categories: Arc<R>,
}

impl<R: ?Sized> Clone for CategoriesApiController<R> {
    fn clone(&self) -> Self {
        Self {
            categories: self.categories.clone(),
        }
    }
}

impl<R> CategoriesApiController<R>
where
    R: Repository<Category> + ?Sized,
{
    pub fn new(categories: Arc<R>) -> Self {
        Self { categories }
    }

    /// GET /api/categories
    pub async fn get_categories(&self) -> Result<ApiResult<Vec<Category>>, AppError> {
        let categories = self.categories.get_all().await?;
        Ok(ApiResult::Ok(categories))
    }

    /// GET /api/categories/:id
    pub async fn get_category(&self, id: i32) -> Result<ApiResult<Category>, AppError> {
        match self.categories.get_by_id(id).await? {
            Some(category) => Ok(ApiResult::Ok(category)),
            None => Ok(ApiResult::NotFound),
        }
    }

    /// POST /api/categories
    pub async fn post_category(&self, category: Category) -> Result<ApiResult<Category>, AppError> {
        let created = self.categories.create(&category).await?;
        tracing::info!(
            "Created category {} ({}) with {} products",
            created.id,
            created.name,
            created.products.len()
        );

        Ok(ApiResult::CreatedAtAction(CreatedAtActionResult {
            action_name: "GetCategory",
            route: "/api/categories",
            id: created.id,
            value: created,
        }))
    }

    /// DELETE /api/categories/:id
    pub async fn delete_category(&self, id: i32) -> Result<ApiResult<Category>, AppError> {
        let Some(category) = self.categories.get_by_id(id).await? else {
            return Ok(ApiResult::NotFound);
        };

        self.categories.delete(&category).await?;
        tracing::info!(
            "Deleted category {} and {} products",
            category.id,
            category.products.len()
        );

        Ok(ApiResult::NoContent)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mockall::predicate::eq;

    use super::*;
    use crate::test_utils::{test_categories, MockCategoryRepo};

    fn controller(repo: MockCategoryRepo) -> CategoriesApiController<MockCategoryRepo> {
        CategoriesApiController::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn get_categories_returns_all() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_get_all().returning(|| Ok(test_categories()));

        let result = controller(repo).get_categories().await.unwrap();

        match result {
            ApiResult::Ok(categories) => assert_eq!(categories.len(), 2),
            other => panic!("expected Ok, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn get_category_missing_is_not_found() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_get_by_id()
            .with(eq(3))
            .returning(|_| Ok(None));

        let result = controller(repo).get_category(3).await.unwrap();

        assert_eq!(result, ApiResult::NotFound);
    }

    #[tokio::test]
    async fn post_category_returns_created_at_get_category() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_create().times(1).returning(|c| {
            Ok(Category {
                id: 5,
                ..c.clone()
            })
        });

        let result = controller(repo)
            .post_category(Category {
                id: 0,
                name: "Silgiler".to_string(),
                products: Vec::new(),
            })
            .await
            .unwrap();

        match result {
            ApiResult::CreatedAtAction(created) => {
                assert_eq!(created.action_name, "GetCategory");
                assert_eq!(created.location(), "/api/categories/5");
            }
            other => panic!("expected CreatedAtAction, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn delete_category_missing_is_not_found() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_get_by_id().returning(|_| Ok(None));
        repo.expect_delete().never();

        let result = controller(repo).delete_category(9).await.unwrap();

        assert_eq!(result, ApiResult::NotFound);
    }

    #[tokio::test]
    async fn delete_category_existing_deletes_once() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_get_by_id()
            .with(eq(1))
            .returning(|_| Ok(test_categories().into_iter().next()));
        repo.expect_delete()
            .withf(|c| c.id == 1)
            .times(1)
            .returning(|_| Ok(()));

        let result = controller(repo).delete_category(1).await.unwrap();

        assert_eq!(result, ApiResult::NoContent);
    }
}
