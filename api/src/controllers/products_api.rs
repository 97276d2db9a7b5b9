//! Product JSON API

use std::sync::Arc;

use crate::controllers::{ApiResult, CreatedAtActionResult};
use crate::domain::entities::Product;
use crate::domain::ports::Repository;
use crate::error::AppError;

/// JSON actions for products
pub struct ProductsApiController<R: ?Sized> {
    products: Arc<R>,
}

impl<R: ?Sized> Clone for ProductsApiController<R> {
    fn clone(&self) -> Self {
        Self {
            products: self.products.clone(),
        }
    }
}

impl<R> ProductsApiController<R>
where
    R: Repository<Product> + ?Sized,
{
    pub fn new(products: Arc<R>) -> Self {
        Self { products }
    }

    /// GET /api/products
    pub async fn get_products(&self) -> Result<ApiResult<Vec<Product>>, AppError> {
        let products = self.products.get_all().await?;
        Ok(ApiResult::Ok(products))
    }

    /// GET /api/products/:id
    pub async fn get_product(&self, id: i32) -> Result<ApiResult<Product>, AppError> {
        match self.products.get_by_id(id).await? {
            Some(product) => Ok(ApiResult::Ok(product)),
            None => Ok(ApiResult::NotFound),
        }
    }

    /// PUT /api/products/:id
    ///
    /// A body whose id differs from the route id is a malformed request.
    pub async fn put_product(&self, id: i32, product: Product) -> Result<ApiResult<Product>, AppError> {
        if id != product.id {
            return Ok(ApiResult::BadRequest);
        }

        self.products.update(&product).await?;
        tracing::info!("Updated product {}", product.id);

        Ok(ApiResult::NoContent)
    }

    /// POST /api/products
    pub async fn post_product(&self, product: Product) -> Result<ApiResult<Product>, AppError> {
        let created = self.products.create(&product).await?;
        tracing::info!("Created product {} ({})", created.id, created.name);

        Ok(ApiResult::CreatedAtAction(CreatedAtActionResult {
            action_name: "GetProduct",
            route: "/api/products",
            id: created.id,
            value: created,
        }))
    }

    /// DELETE /api/products/:id
    pub async fn delete_product(&self, id: i32) -> Result<ApiResult<Product>, AppError> {
        let Some(product) = self.products.get_by_id(id).await? else {
            return Ok(ApiResult::NotFound);
        };

        self.products.delete(&product).await?;
        tracing::info!("Deleted product {}", product.id);

        Ok(ApiResult::NoContent)
    }
}
