//! Product pages
//!
//! The server-rendered CRUD flow: list, details, create, and edit.

use std::sync::Arc;

use crate::controllers::{ModelState, PageResult};
use crate::domain::entities::Product;
use crate::domain::ports::Repository;
use crate::error::AppError;

/// Page actions for products
pub struct ProductsController<R: ?Sized> {
    products: Arc<R>,
}

impl<R: ?Sized> Clone for ProductsController<R> {
    fn clone(&self) -> Self {
        Self {
            products: self.products.clone(),
        }
    }
}

impl<R> ProductsController<R>
where
    R: Repository<Product> + ?Sized,
{
    pub fn new(products: Arc<R>) -> Self {
        Self { products }
    }

    /// GET /Products
    pub async fn index(&self) -> Result<PageResult<Vec<Product>>, AppError> {
        let products = self.products.get_all().await?;
        Ok(PageResult::view("Index", products))
    }

    /// GET /Products/Details/:id
    pub async fn details(&self, id: Option<i32>) -> Result<PageResult<Product>, AppError> {
        let Some(id) = id else {
            return Ok(PageResult::redirect_to_index());
        };

        match self.products.get_by_id(id).await? {
            Some(product) => Ok(PageResult::view("Details", product)),
            None => Ok(PageResult::NotFound),
        }
    }

    /// GET /Products/Create
    pub fn create_form(&self) -> PageResult<Product> {
        PageResult::empty_view("Create")
    }

    /// POST /Products/Create
    pub async fn create(
        &self,
        product: Product,
        model_state: ModelState,
    ) -> Result<PageResult<Product>, AppError> {
        if !model_state.is_valid() {
            return Ok(PageResult::invalid("Create", product, model_state));
        }

        let created = self.products.create(&product).await?;
        tracing::info!("Created product {} ({})", created.id, created.name);

        Ok(PageResult::redirect_to_index())
    }

    /// GET /Products/Edit/:id
    pub async fn edit_form(&self, id: Option<i32>) -> Result<PageResult<Product>, AppError> {
        let Some(id) = id else {
            return Ok(PageResult::redirect_to_index());
        };

        match self.products.get_by_id(id).await? {
            Some(product) => Ok(PageResult::view("Edit", product)),
            None => Ok(PageResult::NotFound),
        }
    }

    /// POST /Products/Edit/:id
    ///
    /// A body whose id differs from the route id is treated as a missing resource.
    pub async fn edit(
        &self,
        id: i32,
        product: Product,
        model_state: ModelState,
    ) -> Result<PageResult<Product>, AppError> {
        if id != product.id {
            return Ok(PageResult::NotFound);
        }

        if !model_state.is_valid() {
            return Ok(PageResult::invalid("Edit", product, model_state));
        }

        self.products.update(&product).await?;
        tracing::info!("Updated product {}", product.id);

        Ok(PageResult::redirect_to_index())
    }
}
