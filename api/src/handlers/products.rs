//! Product page handlers
//!
//! Form posts are bound onto a `Product` here. Fields that fail to parse are
//! recorded in the model state, so the controller re-renders the form instead
//! of rejecting the request.

use std::str::FromStr;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use crate::controllers::{ModelState, PageResult, ViewResult};
use crate::domain::entities::Product;
use crate::error::AppError;
use crate::views;
use crate::AppState;

/// Raw product form fields, as submitted
#[derive(Debug, Default, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub stock: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub category_id: String,
}

impl ProductForm {
    /// Bind the fields onto a product and validate it.
    ///
    /// A form without an id takes the id from the route, if there is one.
    pub fn bind(self, route_id: Option<i32>) -> (Product, ModelState) {
        let mut state = ModelState::new();

        let id = parse_field(&self.id, "id", &mut state)
            .or(route_id)
            .unwrap_or(0);
        let price = parse_field(&self.price, "price", &mut state).unwrap_or(0.0);
        let stock = parse_field(&self.stock, "stock", &mut state).unwrap_or(0);
        let category_id = parse_field(&self.category_id, "category_id", &mut state);
        let color = Some(self.color.trim().to_string()).filter(|c| !c.is_empty());

        let product = Product {
            id,
            name: self.name.trim().to_string(),
            price,
            stock,
            color,
            category_id,
        };

        state.merge(validator::Validate::validate(&product));
        (product, state)
    }
}

fn parse_field<T: FromStr>(raw: &str, field: &str, state: &mut ModelState) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            state.add_model_error(field, format!("The value '{}' is not valid for {}.", raw, field));
            None
        }
    }
}

fn into_html<M>(result: PageResult<M>, render: impl FnOnce(ViewResult<M>) -> String) -> Response {
    match result {
        PageResult::View(view) => Html(render(view)).into_response(),
        PageResult::Redirect(redirect) => Redirect::to(&redirect.location()).into_response(),
        PageResult::NotFound => {
            (StatusCode::NOT_FOUND, Html(views::render_not_found())).into_response()
        }
    }
}

fn render_form(view: ViewResult<Product>) -> String {
    match (view.view_name, view.model) {
        ("Edit", Some(product)) => views::render_edit(&product, &view.model_state),
        (_, product) => views::render_create(product.as_ref(), &view.model_state),
    }
}

/// GET /Products
pub async fn index(State(state): State<AppState>) -> Result<Response, AppError> {
    let result = state.products.index().await?;

    Ok(into_html(result, |view| {
        views::render_index(view.model.as_deref().unwrap_or_default())
    }))
}

/// GET /Products/Details/:id
pub async fn details(
    State(state): State<AppState>,
    id: Option<Path<i32>>,
) -> Result<Response, AppError> {
    let result = state.products.details(id.map(|Path(id)| id)).await?;

    Ok(into_html(result, |view| match view.model {
        Some(product) => views::render_details(&product),
        None => views::render_not_found(),
    }))
}

/// GET /Products/Create
pub async fn create_form(State(state): State<AppState>) -> Response {
    into_html(state.products.create_form(), render_form)
}

/// POST /Products/Create
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ProductForm>,
) -> Result<Response, AppError> {
    let (product, model_state) = form.bind(None);
    let result = state.products.create(product, model_state).await?;

    Ok(into_html(result, render_form))
}

/// GET /Products/Edit/:id
pub async fn edit_form(
    State(state): State<AppState>,
    id: Option<Path<i32>>,
) -> Result<Response, AppError> {
    let result = state.products.edit_form(id.map(|Path(id)| id)).await?;

    Ok(into_html(result, render_form))
}

/// POST /Products/Edit/:id
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<ProductForm>,
) -> Result<Response, AppError> {
    let (product, model_state) = form.bind(Some(id));
    let result = state.products.edit(id, product, model_state).await?;

    Ok(into_html(result, render_form))
}
