//! Product Catalog Server
//!
//! CRUD for products and categories, served both as HTML pages and as a JSON API.
//! Uses hexagonal (ports & adapters) architecture: controllers depend only on the
//! repository ports, and the store behind them is picked at start-up.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod config;
mod controllers;
mod domain;
mod entity;
mod error;
mod handlers;
mod views;

#[cfg(test)]
mod test_utils;


use adapters::{seed, sql, InMemoryStore, SqlCategoryRepository, SqlProductRepository};
use config::{Config, StoreKind};
use controllers::{CategoriesApiController, ProductsApiController, ProductsController};
use domain::ports::{CategoryRepository, ProductRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub products: ProductsController<dyn ProductRepository>,
    pub products_api: ProductsApiController<dyn ProductRepository>,
    pub categories_api: CategoriesApiController<dyn CategoryRepository>,
}

impl AppState {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            products: ProductsController::new(products.clone()),
            products_api: ProductsApiController::new(products),
            categories_api: CategoriesApiController::new(categories),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the full router over the given state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Pages
        .route("/Products", get(handlers::index))
        .route("/Products/Details", get(handlers::details))
        .route("/Products/Details/:id", get(handlers::details))
        .route(
            "/Products/Create",
            get(handlers::create_form).post(handlers::create),
        )
        .route("/Products/Edit", get(handlers::edit_form))
        .route(
            "/Products/Edit/:id",
            get(handlers::edit_form).post(handlers::edit),
        )
        // Product API
        .route(
            "/api/products",
            get(handlers::get_products).post(handlers::post_product),
        )
        .route(
            "/api/products/:id",
            get(handlers::get_product)
                .put(handlers::put_product)
                .delete(handlers::delete_product),
        )
        // Category API
        .route(
            "/api/categories",
            get(handlers::get_categories).post(handlers::post_category),
        )
        .route(
            "/api/categories/:id",
            get(handlers::get_category).delete(handlers::delete_category),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the repositories for the configured store
async fn connect_store(
    config: &Config,
) -> anyhow::Result<(Arc<dyn ProductRepository>, Arc<dyn CategoryRepository>)> {
    match config.store {
        StoreKind::Memory => {
            tracing::info!("Using in-memory store");
            let store = InMemoryStore::new();
            let products: Arc<dyn ProductRepository> = Arc::new(store.products());
            let categories: Arc<dyn CategoryRepository> = Arc::new(store.categories());
            Ok((products, categories))
        }
        StoreKind::Sql => {
            tracing::info!("Connecting to database...");
            let db = sql::connect(&config.database_url).await?;
            sql::create_schema(&db).await?;
            tracing::info!("Database connected");

            let products: Arc<dyn ProductRepository> =
                Arc::new(SqlProductRepository::new(db.clone()));
            let categories: Arc<dyn CategoryRepository> = Arc::new(SqlCategoryRepository::new(db));
            Ok((products, categories))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,product_catalog=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Product Catalog...");

    // Load configuration
    let config = Config::from_env();

    let (products, categories) = connect_store(&config).await?;

    if config.seed_data {
        seed::seed(categories.as_ref()).await?;
    }

    let app = build_router(AppState::new(products, categories));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
