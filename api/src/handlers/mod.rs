//! HTTP handlers
//!
//! Axum request handlers. Each one extracts its inputs, calls a controller
//! action, and turns the outcome into a response.

pub mod categories_api;
pub mod products;
pub mod products_api;

pub use categories_api::{delete_category, get_categories, get_category, post_category};
pub use products::{create, create_form, details, edit, edit_form, index};
pub use products_api::{delete_product, get_product, get_products, post_product, put_product};
