//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use sea_orm::DatabaseConnection;

use crate::adapters::{seed, sql, InMemoryStore, SqlCategoryRepository};
use crate::domain::entities::{Category, Product};

/// The two products the controller tests work with
pub fn test_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Kalem".to_string(),
            price: 100.0,
            stock: 50,
            color: Some("Kırmızı".to_string()),
            category_id: None,
        },
        Product {
            id: 2,
            name: "Defter".to_string(),
            price: 70.0,
            stock: 60,
            color: Some("Mavi".to_string()),
            category_id: None,
        },
    ]
}

/// Two stored categories, the first one owning both test products
pub fn test_categories() -> Vec<Category> {
    let products = test_products()
        .into_iter()
        .map(|p| Product {
            category_id: Some(1),
            ..p
        })
        .collect();

    vec![
        Category {
            id: 1,
            name: "Kalemler".to_string(),
            products,
        },
        Category {
            id: 2,
            name: "Defterler".to_string(),
            products: Vec::new(),
        },
    ]
}

/// A new product that is not stored yet
pub fn new_product(name: &str, category_id: Option<i32>) -> Product {
    Product {
        id: 0,
        name: name.to_string(),
        price: 30.0,
        stock: 30,
        color: Some("Kırmızı".to_string()),
        category_id,
    }
}

/// In-memory store holding the seed data
pub async fn seeded_memory_store() -> InMemoryStore {
    let store = InMemoryStore::new();
    seed::seed(&store.categories())
        .await
        .expect("Failed to seed in-memory store");
    store
}

/// In-memory SQLite database with the schema and the seed data
pub async fn seeded_sqlite() -> DatabaseConnection {
    let db = sql::connect("sqlite::memory:")
        .await
        .expect("Failed to open SQLite");
    sql::create_schema(&db)
        .await
        .expect("Failed to create schema");
    seed::seed(&SqlCategoryRepository::new(db.clone()))
        .await
        .expect("Failed to seed SQLite");
    db
}
