//! Demo data
//!
//! Two categories with three products between them. Ids are left to the store,
//! so a fresh store numbers them 1..=2 and 1..=3 in declaration order.

use crate::domain::entities::{Category, Product};
use crate::domain::ports::CategoryRepository;
use crate::error::DomainError;

fn product(name: &str, price: f64, stock: i32, color: &str) -> Product {
    Product {
        id: 0,
        name: name.to_string(),
        price,
        stock,
        color: Some(color.to_string()),
        category_id: None,
    }
}

/// The seed categories, each carrying its products
pub fn seed_categories() -> Vec<Category> {
    vec![
        Category {
            id: 0,
            name: "Kalemler".to_string(),
            products: vec![
                product("Kalem", 100.0, 200, "Kırmızı"),
                product("Kurşun Kalem", 200.0, 300, "Mavi"),
            ],
        },
        Category {
            id: 0,
            name: "Defterler".to_string(),
            products: vec![product("Defter", 300.0, 400, "Siyah")],
        },
    ]
}

/// Insert the seed data unless the store already has categories.
///
/// Returns whether anything was inserted.
pub async fn seed<C>(categories: &C) -> Result<bool, DomainError>
where
    C: CategoryRepository + ?Sized,
{
    if !categories.get_all().await?.is_empty() {
        tracing::info!("Store already has categories, skipping seed data");
        return Ok(false);
    }

    for category in seed_categories() {
        let stored = categories.create(&category).await?;
        tracing::debug!(
            "Seeded category {} ({}) with {} products",
            stored.id,
            stored.name,
            stored.products.len()
        );
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStore;
    use crate::domain::ports::Repository;

    #[tokio::test]
    async fn seeding_twice_inserts_once() {
        let store = InMemoryStore::new();
        let categories = store.categories();

        assert!(seed(&categories).await.unwrap());
        assert!(!seed(&categories).await.unwrap());

        assert_eq!(categories.get_all().await.unwrap().len(), 2);
        assert_eq!(store.products().get_all().await.unwrap().len(), 3);
    }
}
