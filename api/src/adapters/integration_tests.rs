//! Store equivalence tests
//!
//! Every scenario runs twice: against the in-memory store and against an
//! in-memory SQLite database, both seeded with the same data.

use std::sync::Arc;

use crate::adapters::{SqlCategoryRepository, SqlProductRepository};
use crate::controllers::{ModelState, PageResult, ProductsController};
use crate::domain::entities::Product;
use crate::domain::ports::{CategoryRepository, ProductRepository};
use crate::test_utils::{new_product, seeded_memory_store, seeded_sqlite};

type Stores = (Arc<dyn ProductRepository>, Arc<dyn CategoryRepository>);

async fn memory() -> Stores {
    let store = seeded_memory_store().await;
    let products: Arc<dyn ProductRepository> = Arc::new(store.products());
    let categories: Arc<dyn CategoryRepository> = Arc::new(store.categories());
    (products, categories)
}

async fn sqlite() -> Stores {
    let db = seeded_sqlite().await;
    let products: Arc<dyn ProductRepository> = Arc::new(SqlProductRepository::new(db.clone()));
    let categories: Arc<dyn CategoryRepository> = Arc::new(SqlCategoryRepository::new(db));
    (products, categories)
}

async fn create_through_controller_then_find_by_name((products, categories): Stores) {
    let category = categories.get_all().await.unwrap().remove(0);
    let product = Product {
        color: None,
        ..new_product("Kalem30", Some(category.id))
    };

    let controller = ProductsController::new(products.clone());
    let result = controller
        .create(product.clone(), ModelState::validate(&product))
        .await
        .unwrap();
    assert_eq!(result, PageResult::redirect_to_index());

    let stored = products.find_by_name("Kalem30").await.unwrap().unwrap();
    assert_ne!(stored.id, 0);
    assert_eq!(
        stored,
        Product {
            id: stored.id,
            ..product
        }
    );
}

async fn delete_category_removes_its_products((products, categories): Stores) {
    let category = categories.get_by_id(1).await.unwrap().unwrap();
    assert!(!category.products.is_empty());

    categories.delete(&category).await.unwrap();

    assert!(products.find_by_category(1).await.unwrap().is_empty());
    assert!(categories.get_by_id(1).await.unwrap().is_none());
    // the other category keeps its products
    assert_eq!(products.find_by_category(2).await.unwrap().len(), 1);
}

async fn index_lists_every_seeded_product((products, _): Stores) {
    let controller = ProductsController::new(products);

    match controller.index().await.unwrap() {
        PageResult::View(view) => assert_eq!(view.model.unwrap().len(), 3),
        other => panic!("expected a view, got {:?}", other),
    }
}

async fn dangling_category_is_rejected((products, _): Stores) {
    let result = products.create(&new_product("Yetim", Some(99))).await;

    assert!(matches!(
        result,
        Err(crate::error::DomainError::Validation(_))
    ));
    assert!(products.find_by_name("Yetim").await.unwrap().is_none());
}

async fn negative_id_is_rejected((products, _): Stores) {
    let product = Product {
        id: -1,
        ..new_product("Eksi", None)
    };

    let result = products.create(&product).await;

    assert!(matches!(
        result,
        Err(crate::error::DomainError::Validation(_))
    ));
    assert!(products.find_by_name("Eksi").await.unwrap().is_none());
}

async fn missing_id_reads_as_none((products, categories): Stores) {
    assert!(products.get_by_id(0).await.unwrap().is_none());
    assert!(categories.get_by_id(0).await.unwrap().is_none());
}

#[tokio::test]
async fn memory_create_then_find_by_name() {
    create_through_controller_then_find_by_name(memory().await).await;
}

#[tokio::test]
async fn sqlite_create_then_find_by_name() {
    create_through_controller_then_find_by_name(sqlite().await).await;
}

#[tokio::test]
async fn memory_delete_category_cascades() {
    delete_category_removes_its_products(memory().await).await;
}

#[tokio::test]
async fn sqlite_delete_category_cascades() {
    delete_category_removes_its_products(sqlite().await).await;
}

#[tokio::test]
async fn memory_index_lists_seed() {
    index_lists_every_seeded_product(memory().await).await;
}

#[tokio::test]
async fn sqlite_index_lists_seed() {
    index_lists_every_seeded_product(sqlite().await).await;
}

#[tokio::test]
async fn memory_rejects_dangling_category() {
    dangling_category_is_rejected(memory().await).await;
}

#[tokio::test]
async fn sqlite_rejects_dangling_category() {
    dangling_category_is_rejected(sqlite().await).await;
}

#[tokio::test]
async fn memory_missing_id_is_none() {
    missing_id_reads_as_none(memory().await).await;
}

#[tokio::test]
async fn sqlite_missing_id_is_none() {
    missing_id_reads_as_none(sqlite().await).await;
}

#[tokio::test]
async fn memory_rejects_negative_id() {
    negative_id_is_rejected(memory().await).await;
}

#[tokio::test]
async fn sqlite_rejects_negative_id() {
    negative_id_is_rejected(sqlite().await).await;
}
