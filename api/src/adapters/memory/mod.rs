//! In-memory adapters
//!
//! Repository implementations over a process-local store. Both repositories
//! share one `InMemoryStore`, so a category delete can cascade to its products.

pub mod category_repo;
pub mod product_repo;
mod store;

pub use category_repo::InMemoryCategoryRepository;
pub use product_repo::InMemoryProductRepository;
pub use store::InMemoryStore;
