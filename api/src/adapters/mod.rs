//! Adapters layer
//!
//! Implementations of port traits for the supported stores.

pub mod memory;
pub mod seed;
pub mod sql;

#[cfg(test)]
mod integration_tests;

pub use memory::InMemoryStore;
pub use sql::{SqlCategoryRepository, SqlProductRepository};
