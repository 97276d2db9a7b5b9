//! Domain entities
//!
//! Pure domain models for the catalog.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod category;
pub mod product;

pub use category::Category;
pub use product::Product;

/// An entity with an integer identity.
///
/// An id of `0` means "not yet stored"; repositories assign a fresh id on create.
pub trait Identifiable: Clone + Send + Sync + 'static {
    fn id(&self) -> i32;

    fn set_id(&mut self, id: i32);

    fn is_transient(&self) -> bool {
        self.id() == 0
    }
}
