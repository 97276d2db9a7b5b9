//! Category domain entity

use serde::{Deserialize, Serialize};

use super::{Identifiable, Product};

/// A product category.
///
/// `products` is filled in when a category is read back from a repository.
/// Deleting a category deletes every product that references it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Identifiable for Category {
    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}
