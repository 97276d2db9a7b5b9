use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::{InMemoryCategoryRepository, InMemoryProductRepository};
use crate::domain::entities::{Category, Identifiable, Product};
use crate::error::DomainError;

/// Rows of both tables behind a single lock.
///
/// Categories are stored without their products; reads attach them.
#[derive(Debug)]
pub(super) struct Tables {
    pub categories: BTreeMap<i32, Category>,
    pub products: BTreeMap<i32, Product>,
    next_category_id: i32,
    next_product_id: i32,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            categories: BTreeMap::new(),
            products: BTreeMap::new(),
            next_category_id: 1,
            next_product_id: 1,
        }
    }
}

impl Tables {
    /// Products must point at an existing category, if they point anywhere
    pub fn check_category(&self, category_id: Option<i32>) -> Result<(), DomainError> {
        match category_id {
            Some(id) if !self.categories.contains_key(&id) => Err(DomainError::Validation(
                format!("Category {} does not exist", id),
            )),
            _ => Ok(()),
        }
    }

    pub fn insert_product(&mut self, product: &Product) -> Result<Product, DomainError> {
        self.check_category(product.category_id)?;

        let mut product = product.clone();
        let id = claim_id(&self.products, &mut self.next_product_id, product.id(), "Product")?;
        product.set_id(id);

        self.products.insert(id, product.clone());
        Ok(product)
    }

    pub fn insert_category(&mut self, category: &Category) -> Result<Category, DomainError> {
        let id = claim_id(
            &self.categories,
            &mut self.next_category_id,
            category.id(),
            "Category",
        )?;

        self.categories.insert(
            id,
            Category {
                id,
                name: category.name.clone(),
                products: Vec::new(),
            },
        );

        for product in &category.products {
            let product = Product {
                category_id: Some(id),
                ..product.clone()
            };
            if let Err(e) = self.insert_product(&product) {
                self.remove_category(id);
                return Err(e);
            }
        }

        Ok(self.load_category(id).unwrap_or_default())
    }

    pub fn products_in(&self, category_id: i32) -> Vec<Product> {
        self.products
            .values()
            .filter(|p| p.category_id == Some(category_id))
            .cloned()
            .collect()
    }

    pub fn load_category(&self, id: i32) -> Option<Category> {
        self.categories.get(&id).map(|c| Category {
            products: self.products_in(c.id),
            ..c.clone()
        })
    }

    /// Remove a category and every product in it
    pub fn remove_category(&mut self, id: i32) {
        if self.categories.remove(&id).is_some() {
            self.products.retain(|_, p| p.category_id != Some(id));
        }
    }
}

/// Pick the id for a new row: the requested one if free, otherwise the next
/// counter value. Explicit ids must be positive and unused.
fn claim_id<V>(
    rows: &BTreeMap<i32, V>,
    next: &mut i32,
    requested: i32,
    kind: &str,
) -> Result<i32, DomainError> {
    if requested < 0 {
        return Err(DomainError::Validation(format!(
            "{} id {} must be positive",
            kind, requested
        )));
    }

    if requested == 0 {
        while rows.contains_key(next) {
            *next = next.checked_add(1).ok_or_else(|| {
                DomainError::Validation(format!("No {} ids left", kind.to_lowercase()))
            })?;
        }
        let id = *next;
        *next = next.saturating_add(1);
        return Ok(id);
    }

    if rows.contains_key(&requested) {
        return Err(DomainError::AlreadyExists(format!("{} {}", kind, requested)));
    }
    if requested >= *next {
        *next = requested.saturating_add(1);
    }
    Ok(requested)
}

/// Process-local store shared by the in-memory repositories
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> InMemoryProductRepository {
        InMemoryProductRepository::new(self.tables.clone())
    }

    pub fn categories(&self) -> InMemoryCategoryRepository {
        InMemoryCategoryRepository::new(self.tables.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_id_counts_up_from_one() {
        let mut rows: BTreeMap<i32, ()> = BTreeMap::new();
        let mut next = 1;

        assert_eq!(claim_id(&rows, &mut next, 0, "Product").unwrap(), 1);
        rows.insert(1, ());
        assert_eq!(claim_id(&rows, &mut next, 0, "Product").unwrap(), 2);
    }

    #[test]
    fn claim_id_honours_explicit_ids_and_skips_past_them() {
        let mut rows: BTreeMap<i32, ()> = BTreeMap::new();
        let mut next = 1;

        assert_eq!(claim_id(&rows, &mut next, 5, "Product").unwrap(), 5);
        rows.insert(5, ());
        assert_eq!(claim_id(&rows, &mut next, 0, "Product").unwrap(), 6);
        assert!(matches!(
            claim_id(&rows, &mut next, 5, "Product"),
            Err(DomainError::AlreadyExists(_))
        ));
    }

    #[test]
    fn claim_id_accepts_the_largest_id_then_reports_exhaustion() {
        let mut rows: BTreeMap<i32, ()> = BTreeMap::new();
        let mut next = 1;

        assert_eq!(
            claim_id(&rows, &mut next, i32::MAX, "Product").unwrap(),
            i32::MAX
        );
        rows.insert(i32::MAX, ());
        assert_eq!(next, i32::MAX);

        assert!(matches!(
            claim_id(&rows, &mut next, 0, "Product"),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn claim_id_rejects_negative_ids() {
        let rows: BTreeMap<i32, ()> = BTreeMap::new();
        let mut next = 1;

        assert!(matches!(
            claim_id(&rows, &mut next, -3, "Product"),
            Err(DomainError::Validation(_))
        ));
        assert_eq!(next, 1);
    }

    #[test]
    fn claim_id_does_not_reuse_deleted_ids() {
        let mut rows: BTreeMap<i32, ()> = BTreeMap::new();
        let mut next = 1;

        let first = claim_id(&rows, &mut next, 0, "Product").unwrap();
        rows.insert(first, ());
        rows.remove(&first);

        assert_eq!(claim_id(&rows, &mut next, 0, "Product").unwrap(), 2);
    }

    #[test]
    fn dangling_category_is_rejected() {
        let mut tables = Tables::default();
        let product = Product {
            name: "Kalem".into(),
            category_id: Some(42),
            ..Default::default()
        };

        let result = tables.insert_product(&product);
        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(tables.products.is_empty());
    }

    #[test]
    fn remove_category_cascades() {
        let mut tables = Tables::default();
        let category = tables
            .insert_category(&Category {
                id: 0,
                name: "Kalemler".into(),
                products: vec![Product {
                    name: "Kalem".into(),
                    ..Default::default()
                }],
            })
            .unwrap();
        tables
            .insert_product(&Product {
                name: "Loose".into(),
                ..Default::default()
            })
            .unwrap();

        tables.remove_category(category.id);

        assert!(tables.products_in(category.id).is_empty());
        assert_eq!(tables.products.len(), 1);
    }
}
