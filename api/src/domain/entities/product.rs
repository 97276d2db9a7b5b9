//! Product domain entity

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::Identifiable;

/// A product in the catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Product {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(
        custom(function = "finite_price", message = "Price must be a number"),
        range(min = 0.0, message = "Price cannot be negative")
    )]
    pub price: f64,
    #[serde(default)]
    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub stock: i32,
    #[serde(default)]
    pub color: Option<String>,
    /// Owning category, if any
    #[serde(default)]
    pub category_id: Option<i32>,
}

/// NaN and the infinities pass a range check but cannot be stored or serialized
fn finite_price(price: f64) -> Result<(), ValidationError> {
    if price.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite"))
    }
}

impl Identifiable for Product {
    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen() -> Product {
        Product {
            id: 1,
            name: "Kalem".to_string(),
            price: 100.0,
            stock: 50,
            color: Some("Kırmızı".to_string()),
            category_id: None,
        }
    }

    #[test]
    fn valid_product_passes_validation() {
        assert!(pen().validate().is_ok());
    }

    #[test]
    fn empty_name_fails_validation() {
        let product = Product {
            name: String::new(),
            ..pen()
        };

        let errors = product.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn negative_stock_fails_validation() {
        let product = Product { stock: -1, ..pen() };

        let errors = product.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("stock"));
    }

    #[test]
    fn non_finite_price_fails_validation() {
        for price in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let product = Product { price, ..pen() };

            let errors = product.validate().unwrap_err();
            assert!(errors.field_errors().contains_key("price"));
        }
    }

    #[test]
    fn deserialize_without_id_is_transient() {
        let json = r#"{"name": "Defter", "price": 70, "stock": 60, "color": "Mavi"}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert!(product.is_transient());
        assert_eq!(product.name, "Defter");
        assert_eq!(product.price, 70.0);
        assert_eq!(product.category_id, None);
    }
}
