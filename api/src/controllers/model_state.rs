//! Model state
//!
//! Field errors collected while binding and validating a submitted model.
//! Page actions re-render their form instead of saving when it is invalid.

use std::collections::BTreeMap;

use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelState {
    errors: BTreeMap<String, Vec<String>>,
}

impl ModelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the model's validation rules and collect their errors
    pub fn validate<T: Validate>(model: &T) -> Self {
        let mut state = Self::new();
        state.merge(model.validate());
        state
    }

    pub fn merge(&mut self, result: Result<(), ValidationErrors>) {
        let Err(errors) = result else {
            return;
        };

        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("The {} field is invalid.", field));
                self.add_model_error(field.to_string(), message);
            }
        }
    }

    /// Record an error against a field. An empty message still marks the field invalid.
    pub fn add_model_error(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(key.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn field_errors(&self, key: &str) -> &[String] {
        self.errors.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }
}
