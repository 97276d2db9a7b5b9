//! Domain layer
//!
//! Contains the catalog's data model and the persistence ports.
//! - `entities`: Products, categories, and the identity accessor they share
//! - `ports`: Repository traits implemented by the adapters

pub mod entities;
pub mod ports;
