//! SeaORM entities
//!
//! Table definitions for the SQL adapter. The schema is created from these
//! definitions at start-up (see `adapters::sql::create_schema`).

pub mod categories;
pub mod products;
