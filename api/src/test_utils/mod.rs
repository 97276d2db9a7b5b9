//! Test utilities
//!
//! mockall mocks of the repository ports and fixtures for seeded stores.
//!
//! Controller tests use the mocks to check which repository calls happen and
//! how often. Store-level tests use the seeded in-memory store or an
//! in-memory SQLite database, so both providers run the same scenarios.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
