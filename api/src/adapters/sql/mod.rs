//! SQL adapters
//!
//! Implementations of repository traits using SeaORM. The same repositories run
//! against PostgreSQL or SQLite; tests use an in-memory SQLite database.

pub mod category_repo;
pub mod product_repo;


use std::time::Duration;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema, SqlErr,
};

pub use category_repo::SqlCategoryRepository;
pub use product_repo::SqlProductRepository;

use crate::entity::{categories, products};
use crate::error::DomainError;

/// Open a connection pool for `url`.
///
/// An in-memory SQLite database lives only as long as its connection, so the
/// pool is pinned to one long-lived connection in that case.
pub async fn connect(url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(url.to_owned());

    if url.starts_with("sqlite") && url.contains(":memory:") {
        let forever = Duration::from_secs(60 * 60 * 24 * 365);
        options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(forever)
            .max_lifetime(forever);
    }

    Database::connect(options).await
}

/// Create the `categories` and `products` tables if they do not exist yet
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut categories = schema.create_table_from_entity(categories::Entity);
    categories.if_not_exists();
    db.execute(backend.build(&categories)).await?;

    let mut products = schema.create_table_from_entity(products::Entity);
    products.if_not_exists();
    db.execute(backend.build(&products)).await?;

    tracing::debug!("Schema ready on {:?}", backend);
    Ok(())
}

/// Explicit ids must be positive; 0 lets the database pick one
pub(crate) fn check_requested_id(kind: &str, id: i32) -> Result<(), DomainError> {
    if id < 0 {
        return Err(DomainError::Validation(format!(
            "{} id {} must be positive",
            kind, id
        )));
    }
    Ok(())
}

/// Map a SeaORM error onto the domain, keeping constraint violations distinguishable
pub(crate) fn db_error(e: DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => DomainError::AlreadyExists(msg),
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => DomainError::Validation(msg),
        _ => DomainError::Database(e.to_string()),
    }
}
