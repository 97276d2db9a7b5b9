use std::env;

/// Which persistence provider backs the repositories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// SeaORM over `DATABASE_URL` (SQLite or PostgreSQL)
    Sql,
    /// Process-local store, lost on restart
    Memory,
}

impl std::str::FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sql" => Ok(StoreKind::Sql),
            "memory" => Ok(StoreKind::Memory),
            _ => Err(format!("Unknown store: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreKind,
    pub database_url: String,
    /// Insert the demo categories and products on start-up
    pub seed_data: bool,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let store = match var("STORE").map(|s| s.parse()) {
            Some(Ok(store)) => store,
            Some(Err(e)) => {
                tracing::warn!("{}, falling back to sql", e);
                StoreKind::Sql
            }
            None => StoreKind::Sql,
        };

        Self {
            store,
            database_url: var("DATABASE_URL").unwrap_or_else(|| "sqlite::memory:".to_string()),
            seed_data: var("SEED_DATA")
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
        }
    }
}
