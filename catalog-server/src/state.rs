//! Application state for catalog-server

use sqlx::SqlitePool;

use crate::config::Config;
use crate::db;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// JWT secret for user authentication
    pub jwt_secret: String,
    /// Origin allowed by the CORS layer
    pub cors_allowed_origin: String,
}

impl AppState {
    /// Create a new AppState: open the pool and ensure the schema exists
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = db::connect(&config.database_url).await?;

        Ok(Self {
            pool,
            jwt_secret: config.jwt_secret.clone(),
            cors_allowed_origin: config.cors_allowed_origin.clone(),
        })
    }
}
