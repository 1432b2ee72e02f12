//! catalog-server entry point
//!
//! Long-running service that:
//! - Stores product listings imported from retail sources (CSV bootstrap)
//! - Answers filtered, paginated catalog queries with accurate totals
//! - Manages user-owned configurations (JWT authenticated)

use catalog_server::config::Config;
use catalog_server::state::AppState;
use catalog_server::{api, import};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting catalog-server (env: {})", config.environment);

    // Initialize application state (pool + schema)
    let state = AppState::new(&config).await?;

    // Optional product bootstrap from CSV
    if let Some(path) = &config.products_csv {
        match import::import_products_from_csv(&state.pool, path).await {
            Ok(count) => tracing::info!("Imported {count} products from {path}"),
            Err(e) => tracing::warn!("CSV import from {path} failed: {e}"),
        }
    }

    let app = api::create_router(state);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("catalog-server HTTP listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
