//! API routes for catalog-server

pub mod auth;
pub mod configurations;
pub mod health;
pub mod products;

use axum::routing::{delete, get, post};
use axum::{Router, middleware};
use http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    // Public catalog reads
    let catalog = Router::new()
        .route("/product", get(products::list_all))
        .route("/product/{id}", get(products::get_by_id))
        .route("/products", get(products::list_filtered))
        .route("/products/random", get(products::random))
        .route("/manufacturers", get(products::manufacturers))
        .route("/stores", get(products::stores));

    // Account registration and login (no auth)
    let account = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login));

    // Configuration routes (JWT authenticated)
    let configurations = Router::new()
        .route("/configurations", post(configurations::create))
        .route(
            "/configurations/{id}/products",
            post(configurations::add_product),
        )
        .route(
            "/configurations/{id}/products/{product_id}",
            delete(configurations::remove_product),
        )
        .route(
            "/users/{user_id}/configurations",
            get(configurations::list_for_user),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            crate::auth::user_auth_middleware,
        ));

    let cors = cors_layer(&state.cors_allowed_origin);

    Router::new()
        .route("/health", get(health::health_check))
        .merge(catalog)
        .merge(account)
        .merge(configurations)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(allowed_origin: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    match allowed_origin.parse::<HeaderValue>() {
        Ok(origin) => cors.allow_origin(origin),
        Err(_) => {
            tracing::warn!("invalid CORS origin {allowed_origin:?}, CORS origin not set");
            cors
        }
    }
}
