//! Store-layer error type for catalog-server
//!
//! `CatalogError` is the typed error for the db layer. It bridges into the
//! API-layer [`AppError`] so handlers can use `?` without manual
//! `.map_err(|e| { tracing::error!(...); AppError::new(...) })` boilerplate.

use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Store-layer error taxonomy
///
/// - `Validation`: malformed or missing required input, never retried
/// - `NotFound`: a referenced entity is absent (distinct from the idempotent
///   zero-rows cases, which are not errors)
/// - `Query`: the store rejected a filter value it cannot compare; carries
///   the offending field
/// - `Conflict`: a uniqueness constraint was violated
/// - `Store`: connectivity or transport failure of the backing store,
///   surfaced as-is with no automatic retry
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("invalid value {value:?} for filter field `{field}`")]
    Query { field: &'static str, value: String },

    #[error("{0} already exists")]
    Conflict(&'static str),

    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),
}

/// Convenience type alias for store-layer results
pub type CatalogResult<T> = Result<T, CatalogError>;

impl From<CatalogError> for AppError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::Validation(msg) => AppError::validation(msg),
            CatalogError::NotFound(what) => {
                let code = match what {
                    "product" => ErrorCode::ProductNotFound,
                    "configuration" => ErrorCode::ConfigurationNotFound,
                    "user" => ErrorCode::UserNotFound,
                    _ => ErrorCode::NotFound,
                };
                AppError::with_message(code, format!("{what} not found"))
            }
            CatalogError::Query { field, value } => AppError::with_message(
                ErrorCode::InvalidFilterValue,
                format!("invalid value {value:?} for filter field `{field}`"),
            )
            .with_detail("field", field),
            CatalogError::Conflict(what) => AppError::already_exists(what),
            CatalogError::Store(err) => {
                tracing::error!(error = %err, "Store database error");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
