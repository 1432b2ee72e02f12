//! Registration and login handlers
//!
//! Password hashing and token issuance are a self-contained capability; the
//! catalog core never inspects tokens itself.

use axum::{Json, extract::State};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use shared::error::{ApiResponse, AppError};

use crate::auth::create_token;
use crate::db::users;
use crate::state::AppState;
use crate::util;

#[derive(Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), AppError> {
    if req.email.trim().is_empty() {
        return Err(AppError::validation("email must not be empty").with_detail("field", "email"));
    }
    if req.password.is_empty() {
        return Err(
            AppError::validation("password must not be empty").with_detail("field", "password")
        );
    }

    let password_hash = util::hash_password(&req.password).map_err(|e| {
        tracing::error!("password hashing failed: {e}");
        AppError::internal("failed to process password")
    })?;

    users::create(&state.pool, req.email.trim(), &password_hash).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok())))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = users::find_by_email(&state.pool, req.email.trim())
        .await?
        .ok_or_else(AppError::invalid_credentials)?;

    if !util::verify_password(&req.password, &user.password_hash) {
        return Err(AppError::invalid_credentials());
    }

    let token = create_token(user.id, &user.email, &state.jwt_secret).map_err(|e| {
        tracing::error!("token issuance failed: {e}");
        AppError::internal("failed to issue token")
    })?;

    Ok(Json(LoginResponse { token }))
}
