//! Configuration handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use shared::error::{ApiResponse, AppError};
use shared::models::ConfigurationWithProducts;

use crate::auth::AuthUser;
use crate::db::configurations;
use crate::error::CatalogError;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConfigurationRequest {
    pub user_id: i64,
    pub name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConfigurationResponse {
    pub config_id: i64,
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateConfigurationRequest>,
) -> Result<(StatusCode, Json<CreateConfigurationResponse>), CatalogError> {
    let config_id = configurations::create(&state.pool, req.user_id, &req.name).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateConfigurationResponse { config_id }),
    ))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddProductRequest {
    pub product_id: i64,
}

pub async fn add_product(
    State(state): State<AppState>,
    Path(config_id): Path<i64>,
    Json(req): Json<AddProductRequest>,
) -> Result<Json<ApiResponse<()>>, CatalogError> {
    configurations::add_product(&state.pool, config_id, req.product_id).await?;
    Ok(Json(ApiResponse::ok()))
}

pub async fn remove_product(
    State(state): State<AppState>,
    Path((config_id, product_id)): Path<(i64, i64)>,
) -> Result<Json<ApiResponse<()>>, CatalogError> {
    configurations::remove_product(&state.pool, config_id, product_id).await?;
    Ok(Json(ApiResponse::ok()))
}

/// List a user's configurations; only the token's own subject may be queried
pub async fn list_for_user(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthUser>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<ConfigurationWithProducts>>, AppError> {
    if identity.user_id != user_id {
        return Err(AppError::unauthorized());
    }
    let configurations = configurations::list_for_user(&state.pool, user_id).await?;
    Ok(Json(configurations))
}
