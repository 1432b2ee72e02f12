//! Catalog query handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::Product;

use crate::db::filter::ProductFilter;
use crate::db::products::{self, ProductPage};
use crate::error::CatalogError;
use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, CatalogError>;

/// Number of products returned by the random sample endpoint
const RANDOM_SAMPLE_SIZE: i64 = 12;

pub async fn list_all(State(state): State<AppState>) -> ApiResult<Vec<Product>> {
    let all = products::list_all(&state.pool).await?;
    Ok(Json(all))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Product> {
    let product = products::get(&state.pool, id)
        .await?
        .ok_or(CatalogError::NotFound("product"))?;
    Ok(Json(product))
}

/// Filtered, paginated listing: `{ data, totalCount }`
pub async fn list_filtered(
    State(state): State<AppState>,
    Query(filter): Query<ProductFilter>,
) -> ApiResult<ProductPage> {
    let page = products::query(&state.pool, &filter).await?;
    Ok(Json(page))
}

pub async fn random(State(state): State<AppState>) -> ApiResult<Vec<Product>> {
    let sample = products::random_sample(&state.pool, RANDOM_SAMPLE_SIZE).await?;
    Ok(Json(sample))
}

#[derive(Deserialize)]
pub struct ManufacturersQuery {
    pub category: Option<String>,
}

pub async fn manufacturers(
    State(state): State<AppState>,
    Query(query): Query<ManufacturersQuery>,
) -> ApiResult<Vec<String>> {
    let category = query.category.as_deref().filter(|c| !c.is_empty());
    let manufacturers = products::distinct_manufacturers(&state.pool, category).await?;
    Ok(Json(manufacturers))
}

pub async fn stores(State(state): State<AppState>) -> ApiResult<Vec<String>> {
    let stores = products::distinct_stores(&state.pool).await?;
    Ok(Json(stores))
}
