//! Catalog store — product primitives and the filtered query service
//!
//! Products are write-once: created by import or insertion, then read-only.

use serde::Serialize;
use shared::models::{Product, ProductCreate};
use sqlx::SqlitePool;

use crate::db::filter::ProductFilter;
use crate::error::CatalogResult;

pub(crate) const PRODUCT_COLUMNS: &str =
    "id, title, manufacturer, price, code, warranty, link, category, description, image, store";

/// One page of matching products plus the size of the full matching set
///
/// `total_count` always describes the whole result set for the filter, even
/// when the requested page is past the end and `data` is empty.
#[derive(Debug, Serialize)]
pub struct ProductPage {
    pub data: Vec<Product>,
    #[serde(rename = "totalCount")]
    pub total_count: i64,
}

pub async fn insert(pool: &SqlitePool, product: &ProductCreate) -> CatalogResult<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO products (title, manufacturer, price, code, warranty, link, category, description, image, store)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&product.title)
    .bind(&product.manufacturer)
    .bind(product.price)
    .bind(&product.code)
    .bind(product.warranty)
    .bind(&product.link)
    .bind(&product.category)
    .bind(&product.description)
    .bind(&product.image)
    .bind(&product.store)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Unfiltered listing, ordered by id
pub async fn list_all(pool: &SqlitePool) -> CatalogResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id"
    ))
    .fetch_all(pool)
    .await?;
    Ok(products)
}

pub async fn get(pool: &SqlitePool, id: i64) -> CatalogResult<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(product)
}

pub async fn exists(pool: &SqlitePool, id: i64) -> CatalogResult<bool> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM products WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

/// Filtered, paginated catalog query
///
/// The predicate is built once and applied to both the COUNT and the fetch
/// query; both run inside a single transaction so the count and the page
/// describe the same snapshot. The fetch is ordered by id before
/// LIMIT/OFFSET, which makes successive pages partition the matching set
/// with no overlap and no gaps.
pub async fn query(pool: &SqlitePool, filter: &ProductFilter) -> CatalogResult<ProductPage> {
    let predicate = filter.predicate()?;
    let page = filter.page_params();
    let where_clause = predicate.build_where_clause();

    let mut tx = pool.begin().await?;

    let count_sql = format!("SELECT COUNT(*) FROM products{where_clause}");
    let total_count: i64 = predicate
        .apply_bindings_scalar(sqlx::query_scalar(&count_sql))
        .fetch_one(&mut *tx)
        .await?;

    let fetch_sql = format!(
        "SELECT {PRODUCT_COLUMNS} FROM products{where_clause} ORDER BY id LIMIT ? OFFSET ?"
    );
    let data = predicate
        .apply_bindings_as(sqlx::query_as::<_, Product>(&fetch_sql))
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(ProductPage { data, total_count })
}

/// Up to `n` products in random order; returns the whole catalog when it
/// holds fewer than `n` products.
pub async fn random_sample(pool: &SqlitePool, n: i64) -> CatalogResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY RANDOM() LIMIT ?"
    ))
    .bind(n)
    .fetch_all(pool)
    .await?;
    Ok(products)
}

/// Distinct non-empty manufacturer names, optionally restricted to one category
pub async fn distinct_manufacturers(
    pool: &SqlitePool,
    category: Option<&str>,
) -> CatalogResult<Vec<String>> {
    let manufacturers: Vec<String> = if let Some(category) = category {
        sqlx::query_scalar(
            r#"
            SELECT DISTINCT manufacturer FROM products
            WHERE category = ? AND manufacturer <> ''
            ORDER BY manufacturer
            "#,
        )
        .bind(category)
        .fetch_all(pool)
        .await?
    } else {
        sqlx::query_scalar(
            r#"
            SELECT DISTINCT manufacturer FROM products
            WHERE manufacturer <> ''
            ORDER BY manufacturer
            "#,
        )
        .fetch_all(pool)
        .await?
    };
    Ok(manufacturers)
}

/// Distinct non-empty store names
pub async fn distinct_stores(pool: &SqlitePool) -> CatalogResult<Vec<String>> {
    let stores: Vec<String> = sqlx::query_scalar(
        "SELECT DISTINCT store FROM products WHERE store <> '' ORDER BY store",
    )
    .fetch_all(pool)
    .await?;
    Ok(stores)
}
