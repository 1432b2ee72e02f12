//! Configuration store — user-owned product collections
//!
//! Associations between a configuration and a product are unique on the
//! (configuration_id, product_id) pair. Add and remove are idempotent:
//! repeated application leaves the same end state as a single application.

use std::collections::HashMap;

use shared::models::{Configuration, ConfigurationWithProducts, Product};
use sqlx::SqlitePool;

use crate::db::{products, users};
use crate::error::{CatalogError, CatalogResult};

pub async fn create(pool: &SqlitePool, user_id: i64, name: &str) -> CatalogResult<i64> {
    if name.trim().is_empty() {
        return Err(CatalogError::Validation(
            "configuration name must not be empty".into(),
        ));
    }
    if !users::exists(pool, user_id).await? {
        return Err(CatalogError::NotFound("user"));
    }

    let result = sqlx::query("INSERT INTO configurations (user_id, name, created_at) VALUES (?, ?, ?)")
        .bind(user_id)
        .bind(name)
        .bind(shared::util::now_millis())
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

pub async fn exists(pool: &SqlitePool, id: i64) -> CatalogResult<bool> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM configurations WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

/// Associate a product with a configuration
///
/// Conflict-tolerant insert: adding an already-present pair succeeds without
/// creating a duplicate row, also under concurrent calls for the same pair.
pub async fn add_product(
    pool: &SqlitePool,
    configuration_id: i64,
    product_id: i64,
) -> CatalogResult<()> {
    if !exists(pool, configuration_id).await? {
        return Err(CatalogError::NotFound("configuration"));
    }
    if !products::exists(pool, product_id).await? {
        return Err(CatalogError::NotFound("product"));
    }

    sqlx::query(
        r#"
        INSERT INTO configuration_items (configuration_id, product_id)
        VALUES (?, ?)
        ON CONFLICT (configuration_id, product_id) DO NOTHING
        "#,
    )
    .bind(configuration_id)
    .bind(product_id)
    .execute(pool)
    .await?;
    Ok(())
}

/// Remove a product from a configuration
///
/// Delete-if-exists: removing an association that is not present succeeds
/// silently, it is not a not-found error.
pub async fn remove_product(
    pool: &SqlitePool,
    configuration_id: i64,
    product_id: i64,
) -> CatalogResult<()> {
    sqlx::query("DELETE FROM configuration_items WHERE configuration_id = ? AND product_id = ?")
        .bind(configuration_id)
        .bind(product_id)
        .execute(pool)
        .await?;
    Ok(())
}

#[derive(sqlx::FromRow)]
struct ItemRow {
    configuration_id: i64,
    #[sqlx(flatten)]
    product: Product,
}

/// All configurations owned by a user, each with its full product list
///
/// Items for every configuration are resolved with one join query and
/// grouped in memory, instead of one item query per configuration.
pub async fn list_for_user(
    pool: &SqlitePool,
    user_id: i64,
) -> CatalogResult<Vec<ConfigurationWithProducts>> {
    let configurations: Vec<Configuration> = sqlx::query_as(
        "SELECT id, user_id, name, created_at FROM configurations WHERE user_id = ? ORDER BY id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    if configurations.is_empty() {
        return Ok(Vec::new());
    }

    let rows: Vec<ItemRow> = sqlx::query_as(
        r#"
        SELECT ci.configuration_id,
               p.id, p.title, p.manufacturer, p.price, p.code, p.warranty,
               p.link, p.category, p.description, p.image, p.store
        FROM configuration_items ci
        JOIN configurations c ON c.id = ci.configuration_id
        JOIN products p ON p.id = ci.product_id
        WHERE c.user_id = ?
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    let mut items: HashMap<i64, Vec<Product>> = HashMap::new();
    for row in rows {
        items.entry(row.configuration_id).or_default().push(row.product);
    }

    Ok(configurations
        .into_iter()
        .map(|configuration| {
            let products = items.remove(&configuration.id).unwrap_or_default();
            ConfigurationWithProducts::new(configuration, products)
        })
        .collect())
}
