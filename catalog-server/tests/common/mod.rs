//! Shared helpers for integration tests
#![allow(dead_code)]

use shared::models::ProductCreate;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// In-memory database with the schema applied
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();
    catalog_server::db::init_schema(&pool).await.unwrap();
    pool
}

pub fn product(title: &str, manufacturer: &str, category: &str, store: &str, price: i64) -> ProductCreate {
    ProductCreate {
        title: title.to_string(),
        manufacturer: manufacturer.to_string(),
        price,
        code: format!("{manufacturer}-{title}").replace(' ', "-"),
        warranty: 24,
        link: String::new(),
        category: category.to_string(),
        description: String::new(),
        image: String::new(),
        store: store.to_string(),
    }
}

pub async fn seed_product(pool: &SqlitePool, create: &ProductCreate) -> i64 {
    catalog_server::db::products::insert(pool, create).await.unwrap()
}
