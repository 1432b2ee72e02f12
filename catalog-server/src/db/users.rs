//! User store

use shared::models::User;
use sqlx::SqlitePool;

use crate::error::{CatalogError, CatalogResult};

pub async fn create(pool: &SqlitePool, email: &str, password_hash: &str) -> CatalogResult<i64> {
    let result = sqlx::query("INSERT INTO users (email, password_hash) VALUES (?, ?)")
        .bind(email)
        .bind(password_hash)
        .execute(pool)
        .await;
    match result {
        Ok(done) => Ok(done.last_insert_rowid()),
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            Err(CatalogError::Conflict("email"))
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> CatalogResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, email, password_hash FROM users WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

pub async fn exists(pool: &SqlitePool, id: i64) -> CatalogResult<bool> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}
