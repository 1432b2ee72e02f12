//! User Model

use serde::{Deserialize, Serialize};

/// Registered user account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub email: String,
    /// Argon2 password hash, never serialized to clients
    #[serde(skip_serializing)]
    pub password_hash: String,
}
