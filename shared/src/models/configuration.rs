//! Configuration Model

use serde::{Deserialize, Serialize};

use super::product::Product;

/// A user-owned named collection of products (e.g., a parts list)
///
/// A configuration belongs to exactly one user for its lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Configuration {
    pub id: i64,
    /// Owning user (must reference an existing user)
    pub user_id: i64,
    pub name: String,
    /// Creation timestamp (Unix millis)
    pub created_at: i64,
}

/// Configuration together with its full, eagerly-resolved product list
///
/// Product order within a configuration is unspecified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigurationWithProducts {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub created_at: i64,
    pub products: Vec<Product>,
}

impl ConfigurationWithProducts {
    pub fn new(configuration: Configuration, products: Vec<Product>) -> Self {
        Self {
            id: configuration.id,
            user_id: configuration.user_id,
            name: configuration.name,
            created_at: configuration.created_at,
            products,
        }
    }
}
