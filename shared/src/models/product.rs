//! Product Model

use serde::{Deserialize, Serialize};

/// Product listing imported from a retail source
///
/// Products are created once (import or insertion) and are read-only
/// afterwards; there is no update or delete path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    /// Store-assigned identity, immutable
    pub id: i64,
    pub title: String,
    pub manufacturer: String,
    /// Price in the smallest currency unit
    pub price: i64,
    pub code: String,
    /// Warranty duration in months
    pub warranty: i64,
    pub link: String,
    pub category: String,
    pub description: String,
    /// Image reference (URL or hash)
    pub image: String,
    /// Name of the retail source this listing came from
    pub store: String,
}

/// Create product payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCreate {
    pub title: String,
    pub manufacturer: String,
    pub price: i64,
    pub code: String,
    pub warranty: i64,
    pub link: String,
    pub category: String,
    pub description: String,
    pub image: String,
    pub store: String,
}
