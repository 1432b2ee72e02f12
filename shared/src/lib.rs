//! Shared types for the catalog backend
//!
//! Common types used across crates: domain models, error types,
//! response structures, and utility functions.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, ErrorCode};
