//! catalog-server — product catalog backend
//!
//! Stores product listings imported from multiple retail sources, answers
//! filtered and paginated catalog queries, and lets authenticated users
//! group products into named configurations (parts lists).

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod import;
pub mod state;
pub mod util;
