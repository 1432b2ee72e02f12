//! Domain models for the catalog backend

pub mod configuration;
pub mod product;
pub mod user;

pub use configuration::{Configuration, ConfigurationWithProducts};
pub use product::{Product, ProductCreate};
pub use user::User;
