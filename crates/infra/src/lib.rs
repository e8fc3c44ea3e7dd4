//! Infrastructure layer: product storage backends and database configuration.

pub mod config;
pub mod product_store;

pub use config::{ConfigError, DatabaseConfig};
pub use product_store::{InMemoryProductStore, PostgresProductStore, ProductStore, StoreError};
