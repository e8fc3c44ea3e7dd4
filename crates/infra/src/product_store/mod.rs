//! Product storage boundary.
//!
//! This module defines the storage collaborator the catalog record is persisted
//! through, plus an in-memory backend (tests/dev) and a Postgres backend.

pub mod in_memory;
pub mod postgres;
pub mod r#trait;

pub use in_memory::InMemoryProductStore;
pub use postgres::PostgresProductStore;
pub use r#trait::{ProductStore, StoreError};
