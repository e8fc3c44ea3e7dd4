//! Products domain module.
//!
//! This crate contains the catalog record for the forestry shop as a plain value
//! holder (no IO, no HTTP, no storage). Persistence mapping lives in
//! `forestal-infra`.

pub mod product;

pub use product::{Product, ProductId};
