//! Core traits for the shopping assistant
//!
//! Collaborators sit behind traits so they can be swapped for deterministic
//! fakes in tests.

mod catalog;

pub use catalog::{CatalogClient, CatalogError, CatalogQuery};
