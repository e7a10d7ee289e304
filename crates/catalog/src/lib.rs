//! Product catalog integration
//!
//! Implements `shop_agent_core::CatalogClient` over the catalog service's
//! plain HTTP+JSON API.

pub mod http;

pub use http::HttpCatalogClient;
pub use shop_agent_core::{CatalogClient, CatalogError, CatalogQuery};
