//! In-memory catalog doubles
//!
//! Used by this crate's tests and by the server's router tests.

use async_trait::async_trait;
use parking_lot::Mutex;

use shop_agent_core::{CatalogClient, CatalogError, CatalogQuery, Product};

/// Answers every query with the same products and records what was asked
#[derive(Debug, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
    queries: Mutex<Vec<CatalogQuery>>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Queries received so far, oldest first
    pub fn queries(&self) -> Vec<CatalogQuery> {
        self.queries.lock().clone()
    }
}

#[async_trait]
impl CatalogClient for StaticCatalog {
    async fn query(&self, query: &CatalogQuery) -> Result<Vec<Product>, CatalogError> {
        self.queries.lock().push(query.clone());
        Ok(self.products.clone())
    }
}

/// Fails every query with the same error
#[derive(Debug)]
pub struct FailingCatalog {
    error: CatalogError,
    calls: Mutex<usize>,
}

impl FailingCatalog {
    pub fn new(error: CatalogError) -> Self {
        Self {
            error,
            calls: Mutex::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock()
    }
}

#[async_trait]
impl CatalogClient for FailingCatalog {
    async fn query(&self, _query: &CatalogQuery) -> Result<Vec<Product>, CatalogError> {
        *self.calls.lock() += 1;
        Err(self.error.clone())
    }
}
