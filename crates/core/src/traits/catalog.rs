//! Catalog collaborator boundary
//!
//! The dialogue policy only sees this trait; the HTTP implementation lives
//! in the catalog crate and tests substitute an in-memory fake.

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

use crate::Product;

/// One kind of product lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogQuery {
    /// Products matching a category name
    Search { category: String },
    /// Unfiltered listing
    All,
    /// Best rated products
    TopRated,
    /// Products currently on promotion
    Promotions,
    /// Products priced within `[min, max]`
    PriceRange { min: u64, max: u64 },
}

impl CatalogQuery {
    pub fn search(category: impl Into<String>) -> Self {
        CatalogQuery::Search {
            category: category.into(),
        }
    }

    /// Price range starting at zero
    pub fn up_to(max: u64) -> Self {
        CatalogQuery::PriceRange { min: 0, max }
    }

    /// Short label used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogQuery::Search { .. } => "search",
            CatalogQuery::All => "all",
            CatalogQuery::TopRated => "top_rated",
            CatalogQuery::Promotions => "promotions",
            CatalogQuery::PriceRange { .. } => "price_range",
        }
    }
}

impl fmt::Display for CatalogQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogQuery::Search { category } => write!(f, "search(q={})", category),
            CatalogQuery::PriceRange { min, max } => write!(f, "price_range({}..={})", min, max),
            other => f.write_str(other.kind()),
        }
    }
}

/// Catalog lookup errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout")]
    Timeout,

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Product catalog collaborator
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Run a single lookup. One attempt, no retry.
    async fn query(&self, query: &CatalogQuery) -> Result<Vec<Product>, CatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_labels() {
        assert_eq!(CatalogQuery::up_to(500), CatalogQuery::PriceRange { min: 0, max: 500 });
        assert_eq!(CatalogQuery::search("Mode").to_string(), "search(q=Mode)");
        assert_eq!(CatalogQuery::TopRated.to_string(), "top_rated");
    }

    struct Empty;

    #[async_trait]
    impl CatalogClient for Empty {
        async fn query(&self, query: &CatalogQuery) -> Result<Vec<Product>, CatalogError> {
            match query {
                CatalogQuery::Promotions => Err(CatalogError::Status(404)),
                _ => Ok(Vec::new()),
            }
        }
    }

    #[tokio::test]
    async fn test_usable_as_trait_object() {
        let catalog: std::sync::Arc<dyn CatalogClient> = std::sync::Arc::new(Empty);
        assert!(catalog.query(&CatalogQuery::All).await.unwrap().is_empty());
        assert_eq!(
            catalog.query(&CatalogQuery::Promotions).await.unwrap_err(),
            CatalogError::Status(404)
        );
    }
}
