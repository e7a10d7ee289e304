//! HTTP catalog backend
//!
//! Each query maps to one `GET` under `/api/products`. Responses carry the
//! product list in a `data` envelope field.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::Value;

use shop_agent_config::CatalogConfig;
use shop_agent_core::{CatalogClient, CatalogError, CatalogQuery, Product};

/// Response envelope returned by every catalog endpoint
#[derive(Debug, Deserialize)]
struct CatalogEnvelope {
    #[serde(default)]
    data: Option<Value>,
}

/// Catalog client backed by a single shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    client: Client,
    base_url: String,
}

impl HttpCatalogClient {
    /// Build a client with a per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                CatalogError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(CatalogError::Configuration(
                "catalog base URL is empty".to_string(),
            ));
        }

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        Self::new(
            config.base_url.clone(),
            Duration::from_millis(config.timeout_ms),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/products{}", self.base_url, path)
    }

    fn request(&self, query: &CatalogQuery) -> RequestBuilder {
        match query {
            CatalogQuery::Search { category } => self
                .client
                .get(self.api_url("/search"))
                .query(&[("q", category.as_str())]),
            CatalogQuery::All => self.client.get(self.api_url("")),
            CatalogQuery::TopRated => self.client.get(self.api_url("/top-rated")),
            CatalogQuery::Promotions => self.client.get(self.api_url("/promotions")),
            CatalogQuery::PriceRange { min, max } => self
                .client
                .get(self.api_url("/price-range"))
                .query(&[("min", min), ("max", max)]),
        }
    }
}

/// Pull the product list out of a decoded envelope
fn products_from(envelope: CatalogEnvelope) -> Result<Vec<Product>, CatalogError> {
    match envelope.data {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(data @ Value::Array(_)) => serde_json::from_value(data)
            .map_err(|e| CatalogError::InvalidResponse(format!("bad product list: {}", e))),
        Some(other) => Err(CatalogError::InvalidResponse(format!(
            "expected `data` to be an array, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn map_reqwest_error(err: reqwest::Error) -> CatalogError {
    if err.is_timeout() {
        CatalogError::Timeout
    } else if err.is_decode() {
        CatalogError::InvalidResponse(err.to_string())
    } else {
        CatalogError::Network(err.to_string())
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn query(&self, query: &CatalogQuery) -> Result<Vec<Product>, CatalogError> {
        tracing::debug!(query = %query, "Catalog lookup");

        let response = self
            .request(query)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let envelope: CatalogEnvelope = response.json().await.map_err(map_reqwest_error)?;
        let products = products_from(envelope)?;

        tracing::debug!(query = %query, count = products.len(), "Catalog lookup done");
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(value: Value) -> CatalogEnvelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_missing_or_null_data_is_empty() {
        assert!(products_from(envelope(json!({}))).unwrap().is_empty());
        assert!(products_from(envelope(json!({ "data": null }))).unwrap().is_empty());
    }

    #[test]
    fn test_array_data_decodes_products() {
        let products = products_from(envelope(json!({
            "success": true,
            "data": [{ "id": 1, "name": "Écouteurs", "price": 299.0 }]
        })))
        .unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name.as_deref(), Some("Écouteurs"));
    }

    #[test]
    fn test_other_shapes_are_invalid() {
        let err = products_from(envelope(json!({ "data": { "content": [] } }))).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidResponse(_)));

        let err = products_from(envelope(json!({ "data": "nope" }))).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidResponse(_)));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client =
            HttpCatalogClient::new("http://localhost:8082/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.api_url("/top-rated"), "http://localhost:8082/api/products/top-rated");
    }

    #[test]
    fn test_empty_base_url_is_rejected() {
        let err = HttpCatalogClient::new("", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, CatalogError::Configuration(_)));
    }

    #[test]
    fn test_from_config() {
        let client = HttpCatalogClient::from_config(&CatalogConfig::default()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8082");
    }
}
