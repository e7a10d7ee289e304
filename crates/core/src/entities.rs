//! Structured entities extracted from a single message

use serde::{Deserialize, Serialize};

/// The fixed product category taxonomy, in canonical order
pub const CATEGORY_TAXONOMY: [&str; 6] = [
    "Électronique",
    "Accessoires",
    "Maison",
    "Mode",
    "Sports",
    "Beauté",
];

/// Per-message entity set
///
/// At most one of `max_price` / `min_price` is ever set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySet {
    /// Detected category, one of [`CATEGORY_TAXONOMY`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Upper price bound ("moins de 500 mad")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u64>,
    /// Lower price bound ("plus de 200 dh")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<u64>,
    /// Literal trigger substrings that matched, for traceability
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl EntitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category together with the keyword that triggered it
    pub fn with_category(
        mut self,
        category: impl Into<String>,
        keyword: impl Into<String>,
    ) -> Self {
        self.category = Some(category.into());
        self.keywords.push(keyword.into());
        self
    }

    /// Set an upper bound, clearing any lower bound
    pub fn with_max_price(mut self, price: u64) -> Self {
        self.max_price = Some(price);
        self.min_price = None;
        self
    }

    /// Set a lower bound, clearing any upper bound
    pub fn with_min_price(mut self, price: u64) -> Self {
        self.min_price = Some(price);
        self.max_price = None;
        self
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.max_price.is_none() && self.min_price.is_none()
    }
}
