//! Entity Extraction
//!
//! Extracts from normalized text:
//! - A product category (first category, first keyword wins)
//! - An optional price bound (upper or lower, never both)
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use shop_agent_config::TriggerSet;
//! use shop_agent_text_processing::EntityExtractor;
//!
//! let extractor = EntityExtractor::new(Arc::new(TriggerSet::default()));
//! let entities = extractor.extract("une lampe à moins de 300 dh");
//!
//! assert_eq!(entities.category.as_deref(), Some("Maison"));
//! assert_eq!(entities.max_price, Some(300));
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

use shop_agent_config::TriggerSet;
use shop_agent_core::EntitySet;

/// First ASCII digit run, optionally followed by a currency token
static PRICE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([0-9]+)\s*(?:mad|dh|dirhams?)?").expect("price pattern is valid")
});

/// Words turning a number into an upper bound
const MAX_QUALIFIERS: [&str; 3] = ["moins", "max", "budget"];
/// Words turning a number into a lower bound
const MIN_QUALIFIERS: [&str; 2] = ["plus", "min"];

/// Which side of a price range the message constrains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBound {
    Max(u64),
    Min(u64),
}

/// Category and price extractor
#[derive(Debug, Clone)]
pub struct EntityExtractor {
    triggers: Arc<TriggerSet>,
}

impl EntityExtractor {
    pub fn new(triggers: Arc<TriggerSet>) -> Self {
        Self { triggers }
    }

    /// Extract all entities from normalized text
    pub fn extract(&self, normalized: &str) -> EntitySet {
        let mut entities = EntitySet::new();

        if let Some((category, keyword)) = self.detect_category(normalized) {
            entities = entities.with_category(category, keyword);
        }

        match extract_price(normalized) {
            Some(PriceBound::Max(price)) => entities = entities.with_max_price(price),
            Some(PriceBound::Min(price)) => entities = entities.with_min_price(price),
            None => {}
        }

        entities
    }

    /// First category whose keyword occurs in the text, with that keyword
    pub fn detect_category(&self, normalized: &str) -> Option<(String, String)> {
        self.triggers.categories().iter().find_map(|entry| {
            entry
                .keywords
                .iter()
                .find(|keyword| normalized.contains(keyword.as_str()))
                .map(|keyword| (entry.name.clone(), keyword.clone()))
        })
    }
}

/// Price bound from the first number in the text.
///
/// A number without a qualifier word yields nothing.
pub fn extract_price(normalized: &str) -> Option<PriceBound> {
    let captures = PRICE_PATTERN.captures(normalized)?;
    let digits = captures.get(1)?.as_str();

    let price = match digits.parse::<u64>() {
        Ok(price) => price,
        Err(e) => {
            tracing::debug!(digits, error = %e, "Ignoring unparseable price");
            return None;
        },
    };

    if MAX_QUALIFIERS.iter().any(|q| normalized.contains(q)) {
        Some(PriceBound::Max(price))
    } else if MIN_QUALIFIERS.iter().any(|q| normalized.contains(q)) {
        Some(PriceBound::Min(price))
    } else {
        None
    }
}
