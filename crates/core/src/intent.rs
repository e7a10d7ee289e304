//! Closed set of conversational intents

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Classified purpose of a user message.
///
/// The declaration order is the canonical priority order: when two intents
/// tie on score, the one declared first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    Greeting,
    ProductSearch,
    CategoryBrowse,
    Recommendation,
    OrderStatus,
    DeliveryTracking,
    PriceInquiry,
    Help,
    Payment,
    Return,
    Thanks,
    /// Fallback when no trigger pattern matched
    Unknown,
}

impl Intent {
    /// Every intent in canonical order, `Unknown` last
    pub const ALL: [Intent; 12] = [
        Intent::Greeting,
        Intent::ProductSearch,
        Intent::CategoryBrowse,
        Intent::Recommendation,
        Intent::OrderStatus,
        Intent::DeliveryTracking,
        Intent::PriceInquiry,
        Intent::Help,
        Intent::Payment,
        Intent::Return,
        Intent::Thanks,
        Intent::Unknown,
    ];

    /// Wire name, e.g. `PRODUCT_SEARCH`
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "GREETING",
            Intent::ProductSearch => "PRODUCT_SEARCH",
            Intent::CategoryBrowse => "CATEGORY_BROWSE",
            Intent::Recommendation => "RECOMMENDATION",
            Intent::OrderStatus => "ORDER_STATUS",
            Intent::DeliveryTracking => "DELIVERY_TRACKING",
            Intent::PriceInquiry => "PRICE_INQUIRY",
            Intent::Help => "HELP",
            Intent::Payment => "PAYMENT",
            Intent::Return => "RETURN",
            Intent::Thanks => "THANKS",
            Intent::Unknown => "UNKNOWN",
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Intent::Unknown)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name that is not one of the wire names, in any case
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown intent '{0}'")]
pub struct ParseIntentError(pub String);

/// Case-insensitive, surrounding whitespace ignored
impl FromStr for Intent {
    type Err = ParseIntentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|i| i.as_str() == wanted)
            .ok_or_else(|| ParseIntentError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        assert_eq!(Intent::ALL.len(), 12);
        assert_eq!(Intent::ALL[0], Intent::Greeting);
        assert_eq!(Intent::ALL[11], Intent::Unknown);
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_string(&Intent::DeliveryTracking).unwrap();
        assert_eq!(json, "\"DELIVERY_TRACKING\"");

        let parsed: Intent = serde_json::from_str("\"PRICE_INQUIRY\"").unwrap();
        assert_eq!(parsed, Intent::PriceInquiry);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("order_status".parse::<Intent>().unwrap(), Intent::OrderStatus);
        assert_eq!(" HELP ".parse::<Intent>().unwrap(), Intent::Help);
        assert_eq!(
            "shopping".parse::<Intent>().unwrap_err().to_string(),
            "unknown intent 'shopping'"
        );
    }
}
