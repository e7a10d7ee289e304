//! Confidence scoring
//!
//! A bounded heuristic over pattern-match density, not a calibrated
//! probability.

use std::sync::Arc;

use shop_agent_config::TriggerSet;
use shop_agent_core::Intent;

/// Confidence reported for `UNKNOWN`
pub const UNKNOWN_CONFIDENCE: f64 = 0.3;
/// Starting point for a classified intent
pub const BASE_CONFIDENCE: f64 = 0.5;
/// Added per matching pattern
pub const CONFIDENCE_STEP: f64 = 0.15;
/// Upper cap
pub const MAX_CONFIDENCE: f64 = 0.95;

#[derive(Debug, Clone)]
pub struct ConfidenceScorer {
    triggers: Arc<TriggerSet>,
}

impl ConfidenceScorer {
    pub fn new(triggers: Arc<TriggerSet>) -> Self {
        Self { triggers }
    }

    /// `min(0.5 + 0.15 * matches, 0.95)`, or `0.3` for `UNKNOWN`
    pub fn score(&self, normalized: &str, intent: Intent) -> f64 {
        if intent.is_unknown() {
            return UNKNOWN_CONFIDENCE;
        }

        let matches = self
            .triggers
            .patterns_for(intent)
            .iter()
            .filter(|pattern| normalized.contains(pattern.as_str()))
            .count();

        (BASE_CONFIDENCE + CONFIDENCE_STEP * matches as f64).min(MAX_CONFIDENCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> ConfidenceScorer {
        ConfidenceScorer::new(Arc::new(TriggerSet::default()))
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_unknown_is_fixed() {
        assert_eq!(scorer().score("bonjour", Intent::Unknown), 0.3);
    }

    #[test]
    fn test_single_match() {
        assert!(approx(scorer().score("bonjour", Intent::Greeting), 0.65));
    }

    #[test]
    fn test_grows_with_matches() {
        let scorer = scorer();
        let one = scorer.score("prix", Intent::PriceInquiry);
        let two = scorer.score("prix tarif", Intent::PriceInquiry);
        let three = scorer.score("prix tarif solde", Intent::PriceInquiry);

        assert!(approx(two, 0.8));
        assert!(approx(three, 0.95));
        assert!(one < two && two < three);
    }

    #[test]
    fn test_capped() {
        let text = "prix coût combien tarif promotion solde réduction";
        assert_eq!(scorer().score(text, Intent::PriceInquiry), 0.95);
    }
}
