//! Message analysis pipeline
//!
//! Normalizer → (IntentClassifier, EntityExtractor) → ConfidenceScorer

use std::sync::Arc;

use shop_agent_config::TriggerSet;
use shop_agent_core::AnalysisResult;

use crate::{normalize, ConfidenceScorer, EntityExtractor, IntentClassifier};

/// Runs the full NLU pass over one message
///
/// Cheap to clone; every stage shares the same `Arc<TriggerSet>`.
#[derive(Debug, Clone)]
pub struct MessageAnalyzer {
    classifier: IntentClassifier,
    extractor: EntityExtractor,
    scorer: ConfidenceScorer,
}

impl MessageAnalyzer {
    pub fn new(triggers: Arc<TriggerSet>) -> Self {
        Self {
            classifier: IntentClassifier::new(triggers.clone()),
            extractor: EntityExtractor::new(triggers.clone()),
            scorer: ConfidenceScorer::new(triggers),
        }
    }

    /// Analyse a raw message. Never fails.
    pub fn analyze(&self, message: &str) -> AnalysisResult {
        let normalized = normalize(message);

        let intent = self.classifier.classify(&normalized);
        let entities = self.extractor.extract(&normalized);
        let confidence = self.scorer.score(&normalized, intent);

        tracing::debug!(
            intent = %intent,
            confidence,
            category = ?entities.category,
            max_price = ?entities.max_price,
            min_price = ?entities.min_price,
            "Analysed message"
        );

        AnalysisResult {
            intent,
            entities,
            confidence,
            original_message: message.to_string(),
        }
    }
}
