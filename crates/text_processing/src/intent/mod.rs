//! Intent Classification
//!
//! Scores normalized text against the ordered intent table. Every trigger
//! pattern found as a substring adds [`PATTERN_WEIGHT`]; the first intent in
//! table order reaching the maximum score wins. A maximum of zero means
//! `UNKNOWN`.
//!
//! Patterns may match inside larger words ("hi" in "chips"). That is
//! accepted behaviour.

use std::sync::Arc;

use shop_agent_config::TriggerSet;
use shop_agent_core::Intent;

/// Score added per matching pattern
pub const PATTERN_WEIGHT: u32 = 2;

/// Substring-scoring intent classifier
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    triggers: Arc<TriggerSet>,
}

impl IntentClassifier {
    pub fn new(triggers: Arc<TriggerSet>) -> Self {
        Self { triggers }
    }

    /// Classify normalized text. Always returns a value.
    pub fn classify(&self, normalized: &str) -> Intent {
        let mut best = Intent::Unknown;
        let mut best_score = 0;

        for (intent, score) in self.scores(normalized) {
            // strict comparison keeps the earliest intent on ties
            if score > best_score {
                best = intent;
                best_score = score;
            }
        }

        best
    }

    /// Score of every intent in table order
    pub fn scores(&self, normalized: &str) -> Vec<(Intent, u32)> {
        self.triggers
            .intents()
            .iter()
            .map(|entry| {
                let hits = entry
                    .patterns
                    .iter()
                    .filter(|pattern| normalized.contains(pattern.as_str()))
                    .count() as u32;
                (entry.intent, hits * PATTERN_WEIGHT)
            })
            .collect()
    }
}
