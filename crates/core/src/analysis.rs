//! NLU analysis result

use serde::{Deserialize, Serialize};

use crate::{EntitySet, Intent};

/// Outcome of analysing one message
///
/// A pure function of the input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub intent: Intent,
    pub entities: EntitySet,
    /// Heuristic match density in `[0.3, 0.95]`
    pub confidence: f64,
    /// Message exactly as received, before normalization
    pub original_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let analysis = AnalysisResult {
            intent: Intent::Greeting,
            entities: EntitySet::new(),
            confidence: 0.65,
            original_message: "Bonjour".to_string(),
        };
        let json = serde_json::to_value(&analysis).unwrap();

        assert_eq!(json["intent"], "GREETING");
        assert_eq!(json["originalMessage"], "Bonjour");
        assert_eq!(json["entities"]["keywords"], serde_json::json!([]));
    }
}
