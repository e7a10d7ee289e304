//! Chatbot agent
//!
//! Runs analysis, asks the dialogue policy for a reply and assembles the
//! response envelope. Holds no per-conversation state.

use std::sync::Arc;

use shop_agent_catalog::HttpCatalogClient;
use shop_agent_config::{Settings, TriggerSet};
use shop_agent_core::{AnalysisResult, CatalogClient, ConversationResponse};
use shop_agent_text_processing::MessageAnalyzer;

use crate::policy::DialoguePolicy;
use crate::selector::{RandomSelector, TemplateSelector};
use crate::AgentError;

#[derive(Debug)]
pub struct ChatbotAgent {
    analyzer: MessageAnalyzer,
    policy: DialoguePolicy,
}

impl ChatbotAgent {
    pub fn new(
        triggers: Arc<TriggerSet>,
        catalog: Arc<dyn CatalogClient>,
        selector: Arc<dyn TemplateSelector>,
    ) -> Self {
        Self {
            analyzer: MessageAnalyzer::new(triggers),
            policy: DialoguePolicy::new(catalog, selector),
        }
    }

    /// Wire the production agent: configured trigger table, HTTP catalog,
    /// random template choice.
    pub fn from_settings(settings: &Settings) -> Result<Self, AgentError> {
        let triggers = Arc::new(settings.nlu.trigger_set()?);
        let catalog = HttpCatalogClient::from_config(&settings.catalog)?;

        tracing::info!(
            intents = triggers.intents().len(),
            categories = triggers.categories().len(),
            catalog = %catalog.base_url(),
            "Chatbot agent ready"
        );

        Ok(Self::new(triggers, Arc::new(catalog), Arc::new(RandomSelector)))
    }

    pub fn analyze(&self, message: &str) -> AnalysisResult {
        self.analyzer.analyze(message)
    }

    /// Answer one message
    pub async fn process(&self, message: &str, user_id: Option<i64>) -> ConversationResponse {
        let analysis = self.analyzer.analyze(message);
        let reply = self
            .policy
            .respond(analysis.intent, &analysis.entities, user_id)
            .await;

        ConversationResponse::assemble(reply, analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::FixedSelector;
    use crate::testing::StaticCatalog;
    use shop_agent_core::Intent;

    #[tokio::test]
    async fn test_response_carries_analysis() {
        let agent = ChatbotAgent::new(
            Arc::new(TriggerSet::default()),
            Arc::new(StaticCatalog::new(vec![])),
            Arc::new(FixedSelector(0)),
        );

        let response = agent.process("Merci !", Some(3)).await;
        assert_eq!(response.analysis.intent, Intent::Thanks);
        assert_eq!(response.analysis.original_message, "Merci !");
        assert_eq!(response.text, crate::templates::THANKS[0]);
    }

    #[test]
    fn test_from_default_settings() {
        let agent = ChatbotAgent::from_settings(&Settings::default()).unwrap();
        assert_eq!(agent.analyze("salut").intent, Intent::Greeting);
    }

    #[test]
    fn test_from_settings_reports_bad_trigger_file() {
        let mut settings = Settings::default();
        settings.nlu.triggers_path = Some("/nonexistent/triggers.yaml".into());
        let err = ChatbotAgent::from_settings(&settings).unwrap_err();
        assert!(matches!(err, AgentError::Configuration(_)));
    }
}
