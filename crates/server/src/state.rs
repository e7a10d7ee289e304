//! Application State
//!
//! Shared across handlers. Everything here is immutable after startup.

use std::sync::Arc;

use shop_agent_agent::{AgentError, ChatbotAgent};
use shop_agent_config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Settings>,
    pub agent: Arc<ChatbotAgent>,
}

impl AppState {
    pub fn new(config: Settings, agent: ChatbotAgent) -> Self {
        Self {
            config: Arc::new(config),
            agent: Arc::new(agent),
        }
    }

    /// Build the production agent from `config`
    pub fn from_settings(config: Settings) -> Result<Self, AgentError> {
        let agent = ChatbotAgent::from_settings(&config)?;
        Ok(Self::new(config, agent))
    }
}
