//! Conversational agent for the shopping assistant
//!
//! - `DialoguePolicy`: intent → reply template, with catalog lookups
//! - `TemplateSelector`: swappable choice among equivalent templates
//! - `ChatbotAgent`: analysis + policy, assembled into one response

pub mod agent;
pub mod policy;
pub mod selector;
pub mod templates;
pub mod testing;

pub use agent::ChatbotAgent;
pub use policy::DialoguePolicy;
pub use selector::{FixedSelector, RandomSelector, TemplateSelector};

use shop_agent_config::ConfigError;
use shop_agent_core::CatalogError;
use thiserror::Error;

/// Agent errors
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}
