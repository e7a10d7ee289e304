//! Conversation replies and the response envelope

use serde::{Deserialize, Serialize};

use crate::{AnalysisResult, Product};

/// What the dialogue policy produces for one message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogueReply {
    /// Reply text, may embed simple HTML markup
    pub text: String,
    /// Quick-reply suggestions
    #[serde(default)]
    pub suggestions: Vec<String>,
    /// Products attached by branches that query the catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,
}

impl DialogueReply {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_suggestions<I, S>(mut self, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggestions = suggestions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = Some(products);
        self
    }
}

/// Reply plus the analysis that produced it, returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationResponse {
    pub text: String,
    pub suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,
    pub analysis: AnalysisResult,
}

impl ConversationResponse {
    /// Attach the upstream analysis to a policy reply
    pub fn assemble(reply: DialogueReply, analysis: AnalysisResult) -> Self {
        Self {
            text: reply.text,
            suggestions: reply.suggestions,
            products: reply.products,
            analysis,
        }
    }
}
