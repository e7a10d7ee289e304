//! Text Processing for the Shopping Assistant
//!
//! This crate turns a raw chat message into an [`AnalysisResult`]:
//! - **Normalization**: lowercase and trim
//! - **Intent Classification**: substring trigger scoring over an ordered table
//! - **Entity Extraction**: category and price bound detection
//! - **Confidence Scoring**: bounded match-density heuristic
//!
//! Nothing in this crate fails: unmatched text falls back to `UNKNOWN`, an
//! empty entity set and the minimum confidence.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use shop_agent_config::TriggerSet;
//! use shop_agent_core::Intent;
//! use shop_agent_text_processing::MessageAnalyzer;
//!
//! let analyzer = MessageAnalyzer::new(Arc::new(TriggerSet::default()));
//! let result = analyzer.analyze("Bonjour");
//!
//! assert_eq!(result.intent, Intent::Greeting);
//! ```
//!
//! [`AnalysisResult`]: shop_agent_core::AnalysisResult

pub mod confidence;
pub mod entities;
pub mod intent;
pub mod normalize;

mod pipeline;

pub use confidence::ConfidenceScorer;
pub use entities::EntityExtractor;
pub use intent::IntentClassifier;
pub use normalize::normalize;
pub use pipeline::MessageAnalyzer;
