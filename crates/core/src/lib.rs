//! Core traits and types for the shopping assistant
//!
//! This crate provides foundational types used across all other crates:
//! - The closed intent enumeration and the per-message analysis types
//! - Entity sets extracted from free text
//! - Conversation replies and the assembled response envelope
//! - Catalog product items and the catalog collaborator trait

pub mod analysis;
pub mod entities;
pub mod intent;
pub mod product;
pub mod response;
pub mod traits;

pub use analysis::AnalysisResult;
pub use entities::{EntitySet, CATEGORY_TAXONOMY};
pub use intent::{Intent, ParseIntentError};
pub use product::Product;
pub use response::{ConversationResponse, DialogueReply};

// Trait re-exports
pub use traits::{CatalogClient, CatalogError, CatalogQuery};
