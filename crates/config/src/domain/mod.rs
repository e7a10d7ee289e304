//! Domain configuration
//!
//! Holds the NLU trigger tables. Loaded once at startup and shared
//! read-only by every request handler.

pub mod triggers;

pub use triggers::{CategoryTriggers, IntentTriggers, TriggerSet};
