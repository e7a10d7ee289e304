//! Centralized defaults

/// HTTP server defaults
pub mod server {
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 8085;
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
    pub const SERVICE_NAME: &str = "ChatBot NLP Service";
}

/// Catalog collaborator defaults
pub mod catalog {
    pub const DEFAULT_BASE_URL: &str = "http://localhost:8082";
    /// The source had no timeout at all; keep the call short so a slow
    /// catalog degrades to an empty product list quickly.
    pub const DEFAULT_TIMEOUT_MS: u64 = 3_000;
}

/// Environment variable names
pub mod env {
    /// Selects `config/<env>.*` on top of `config/default.*`
    pub const ENVIRONMENT: &str = "SHOP_AGENT_ENV";
    /// Prefix for `SHOP_AGENT__SECTION__KEY` overrides
    pub const PREFIX: &str = "SHOP_AGENT";
}
