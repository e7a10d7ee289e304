//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{catalog, env, server};
use crate::{ConfigError, TriggerSet};

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    #[default]
    Development,
    Staging,
    Production,
}

impl RuntimeEnvironment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Catalog collaborator
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Trigger table source
    #[serde(default)]
    pub nlu: NluConfig,

    /// Logging
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Restrict CORS to `cors_origins`. When false every origin is allowed.
    #[serde(default)]
    pub cors_enabled: bool,

    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Whole-request timeout
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Name reported by the health endpoint
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

fn default_host() -> String {
    server::DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    server::DEFAULT_PORT
}
fn default_request_timeout() -> u64 {
    server::DEFAULT_REQUEST_TIMEOUT_SECS
}
fn default_service_name() -> String {
    server::SERVICE_NAME.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: false,
            cors_origins: Vec::new(),
            request_timeout_secs: default_request_timeout(),
            service_name: default_service_name(),
        }
    }
}

/// Catalog collaborator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the product service
    #[serde(default = "default_catalog_url")]
    pub base_url: String,

    /// Per-call timeout in milliseconds
    #[serde(default = "default_catalog_timeout")]
    pub timeout_ms: u64,
}

fn default_catalog_url() -> String {
    catalog::DEFAULT_BASE_URL.to_string()
}
fn default_catalog_timeout() -> u64 {
    catalog::DEFAULT_TIMEOUT_MS
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_catalog_url(),
            timeout_ms: default_catalog_timeout(),
        }
    }
}

/// NLU configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NluConfig {
    /// YAML file replacing the built-in trigger table
    #[serde(default)]
    pub triggers_path: Option<PathBuf>,
}

impl NluConfig {
    /// Resolve the trigger table: file when configured, built-in otherwise
    pub fn trigger_set(&self) -> Result<TriggerSet, ConfigError> {
        match &self.triggers_path {
            Some(path) => TriggerSet::load(path),
            None => Ok(TriggerSet::default()),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl Settings {
    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_catalog()?;

        // A catalog call must finish before the request deadline
        let request_budget_ms = self.server.request_timeout_secs.saturating_mul(1000);
        if self.catalog.timeout_ms >= request_budget_ms {
            return Err(ConfigError::invalid(
                "catalog.timeout_ms",
                format!(
                    "Must be below server.request_timeout_secs ({} ms), got {} ms",
                    request_budget_ms, self.catalog.timeout_ms
                ),
            ));
        }

        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        let server = &self.server;

        if server.port == 0 {
            return Err(ConfigError::invalid("server.port", "Port cannot be 0"));
        }

        if server.request_timeout_secs == 0 {
            return Err(ConfigError::invalid(
                "server.request_timeout_secs",
                "Timeout must be at least 1 second",
            ));
        }

        if self.environment.is_production() && !server.cors_enabled {
            tracing::warn!("Running in production with CORS open to every origin");
        }

        if server.cors_enabled && server.cors_origins.is_empty() {
            tracing::warn!(
                "CORS restriction is enabled but no origins are configured. \
                 Browser requests will be rejected."
            );
        }

        Ok(())
    }

    fn validate_catalog(&self) -> Result<(), ConfigError> {
        let catalog = &self.catalog;

        if catalog.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField("catalog.base_url".to_string()));
        }

        if !(catalog.base_url.starts_with("http://") || catalog.base_url.starts_with("https://")) {
            return Err(ConfigError::invalid(
                "catalog.base_url",
                format!("Must be an http(s) URL, got '{}'", catalog.base_url),
            ));
        }

        if catalog.timeout_ms == 0 {
            return Err(ConfigError::invalid(
                "catalog.timeout_ms",
                "Timeout must be at least 1ms",
            ));
        }

        Ok(())
    }
}

/// Load settings from files and environment
///
/// Priority: env vars > config/{env} > config/default > defaults
pub fn load_settings(env_name: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name("config/default").required(false));

    if let Some(env_name) = env_name {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix(env::PREFIX)
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8085);
        assert_eq!(settings.server.service_name, "ChatBot NLP Service");
        assert_eq!(settings.catalog.base_url, "http://localhost:8082");
        assert!(!settings.server.cors_enabled);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_server_validation() {
        let mut settings = Settings::default();
        settings.server.port = 0;
        assert!(settings.validate().is_err());

        settings.server.port = 8085;
        settings.server.request_timeout_secs = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_catalog_validation() {
        let mut settings = Settings::default();

        settings.catalog.base_url = "  ".to_string();
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::MissingField(_))
        ));

        settings.catalog.base_url = "localhost:8082".to_string();
        assert!(settings.validate().is_err());

        settings.catalog.base_url = "https://catalog.internal".to_string();
        settings.catalog.timeout_ms = 0;
        assert!(settings.validate().is_err());

        settings.catalog.timeout_ms = 500;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_catalog_timeout_must_fit_request_timeout() {
        let mut settings = Settings::default();
        settings.server.request_timeout_secs = 2;

        settings.catalog.timeout_ms = 2000;
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "catalog.timeout_ms"
        ));

        settings.catalog.timeout_ms = 1999;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = r#"
server:
  port: 9000
catalog:
  timeout_ms: 1500
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.catalog.timeout_ms, 1500);
        assert_eq!(settings.catalog.base_url, "http://localhost:8082");
        assert_eq!(settings.observability.log_level, "info");
    }

    #[test]
    fn test_nlu_defaults_to_builtin_triggers() {
        let nlu = NluConfig::default();
        let triggers = nlu.trigger_set().unwrap();
        assert_eq!(triggers.intents().len(), 11);
        assert_eq!(triggers.categories().len(), 6);
    }

    #[test]
    fn test_shipped_config_files_are_valid() {
        let default: Settings =
            serde_yaml::from_str(include_str!("../../../config/default.yaml")).unwrap();
        assert!(default.validate().is_ok());
        assert_eq!(default.catalog.timeout_ms, 3000);
        assert!(default.nlu.triggers_path.is_none());

        let production: Settings =
            serde_yaml::from_str(include_str!("../../../config/production.yaml")).unwrap();
        assert!(production.environment.is_production());
        assert!(production.server.cors_enabled);
        assert!(production.observability.log_json);
        assert!(production.validate().is_ok());
    }
}
