use super::error::ConfigError;
use super::provider::ModelProviderConfig;
use crate::constants::{
    DEFAULT_BACKEND_URL, DEFAULT_MAX_STEPS, DEFAULT_MODEL, DEFAULT_PROVIDER_ID,
    DEFAULT_SERVER_NAME, DEFAULT_SERVER_VERSION,
};
use std::path::Path;

/// Where the recipe service lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentSettings {
    pub max_steps: usize,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

/// Name and version the stdio server reports during `initialize`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerIdentity {
    pub name: String,
    pub version: String,
}

impl Default for ServerIdentity {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVER_NAME.to_string(),
            version: DEFAULT_SERVER_VERSION.to_string(),
        }
    }
}

/// Application configuration loaded from recipes.toml
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub default_provider: String,
    pub model: String,
    pub system_prompt: Option<String>,
    pub backend: BackendConfig,
    pub agent: AgentSettings,
    pub server: ServerIdentity,
    pub providers: Vec<ModelProviderConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_provider: DEFAULT_PROVIDER_ID.to_string(),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: None,
            backend: BackendConfig::default(),
            agent: AgentSettings::default(),
            server: ServerIdentity::default(),
            providers: vec![ModelProviderConfig::default_openai()],
        }
    }
}

impl AppConfig {
    /// Load configuration from a file path (or the default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    /// Parse configuration from TOML text without touching the filesystem
    /// or the process environment.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        super::loader::parse_config(Path::new("<inline>"), content)
    }

    /// Point the configuration at another recipe service.
    pub fn set_backend_url(&mut self, url: &str) -> Result<(), ConfigError> {
        self.backend.base_url = super::loader::validate_backend_url(url.trim())?;
        Ok(())
    }

    pub fn provider(&self, id: &str) -> Option<&ModelProviderConfig> {
        self.providers.iter().find(|provider| provider.id == id)
    }
}
