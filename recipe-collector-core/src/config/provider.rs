//! # Provider Configuration
//!
//! Configuration types for the model providers that drive the agent loop.
//!
//! | Type | Description | API Key Required |
//! |------|-------------|-----------------|
//! | `openai` | OpenAI-compatible chat completions | Yes |
//! | `ollama` | Local Ollama server | No |

use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

/// Information about an available model from a provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelInfo {
    /// Model identifier used in API calls (e.g., "gpt-4o")
    pub name: String,
    /// Human-readable display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Configuration for a model provider.
///
/// # Example
///
/// ```toml
/// [[providers]]
/// id = "openai"
/// type = "openai"
/// endpoint = "https://api.openai.com"
/// api_key = "OPENAI_API_KEY"
/// models = ["gpt-4o"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelProviderConfig {
    /// Unique identifier for this provider (e.g., "openai", "ollama-local")
    pub id: String,
    /// The provider type determines API format: "openai" or "ollama"
    #[serde(rename = "type")]
    pub provider_type: String,
    /// API endpoint URL
    pub endpoint: String,
    /// Name of the environment variable that holds the API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Custom API path override (e.g., "/v1/chat/completions")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_path: Option<String>,
    /// Models served by this provider; empty means any model is accepted
    pub models: Vec<ModelInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct RawProviderConfig {
    pub(super) id: String,
    #[serde(rename = "type", default)]
    pub(super) provider_type: String,
    pub(super) endpoint: Option<String>,
    pub(super) api_key: Option<String>,
    #[serde(default)]
    pub(super) api_path: Option<String>,
    #[serde(default)]
    pub(super) models: Vec<RawModelInfo>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(super) enum RawModelInfo {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        display_name: Option<String>,
    },
}

impl From<RawModelInfo> for ModelInfo {
    fn from(value: RawModelInfo) -> Self {
        match value {
            RawModelInfo::Name(name) => Self {
                name,
                display_name: None,
            },
            RawModelInfo::Detailed { name, display_name } => Self { name, display_name },
        }
    }
}

impl From<RawProviderConfig> for ModelProviderConfig {
    fn from(raw: RawProviderConfig) -> Self {
        Self {
            id: raw.id,
            provider_type: raw.provider_type,
            endpoint: raw.endpoint.unwrap_or_default(),
            api_key: raw.api_key,
            api_path: raw.api_path,
            models: raw.models.into_iter().map(ModelInfo::from).collect(),
        }
    }
}

impl ModelProviderConfig {
    /// Built-in OpenAI provider used when no configuration file exists.
    pub fn default_openai() -> Self {
        use crate::constants::{
            DEFAULT_MODEL, DEFAULT_OPENAI_API_KEY_ENV, DEFAULT_OPENAI_ENDPOINT,
            DEFAULT_PROVIDER_ID,
        };
        Self {
            id: DEFAULT_PROVIDER_ID.to_string(),
            provider_type: "openai".to_string(),
            endpoint: DEFAULT_OPENAI_ENDPOINT.to_string(),
            api_key: Some(DEFAULT_OPENAI_API_KEY_ENV.to_string()),
            api_path: None,
            models: vec![ModelInfo {
                name: DEFAULT_MODEL.to_string(),
                display_name: None,
            }],
        }
    }

    /// Ensure a model exists in this provider's model list
    pub fn ensure_model(&mut self, model: &str) {
        if !self.models.is_empty() && self.models.iter().all(|info| info.name != model) {
            self.models.push(ModelInfo {
                name: model.to_string(),
                display_name: None,
            });
        }
    }

    /// Read the API key from the environment variable named by `api_key`.
    /// A blank name, or an unset variable, yields `None`.
    pub fn resolve_api_key(&self) -> Option<String> {
        let var = self.api_key.as_deref().map(str::trim)?;
        if var.is_empty() {
            return None;
        }
        match env::var(var) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(
                    provider = self.id.as_str(),
                    env_var = var,
                    %err,
                    "API key environment variable is not set"
                );
                None
            }
        }
    }

    /// Check if this is an Ollama provider (case-insensitive).
    ///
    /// ```
    /// use recipe_collector_core::config::ModelProviderConfig;
    ///
    /// let provider = ModelProviderConfig {
    ///     id: "local".to_string(),
    ///     provider_type: "Ollama".to_string(),
    ///     endpoint: "http://localhost:11434".to_string(),
    ///     api_key: None,
    ///     api_path: None,
    ///     models: vec![],
    /// };
    /// assert!(provider.is_ollama());
    /// ```
    pub fn is_ollama(&self) -> bool {
        matches!(
            self.provider_type.to_ascii_lowercase().as_str(),
            "ollama" | "localai"
        )
    }
}
