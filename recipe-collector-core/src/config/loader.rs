use super::app::{AgentSettings, AppConfig, BackendConfig, ServerIdentity};
use super::error::ConfigError;
use super::provider::{ModelProviderConfig, RawProviderConfig};
use crate::constants::{BACKEND_URL_ENV, CONFIG_PATH, ENV_PATH};
use dotenvy::from_filename;
use reqwest::Url;
use serde::Deserialize;
use std::env;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use tracing::{debug, info};

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
pub(super) struct RawConfig {
    pub model: Option<String>,
    pub default_provider: Option<String>,
    pub system_prompt: Option<String>,
    #[serde(default)]
    pub backend: Option<RawBackend>,
    #[serde(default)]
    pub agent: Option<RawAgent>,
    #[serde(default)]
    pub server: Option<RawServer>,
    #[serde(default)]
    pub providers: Vec<RawProviderConfig>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawBackend {
    pub base_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawAgent {
    pub max_steps: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawServer {
    pub name: Option<String>,
    pub version: Option<String>,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Load and validate configuration.
///
/// A missing file at the default path falls back to built-in defaults; a
/// missing file at an explicit path is an error.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    ensure_env_loaded();
    let mut config = match path {
        Some(explicit) => read_config(explicit)?,
        None => {
            let default_path = Path::new(CONFIG_PATH);
            if default_path.exists() {
                read_config(default_path)?
            } else {
                info!(
                    path = CONFIG_PATH,
                    "No configuration file found; using built-in defaults"
                );
                AppConfig::default()
            }
        }
    };
    apply_env_overrides(&mut config, |key| env::var(key).ok())?;
    Ok(config)
}

/// Apply environment overrides using the supplied lookup.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(BACKEND_URL_ENV).filter(|value| !value.trim().is_empty()) {
        debug!(env = BACKEND_URL_ENV, url = %url, "Overriding backend URL from environment");
        config.backend.base_url = validate_backend_url(url.trim())?;
    }
    Ok(())
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    debug!(path = %path.display(), "Reading configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    parse_config(path, &content)
}

pub(super) fn parse_config(path: &Path, content: &str) -> Result<AppConfig, ConfigError> {
    let parsed: RawConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_and_build(parsed)
}

fn validate_and_build(parsed: RawConfig) -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig::default();

    let backend = match parsed.backend.and_then(|raw| raw.base_url) {
        Some(url) => BackendConfig {
            base_url: validate_backend_url(url.trim())?,
        },
        None => defaults.backend,
    };

    let max_steps = parsed
        .agent
        .and_then(|raw| raw.max_steps)
        .unwrap_or(defaults.agent.max_steps);
    if max_steps == 0 {
        return Err(ConfigError::InvalidMaxSteps);
    }

    let server = match parsed.server {
        Some(raw) => ServerIdentity {
            name: raw.name.unwrap_or(defaults.server.name),
            version: raw.version.unwrap_or(defaults.server.version),
        },
        None => defaults.server,
    };

    // A file without [[providers]] keeps the built-in OpenAI provider.
    let mut providers: Vec<ModelProviderConfig> = Vec::new();
    for raw_provider in parsed.providers {
        if raw_provider
            .endpoint
            .as_deref()
            .is_none_or(|endpoint| endpoint.trim().is_empty())
        {
            return Err(ConfigError::MissingEndpoint {
                provider: raw_provider.id.clone(),
            });
        }
        providers.push(ModelProviderConfig::from(raw_provider));
    }
    let providers_declared = !providers.is_empty();
    if !providers_declared {
        providers = defaults.providers;
    }

    let default_provider = match parsed.default_provider {
        Some(id) => id,
        None if providers_declared => providers[0].id.clone(),
        None => defaults.default_provider,
    };
    let model = parsed.model.unwrap_or(defaults.model);

    let Some(provider) = providers.iter_mut().find(|p| p.id == default_provider) else {
        return Err(ConfigError::ProviderNotFound {
            provider: default_provider,
        });
    };
    provider.ensure_model(&model);

    Ok(AppConfig {
        default_provider,
        model,
        system_prompt: parsed.system_prompt.filter(|prompt| !prompt.trim().is_empty()),
        backend,
        agent: AgentSettings { max_steps },
        server,
        providers,
    })
}

pub(super) fn validate_backend_url(raw: &str) -> Result<String, ConfigError> {
    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {
            Ok(raw.trim_end_matches('/').to_string())
        }
        _ => Err(ConfigError::InvalidBackendUrl {
            url: raw.to_string(),
        }),
    }
}
