// Config loading tests - file handling, defaults and validation errors.

use recipe_collector_core::config::{AppConfig, ConfigError};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const FULL_CONFIG: &str = r#"
default_provider = "local"
model = "llama3.2"
system_prompt = "You help people cook."

[backend]
base_url = "http://recipes.internal:8080/"

[agent]
max_steps = 4

[server]
name = "kitchen"

[[providers]]
id = "local"
type = "ollama"
endpoint = "http://127.0.0.1:11434"
models = ["llama3.2", { name = "qwen2.5", display_name = "Qwen" }]

[[providers]]
id = "openai"
type = "openai"
endpoint = "https://api.openai.com"
api_key = "OPENAI_API_KEY"
models = ["gpt-4o"]
"#;

#[test]
fn returns_error_when_explicit_file_is_missing() {
    let result = AppConfig::load(Some(Path::new("/nonexistent/path/recipes.toml")));
    assert!(matches!(result, Err(ConfigError::NotFound { .. })));
}

#[test]
fn loads_full_configuration_from_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("recipes.toml");
    fs::write(&path, FULL_CONFIG).expect("write config");

    let config = AppConfig::load(Some(&path)).expect("config");

    assert_eq!(config.default_provider, "local");
    assert_eq!(config.model, "llama3.2");
    assert_eq!(config.system_prompt.as_deref(), Some("You help people cook."));
    assert_eq!(config.agent.max_steps, 4);
    assert_eq!(config.server.name, "kitchen");
    assert_eq!(config.server.version, "1.0.0");
    assert_eq!(config.providers.len(), 2);

    let local = config.provider("local").expect("local provider");
    assert!(local.is_ollama());
    assert_eq!(local.models[1].display_name.as_deref(), Some("Qwen"));
}

#[test]
fn backend_url_is_normalised() {
    let config = AppConfig::from_toml(FULL_CONFIG).expect("config");
    assert_eq!(config.backend.base_url, "http://recipes.internal:8080");
}

#[test]
fn invalid_toml_reports_parse_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("recipes.toml");
    fs::write(&path, "model = [unclosed").expect("write config");

    let result = AppConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn rejects_invalid_values() {
    assert!(matches!(
        AppConfig::from_toml("[backend]\nbase_url = \"ftp://recipes\""),
        Err(ConfigError::InvalidBackendUrl { .. })
    ));
    assert!(matches!(
        AppConfig::from_toml("[agent]\nmax_steps = 0"),
        Err(ConfigError::InvalidMaxSteps)
    ));
    assert!(matches!(
        AppConfig::from_toml("default_provider = \"missing\""),
        Err(ConfigError::ProviderNotFound { .. })
    ));
    assert!(matches!(
        AppConfig::from_toml("[[providers]]\nid = \"x\"\ntype = \"openai\"\nmodels = []"),
        Err(ConfigError::MissingEndpoint { .. })
    ));
}

#[test]
fn backend_url_override_is_validated() {
    let mut config = AppConfig::default();
    config
        .set_backend_url("https://recipes.example.com/")
        .expect("valid url");
    assert_eq!(config.backend.base_url, "https://recipes.example.com");

    assert!(config.set_backend_url("not a url").is_err());
    assert_eq!(config.backend.base_url, "https://recipes.example.com");
}
