//! Application constants
//!
//! Single source of truth for paths, endpoints and other defaults.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/recipes.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Environment variable that overrides the recipe backend base URL
pub const BACKEND_URL_ENV: &str = "RECIPE_BACKEND_URL";

/// Base URL of the recipe service when nothing else is configured
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8080";

pub const DEFAULT_PROVIDER_ID: &str = "openai";
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com";
pub const DEFAULT_OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Oracle turns allowed per agent run unless configured otherwise
pub const DEFAULT_MAX_STEPS: usize = 8;

/// Identity advertised by the stdio MCP server
pub const DEFAULT_SERVER_NAME: &str = "recipe-collector-server";
pub const DEFAULT_SERVER_VERSION: &str = "1.0.0";

/// Prompt used by the agent CLI when none is given
pub const DEFAULT_PROMPT: &str = "Search for recipes with chicken";
