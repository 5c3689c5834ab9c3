use clap::Parser;
use recipe_collector_core::constants::DEFAULT_PROMPT;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "recipe-agent",
    version,
    about = "Ask a model to work with your recipe collection"
)]
pub struct AgentArgs {
    /// What to ask the agent
    #[arg(default_value = DEFAULT_PROMPT)]
    pub prompt: String,
    /// Configuration file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
    /// Maximum model turns before the run is abandoned
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_steps: Option<u32>,
    /// Model to use instead of the configured default
    #[arg(long)]
    pub model: Option<String>,
    /// Provider id to use instead of the configured default
    #[arg(long)]
    pub provider: Option<String>,
}

#[derive(Parser, Debug)]
#[command(
    name = "recipe-mcp-server",
    version,
    about = "Serve recipe tools to MCP clients over stdio"
)]
pub struct ServerArgs {
    /// Configuration file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
    /// Recipe service base URL, overriding config and environment
    #[arg(long)]
    pub backend_url: Option<String>,
}
