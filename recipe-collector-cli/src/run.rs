use crate::args::{AgentArgs, ServerArgs};
use crate::error::CliError;
use recipe_collector_core::agent::{Agent, AgentOptions, AgentOutcome};
use recipe_collector_core::backend::HttpRecipeBackend;
use recipe_collector_core::config::AppConfig;
use recipe_collector_core::model::DynamicModelProvider;
use recipe_collector_core::rpc::McpServer;
use recipe_collector_core::tooling::{ToolExecutor, ToolRegistry};
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{debug, info};

fn executor(config: &AppConfig, registry: ToolRegistry) -> ToolExecutor {
    let backend = HttpRecipeBackend::new(config.backend.base_url.clone());
    ToolExecutor::new(Arc::new(registry), Arc::new(backend))
}

/// Load configuration, run one agent conversation and return its outcome.
pub async fn run_agent(args: &AgentArgs) -> Result<AgentOutcome, CliError> {
    let config = AppConfig::load(args.config.as_deref())?;
    debug!(
        backend = config.backend.base_url.as_str(),
        providers = config.providers.len(),
        "Configuration loaded"
    );

    let provider = Arc::new(DynamicModelProvider::from_configs(&config.providers));
    let agent = Agent::new(
        provider,
        executor(&config, ToolRegistry::recipe_tools()?),
        config.default_provider.clone(),
        config.model.clone(),
    );

    let options = AgentOptions {
        model: args.model.clone(),
        provider: args.provider.clone(),
        system_prompt: config.system_prompt.clone(),
        max_steps: args
            .max_steps
            .map(|steps| steps as usize)
            .unwrap_or(config.agent.max_steps),
    };

    Ok(agent.run(args.prompt.clone(), options).await?)
}

/// Serve the read-only recipe tools on stdin/stdout until stdin closes.
pub async fn run_server(args: &ServerArgs) -> Result<(), CliError> {
    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(url) = args.backend_url.as_deref() {
        config.set_backend_url(url)?;
    }

    let server = McpServer::new(
        config.server.clone(),
        executor(&config, ToolRegistry::read_only_recipe_tools()?),
    );
    info!(
        backend = config.backend.base_url.as_str(),
        "Recipe MCP server running on stdio"
    );

    server
        .serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;
    info!("Stdin closed, shutting down");
    Ok(())
}
