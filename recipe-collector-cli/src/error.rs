use recipe_collector_core::agent::AgentError;
use recipe_collector_core::config::ConfigError;
use recipe_collector_core::rpc::ServerError;
use recipe_collector_core::tooling::RegistryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Agent(#[from] AgentError),
    #[error(transparent)]
    Server(#[from] ServerError),
}

impl CliError {
    pub fn user_message(&self) -> String {
        match self {
            CliError::Agent(err) => err.user_message(),
            other => other.to_string(),
        }
    }
}
