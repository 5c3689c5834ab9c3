//! Wire-format clients for the supported provider types.

mod ollama;
mod openai;
mod transport;

pub use ollama::OllamaClient;
pub use openai::OpenAIClient;

use super::types::{ModelError, ModelRequest, ModelResponse};
use crate::config::ModelProviderConfig;

/// A configured provider, dispatched on its `type`.
#[derive(Clone)]
pub enum ProviderClient {
    OpenAi(OpenAIClient),
    Ollama(OllamaClient),
}

impl ProviderClient {
    /// `ollama`/`localai` speak `/api/chat`; every other type is treated as
    /// OpenAI-compatible.
    pub fn from_config(config: &ModelProviderConfig) -> Self {
        if config.is_ollama() {
            Self::Ollama(OllamaClient::from_config(config))
        } else {
            Self::OpenAi(OpenAIClient::from_config(config))
        }
    }

    pub fn provider_id(&self) -> &str {
        match self {
            Self::OpenAi(client) => client.provider_id(),
            Self::Ollama(client) => client.provider_id(),
        }
    }

    pub async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        match self {
            Self::OpenAi(client) => client.chat(request).await,
            Self::Ollama(client) => client.chat(request).await,
        }
    }
}

impl From<OpenAIClient> for ProviderClient {
    fn from(client: OpenAIClient) -> Self {
        Self::OpenAi(client)
    }
}

impl From<OllamaClient> for ProviderClient {
    fn from(client: OllamaClient) -> Self {
        Self::Ollama(client)
    }
}
