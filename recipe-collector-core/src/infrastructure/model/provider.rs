use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use tracing::debug;

use super::clients::ProviderClient;
use super::traits::ModelProvider;
use super::types::{ModelError, ModelRequest, ModelResponse};
use crate::config::ModelProviderConfig;

struct ProviderRoute {
    models: HashSet<String>,
    client: ProviderClient,
}

impl ProviderRoute {
    /// An empty model list accepts any model name.
    fn serves(&self, model: &str) -> bool {
        self.models.is_empty() || self.models.contains(model)
    }
}

/// Routes each request to the client registered under its provider id,
/// refusing models the provider does not list.
#[derive(Default)]
pub struct DynamicModelProvider {
    routes: HashMap<String, ProviderRoute>,
}

impl DynamicModelProvider {
    pub fn from_configs(configs: &[ModelProviderConfig]) -> Self {
        let mut provider = Self::default();
        for config in configs {
            provider.insert(config, ProviderClient::from_config(config));
        }
        provider
    }

    /// Register `client` under the id and model list of `config`, replacing
    /// any earlier route with the same id.
    pub fn insert(&mut self, config: &ModelProviderConfig, client: impl Into<ProviderClient>) {
        let client = client.into();
        let models = config.models.iter().map(|m| m.name.clone()).collect();
        debug!(
            provider = config.id.as_str(),
            client = client.provider_id(),
            "Registered model provider"
        );
        self.routes
            .insert(config.id.clone(), ProviderRoute { models, client });
    }
}

#[async_trait]
impl ModelProvider for DynamicModelProvider {
    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        let route = self
            .routes
            .get(&request.provider)
            .ok_or_else(|| ModelError::provider_not_found(&request.provider))?;

        if !route.serves(&request.model) {
            return Err(ModelError::model_not_found(&request.provider, &request.model));
        }

        route.client.chat(request).await
    }
}
