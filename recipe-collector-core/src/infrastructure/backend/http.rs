use super::error::BackendError;
use super::traits::RecipeBackend;
use crate::domain::recipe::NewRecipe;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Recipe service reached over HTTP.
///
/// Every call is attempted exactly once; there is no retry, caching or
/// timeout beyond what the underlying client imposes.
#[derive(Clone)]
pub struct HttpRecipeBackend {
    endpoint: String,
    http: Client,
}

impl HttpRecipeBackend {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: Client::new(),
        }
    }

    /// Build URL from endpoint and path
    fn build_url(&self, path: &str) -> String {
        let base = self.endpoint.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    async fn send(
        &self,
        operation: String,
        request: RequestBuilder,
    ) -> Result<Value, BackendError> {
        let started = Instant::now();
        let response = request
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| {
                warn!(operation = operation.as_str(), %source, "Recipe service unreachable");
                BackendError::network(&operation, source)
            })?;

        let status = response.status();
        info!(
            operation = operation.as_str(),
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Recipe service responded"
        );
        if !status.is_success() {
            return Err(BackendError::status(operation, status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| BackendError::network(&operation, source))?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&body).map_err(|source| BackendError::decode(operation, source))
    }
}

#[async_trait]
impl RecipeBackend for HttpRecipeBackend {
    async fn search_recipes(&self, term: &str) -> Result<Value, BackendError> {
        let url = self.build_url("/recipes/search");
        debug!(url = url.as_str(), term, "Searching recipes");
        let request = self.http.get(&url).query(&[("query", term)]);
        self.send("search recipes".to_string(), request).await
    }

    async fn get_recipe(&self, id: u64) -> Result<Value, BackendError> {
        let url = self.build_url(&format!("/recipes/{id}"));
        debug!(url = url.as_str(), "Fetching recipe");
        self.send(format!("get recipe {id}"), self.http.get(&url)).await
    }

    async fn add_recipe(&self, recipe: &NewRecipe) -> Result<Value, BackendError> {
        let url = self.build_url("/recipes");
        debug!(url = url.as_str(), title = recipe.title.as_str(), "Adding recipe");
        let request = self.http.post(&url).json(recipe);
        self.send("add recipe".to_string(), request).await
    }
}
