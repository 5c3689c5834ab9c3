use crate::infrastructure::model::types::ModelError;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing::{debug, warn};

/// JSON-over-HTTP transport shared by the provider wire formats.
///
/// Keeps the three failure modes apart: the request never completed
/// (`Network`), the provider answered non-2xx (`Status`), or the body was not
/// the expected JSON (`InvalidResponse`).
#[derive(Clone)]
pub(super) struct ProviderTransport {
    provider: String,
    endpoint: String,
    http: Client,
}

impl ProviderTransport {
    pub(super) fn new(provider: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            endpoint: endpoint.into(),
            http: Client::new(),
        }
    }

    pub(super) fn provider(&self) -> &str {
        &self.provider
    }

    fn url(&self, path: &str) -> String {
        let base = self.endpoint.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// POST `body` to `path`, sending `bearer` as the Authorization token when given.
    pub(super) async fn post_json<Req, Res>(
        &self,
        path: &str,
        bearer: Option<&str>,
        body: &Req,
    ) -> Result<Res, ModelError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let mut request = self.http.post(self.url(path)).json(body);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let started = Instant::now();
        let response = request.send().await.map_err(|source| {
            warn!(provider = self.provider.as_str(), %source, "Model provider unreachable");
            ModelError::network(&self.provider, source)
        })?;

        let status = response.status();
        debug!(
            provider = self.provider.as_str(),
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Model provider responded"
        );
        if !status.is_success() {
            return Err(ModelError::status(&self.provider, status));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| ModelError::network(&self.provider, source))?;
        serde_json::from_slice(&bytes).map_err(|err| {
            ModelError::invalid_response(&self.provider, format!("unexpected body: {err}"))
        })
    }
}
