use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use super::transport::ProviderTransport;
use crate::config::ModelProviderConfig;
use crate::infrastructure::model::adapter::MessageAdapter;
use crate::infrastructure::model::types::{ModelError, ModelRequest, ModelResponse};
use crate::types::ToolCallRequest;

const DEFAULT_API_PATH: &str = "/v1/chat/completions";

/// Chat-completions client with native function calling. Tool-call arguments
/// arrive as JSON strings and are decoded before validation sees them.
#[derive(Clone)]
pub struct OpenAIClient {
    transport: ProviderTransport,
    api_key: Option<String>,
    api_path: String,
}

impl OpenAIClient {
    /// Resolves the key from the environment variable named in `config`.
    pub fn from_config(config: &ModelProviderConfig) -> Self {
        Self::new(config, config.resolve_api_key())
    }

    pub fn new(config: &ModelProviderConfig, api_key: Option<String>) -> Self {
        Self {
            transport: ProviderTransport::new(&config.id, &config.endpoint),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            api_path: config
                .api_path
                .clone()
                .unwrap_or_else(|| DEFAULT_API_PATH.to_string()),
        }
    }

    pub fn provider_id(&self) -> &str {
        self.transport.provider()
    }

    pub async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ModelError::missing_api_key(self.provider_id()))?;

        let payload = OpenAIRequest {
            model: request.model.clone(),
            messages: MessageAdapter::to_openai_format(&request.messages),
            tools: MessageAdapter::to_function_tools(&request.tools),
            stream: false,
        };

        info!(
            provider = self.provider_id(),
            model = request.model.as_str(),
            messages = request.messages.len(),
            tools = request.tools.len(),
            "Sending request to OpenAI-compatible provider"
        );

        let response: OpenAIResponse = self
            .transport
            .post_json(&self.api_path, Some(api_key), &payload)
            .await?;
        debug!("Received response from OpenAI-compatible provider");

        let message = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .ok_or_else(|| ModelError::invalid_response(self.provider_id(), "no choices"))?;

        let tool_calls = message
            .tool_calls
            .into_iter()
            .map(|call| {
                let arguments = MessageAdapter::parse_arguments(&call.function.arguments);
                match call.id.filter(|id| !id.is_empty()) {
                    Some(id) => ToolCallRequest::new(id, call.function.name, arguments),
                    None => MessageAdapter::call_with_generated_id(call.function.name, arguments),
                }
            })
            .collect();

        Ok(ModelResponse {
            text: message.content.filter(|text| !text.trim().is_empty()),
            tool_calls,
        })
    }
}

#[derive(Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Value>,
    stream: bool,
}

#[derive(Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
}

#[derive(Deserialize)]
struct OpenAIChoice {
    message: Option<OpenAIMessage>,
}

#[derive(Deserialize)]
struct OpenAIMessage {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    tool_calls: Vec<OpenAIToolCall>,
}

#[derive(Deserialize)]
struct OpenAIToolCall {
    #[serde(default)]
    id: Option<String>,
    function: OpenAIFunctionCall,
}

#[derive(Deserialize)]
struct OpenAIFunctionCall {
    name: String,
    #[serde(default)]
    arguments: String,
}
