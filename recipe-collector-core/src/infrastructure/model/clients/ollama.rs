use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use super::transport::ProviderTransport;
use crate::config::ModelProviderConfig;
use crate::infrastructure::model::adapter::MessageAdapter;
use crate::infrastructure::model::types::{ModelError, ModelRequest, ModelResponse};

/// Local Ollama server speaking `/api/chat`. No authentication.
#[derive(Clone)]
pub struct OllamaClient {
    transport: ProviderTransport,
}

impl OllamaClient {
    pub fn from_config(config: &ModelProviderConfig) -> Self {
        Self {
            transport: ProviderTransport::new(&config.id, &config.endpoint),
        }
    }

    pub fn provider_id(&self) -> &str {
        self.transport.provider()
    }

    pub async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        let payload = OllamaRequest {
            model: request.model.clone(),
            messages: MessageAdapter::to_ollama_format(&request.messages),
            tools: MessageAdapter::to_function_tools(&request.tools),
            stream: false,
        };

        info!(
            provider = self.provider_id(),
            model = request.model.as_str(),
            messages = request.messages.len(),
            tools = request.tools.len(),
            "Sending request to Ollama"
        );

        let response: OllamaResponse =
            self.transport.post_json("/api/chat", None, &payload).await?;
        debug!("Received response from Ollama");

        let message = response
            .message
            .ok_or_else(|| ModelError::invalid_response(self.provider_id(), "missing message"))?;

        // Ollama does not assign call ids.
        let tool_calls = message
            .tool_calls
            .into_iter()
            .map(|call| {
                let arguments = match call.function.arguments {
                    Value::String(raw) => MessageAdapter::parse_arguments(&raw),
                    other => other,
                };
                MessageAdapter::call_with_generated_id(call.function.name, arguments)
            })
            .collect();

        Ok(ModelResponse {
            text: Some(message.content).filter(|text| !text.trim().is_empty()),
            tool_calls,
        })
    }
}

#[derive(Serialize)]
struct OllamaRequest {
    model: String,
    messages: Vec<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Value>,
    stream: bool,
}

#[derive(Deserialize)]
struct OllamaResponse {
    message: Option<OllamaMessage>,
}

#[derive(Deserialize)]
struct OllamaMessage {
    #[serde(default)]
    content: String,
    #[serde(default)]
    tool_calls: Vec<OllamaToolCall>,
}

#[derive(Deserialize)]
struct OllamaToolCall {
    function: OllamaFunctionCall,
}

#[derive(Deserialize)]
struct OllamaFunctionCall {
    name: String,
    #[serde(default)]
    arguments: Value,
}
