//! Message adapters - convert between different API formats

use crate::application::tooling::ToolDescriptor;
use crate::types::{ChatMessage, MessageRole, ToolCallRequest};
use serde_json::{Value, json};

/// Adapter for converting messages and tools to different API formats
pub struct MessageAdapter;

impl MessageAdapter {
    /// Convert messages to OpenAI chat-completions format.
    ///
    /// Tool-call arguments travel as JSON-encoded strings.
    pub fn to_openai_format(messages: &[ChatMessage]) -> Vec<Value> {
        messages
            .iter()
            .map(|msg| match msg.role {
                MessageRole::Assistant if !msg.tool_calls.is_empty() => json!({
                    "role": "assistant",
                    "content": non_empty(&msg.content),
                    "tool_calls": msg.tool_calls.iter().map(|call| json!({
                        "id": call.id,
                        "type": "function",
                        "function": {
                            "name": call.tool_name,
                            "arguments": call.arguments.to_string(),
                        }
                    })).collect::<Vec<_>>(),
                }),
                MessageRole::Tool => json!({
                    "role": "tool",
                    "tool_call_id": msg.tool_call_id,
                    "content": msg.content,
                }),
                role => json!({
                    "role": role.as_str(),
                    "content": msg.content,
                }),
            })
            .collect()
    }

    /// Convert messages to Ollama format.
    ///
    /// Same roles as OpenAI, but arguments stay JSON objects and tool
    /// results are not correlated by id.
    pub fn to_ollama_format(messages: &[ChatMessage]) -> Vec<Value> {
        messages
            .iter()
            .map(|msg| match msg.role {
                MessageRole::Assistant if !msg.tool_calls.is_empty() => json!({
                    "role": "assistant",
                    "content": msg.content,
                    "tool_calls": msg.tool_calls.iter().map(|call| json!({
                        "function": {
                            "name": call.tool_name,
                            "arguments": call.arguments,
                        }
                    })).collect::<Vec<_>>(),
                }),
                role => json!({
                    "role": role.as_str(),
                    "content": msg.content,
                }),
            })
            .collect()
    }

    /// Function definitions understood by both OpenAI and Ollama.
    pub fn to_function_tools(tools: &[ToolDescriptor]) -> Vec<Value> {
        tools
            .iter()
            .map(|tool| {
                json!({
                    "type": "function",
                    "function": {
                        "name": tool.name,
                        "description": tool.description,
                        "parameters": tool.input_schema,
                    }
                })
            })
            .collect()
    }

    /// Parse arguments a provider sent as a JSON-encoded string.
    ///
    /// Text that is not JSON is kept verbatim so validation can report it.
    pub fn parse_arguments(raw: &str) -> Value {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Value::Null;
        }
        serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(raw.to_string()))
    }

    /// Build a request with a generated id for providers that omit one.
    pub fn call_with_generated_id(tool_name: String, arguments: Value) -> ToolCallRequest {
        let id = format!("call_{}", uuid::Uuid::new_v4().simple());
        ToolCallRequest::new(id, tool_name, arguments)
    }
}

fn non_empty(content: &str) -> Value {
    if content.trim().is_empty() {
        Value::Null
    } else {
        Value::String(content.to_string())
    }
}
