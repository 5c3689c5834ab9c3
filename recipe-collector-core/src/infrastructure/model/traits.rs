use super::types::{ModelError, ModelRequest, ModelResponse};
use async_trait::async_trait;

/// One reasoning turn: the conversation so far plus the offered tools go in,
/// final text and/or tool calls come out.
///
/// Implementations must not execute tools themselves.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError>;
}
