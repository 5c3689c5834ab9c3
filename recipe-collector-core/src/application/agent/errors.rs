use crate::model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("tool task failed to complete: {0}")]
    ToolTask(#[from] tokio::task::JoinError),
}

impl AgentError {
    pub fn user_message(&self) -> String {
        match self {
            AgentError::Model(err) => err.user_message(),
            AgentError::ToolTask(_) => {
                "A tool call stopped unexpectedly. Please try again.".to_string()
            }
        }
    }
}
