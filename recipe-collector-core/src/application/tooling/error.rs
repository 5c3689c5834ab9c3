use super::validation::ValidationError;
use thiserror::Error;

/// Raised while building a registry; fatal at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("tool '{0}' is already registered")]
    DuplicateToolName(String),
}

/// Reasons a call is refused before it reaches the recipe service.
#[derive(Debug, Error, PartialEq)]
pub enum ToolError {
    #[error("unknown tool requested: {0}")]
    UnknownTool(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ToolError {
    pub fn user_message(&self) -> String {
        match self {
            ToolError::UnknownTool(name) => format!("Tool \"{name}\" is not available."),
            ToolError::Validation(err) => format!(
                "Tool \"{}\" was called with invalid arguments ({} problem(s)).",
                err.tool,
                err.violations.len()
            ),
        }
    }
}
