use super::contract::ToolKind;
use super::error::ToolError;
use super::validation::FieldViolation;
use crate::domain::recipe::{Recipe, SearchMatches};
use crate::infrastructure::backend::BackendError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FailureKind {
    Validation,
    Backend,
    UnknownTool,
}

/// Failure descriptor carried inside a [`ToolCallResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolFailure {
    pub kind: FailureKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<FieldViolation>,
}

impl From<&BackendError> for ToolFailure {
    fn from(err: &BackendError) -> Self {
        Self {
            kind: FailureKind::Backend,
            status_code: err.status_code(),
            message: err.to_string(),
            violations: Vec::new(),
        }
    }
}

impl From<ToolError> for ToolFailure {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::UnknownTool(ref name) => Self {
                kind: FailureKind::UnknownTool,
                status_code: None,
                message: format!("Tool '{name}' is not registered"),
                violations: Vec::new(),
            },
            ToolError::Validation(validation) => Self {
                kind: FailureKind::Validation,
                status_code: None,
                message: format!("Invalid arguments for tool '{}'", validation.tool),
                violations: validation.violations,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ToolOutcome {
    Success { payload: Value },
    Failure { error: ToolFailure },
}

/// Outcome of one tool call. Produced for every call, failed or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallResult {
    pub tool_name: String,
    #[serde(flatten)]
    pub outcome: ToolOutcome,
}

impl ToolCallResult {
    pub fn success(tool_name: impl Into<String>, payload: Value) -> Self {
        Self {
            tool_name: tool_name.into(),
            outcome: ToolOutcome::Success { payload },
        }
    }

    pub fn failure(tool_name: impl Into<String>, error: impl Into<ToolFailure>) -> Self {
        Self {
            tool_name: tool_name.into(),
            outcome: ToolOutcome::Failure {
                error: error.into(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, ToolOutcome::Success { .. })
    }

    pub fn payload(&self) -> Option<&Value> {
        match &self.outcome {
            ToolOutcome::Success { payload } => Some(payload),
            ToolOutcome::Failure { .. } => None,
        }
    }

    pub fn failure_detail(&self) -> Option<&ToolFailure> {
        match &self.outcome {
            ToolOutcome::Success { .. } => None,
            ToolOutcome::Failure { error } => Some(error),
        }
    }

    /// JSON text handed back to the model as the tool message.
    pub fn to_message_content(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
    }

    /// One-line description for transcripts and logs.
    pub fn summary(&self) -> String {
        match &self.outcome {
            ToolOutcome::Failure { error } => match error.status_code {
                Some(code) => format!("failed ({code}): {}", error.message),
                None => format!("failed: {}", error.message),
            },
            ToolOutcome::Success { payload } => {
                match ToolKind::from_name(&self.tool_name) {
                    Some(ToolKind::SearchRecipes) => SearchMatches::from_value(payload)
                        .map(|matches| matches.summary()),
                    Some(ToolKind::GetRecipeById) | Some(ToolKind::AddRecipe) => {
                        Recipe::from_value(payload).map(|recipe| recipe.label())
                    }
                    None => None,
                }
                .unwrap_or_else(|| "ok".to_string())
            }
        }
    }
}
