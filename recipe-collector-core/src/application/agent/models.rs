use crate::application::tooling::ToolCallResult;
use crate::constants::DEFAULT_MAX_STEPS;
use crate::types::ToolCallRequest;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AgentStatus {
    Running,
    AwaitingToolResults,
    Done,
    Aborted,
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AgentStatus::Running => "running",
            AgentStatus::AwaitingToolResults => "awaiting tool results",
            AgentStatus::Done => "done",
            AgentStatus::Aborted => "aborted",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepTransition {
    pub from: AgentStatus,
    pub to: AgentStatus,
}

impl StepTransition {
    pub fn new(from: AgentStatus, to: AgentStatus) -> Self {
        Self { from, to }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolCallRecord {
    pub request: ToolCallRequest,
    pub result: ToolCallResult,
}

impl ToolCallRecord {
    pub fn summary(&self) -> String {
        format!("{} → {}", self.request.tool_name, self.result.summary())
    }
}

/// One model turn and the tool calls it requested, in request order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReasoningStep {
    pub index: usize,
    pub emitted_text: Option<String>,
    pub tool_calls: Vec<ToolCallRecord>,
    pub transition: StepTransition,
}

pub type Transcript = Vec<ReasoningStep>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "reason")]
pub enum AbortReason {
    StepBudgetExceeded { max_steps: usize },
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortReason::StepBudgetExceeded { max_steps } => {
                write!(f, "step budget of {max_steps} exceeded before a final answer")
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentOutcome {
    pub run_id: String,
    pub status: AgentStatus,
    /// Final text; present only when the run is `Done`.
    pub response: Option<String>,
    pub abort_reason: Option<AbortReason>,
    pub steps: Transcript,
}

impl AgentOutcome {
    pub fn is_done(&self) -> bool {
        self.status == AgentStatus::Done
    }

    pub fn tool_call_count(&self) -> usize {
        self.steps.iter().map(|step| step.tool_calls.len()).sum()
    }
}

#[derive(Debug, Clone)]
pub struct AgentOptions {
    pub model: Option<String>,
    pub provider: Option<String>,
    pub system_prompt: Option<String>,
    pub max_steps: usize,
}

impl Default for AgentOptions {
    fn default() -> Self {
        Self {
            model: None,
            provider: None,
            system_prompt: None,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}
