use super::errors::AgentError;
use super::models::{
    AbortReason, AgentOptions, AgentOutcome, AgentStatus, ReasoningStep, StepTransition,
    ToolCallRecord, Transcript,
};
use crate::application::tooling::{ToolCallResult, ToolExecutor};
use crate::model::{ModelProvider, ModelRequest};
use crate::types::{ChatMessage, ToolCallRequest};
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct Agent<P: ModelProvider> {
    provider: Arc<P>,
    executor: ToolExecutor,
    default_provider: String,
    default_model: String,
}

impl<P: ModelProvider> Agent<P> {
    pub fn new(
        provider: Arc<P>,
        executor: ToolExecutor,
        default_provider: impl Into<String>,
        default_model: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            executor,
            default_provider: default_provider.into(),
            default_model: default_model.into(),
        }
    }

    pub fn executor(&self) -> &ToolExecutor {
        &self.executor
    }

    /// Drive the loop until the model answers or the step budget runs out.
    ///
    /// Tool failures never end the run: they are handed back to the model.
    /// Only a failing model call or a crashed tool task is an `Err`.
    pub async fn run(
        &self,
        prompt: String,
        options: AgentOptions,
    ) -> Result<AgentOutcome, AgentError> {
        let run_id = uuid::Uuid::new_v4().to_string();
        let provider = options
            .provider
            .unwrap_or_else(|| self.default_provider.clone());
        let model = options.model.unwrap_or_else(|| self.default_model.clone());
        let max_steps = options.max_steps;
        let tools = self.executor.registry().descriptors();

        info!(
            run_id = run_id.as_str(),
            provider = provider.as_str(),
            model = model.as_str(),
            max_steps,
            tools = tools.len(),
            "Agent run started"
        );

        let mut messages = Vec::new();
        if let Some(system) = options.system_prompt.filter(|s| !s.trim().is_empty()) {
            messages.push(ChatMessage::system(system));
        }
        messages.push(ChatMessage::user(prompt));

        let mut steps: Transcript = Vec::new();

        for index in 0..max_steps {
            debug!(
                run_id = run_id.as_str(),
                step = index,
                "Submitting agent turn to model provider"
            );
            let response = self
                .provider
                .chat(ModelRequest {
                    provider: provider.clone(),
                    model: model.clone(),
                    messages: messages.clone(),
                    tools: tools.clone(),
                })
                .await?;

            if !response.requests_tools() {
                let answer = response.text.unwrap_or_default();
                info!(run_id = run_id.as_str(), steps = index + 1, "Agent returned final response");
                steps.push(ReasoningStep {
                    index,
                    emitted_text: Some(answer.clone()),
                    tool_calls: Vec::new(),
                    transition: StepTransition::new(AgentStatus::Running, AgentStatus::Done),
                });
                return Ok(AgentOutcome {
                    run_id,
                    status: AgentStatus::Done,
                    response: Some(answer),
                    abort_reason: None,
                    steps,
                });
            }

            let calls = response.tool_calls;
            info!(
                run_id = run_id.as_str(),
                step = index,
                calls = calls.len(),
                "Agent requested tool execution"
            );
            messages.push(ChatMessage::assistant(
                response.text.clone().unwrap_or_default(),
                calls.clone(),
            ));

            let results = self.execute_step(&calls).await?;
            let mut records = Vec::with_capacity(calls.len());
            for (request, result) in calls.into_iter().zip(results) {
                debug!(
                    run_id = run_id.as_str(),
                    tool = request.tool_name.as_str(),
                    success = result.is_success(),
                    "Tool result appended"
                );
                messages.push(ChatMessage::tool_result(
                    request.id.clone(),
                    result.to_message_content(),
                ));
                records.push(ToolCallRecord { request, result });
            }

            let last_step = index + 1 == max_steps;
            let next = if last_step {
                AgentStatus::Aborted
            } else {
                AgentStatus::Running
            };
            steps.push(ReasoningStep {
                index,
                emitted_text: response.text,
                tool_calls: records,
                transition: StepTransition::new(AgentStatus::AwaitingToolResults, next),
            });
        }

        let reason = AbortReason::StepBudgetExceeded { max_steps };
        warn!(run_id = run_id.as_str(), %reason, "Agent run aborted");
        Ok(AgentOutcome {
            run_id,
            status: AgentStatus::Aborted,
            response: None,
            abort_reason: Some(reason),
            steps,
        })
    }

    /// Run every call of one step on its own task and collect the results
    /// in request order.
    async fn execute_step(
        &self,
        calls: &[ToolCallRequest],
    ) -> Result<Vec<ToolCallResult>, AgentError> {
        let handles = calls.iter().cloned().map(|request| {
            let executor = self.executor.clone();
            tokio::spawn(async move { executor.invoke(&request).await })
        });

        join_all(handles)
            .await
            .into_iter()
            .map(|joined| joined.map_err(AgentError::from))
            .collect()
    }
}
