use recipe_collector_core::agent::{AgentOutcome, AgentStatus};

/// Human-readable transcript of a finished run.
pub fn render_outcome(prompt: &str, outcome: &AgentOutcome) -> String {
    let mut out = format!("User: {prompt}\n");

    match outcome.status {
        AgentStatus::Done => {
            let answer = outcome.response.as_deref().unwrap_or_default();
            out.push_str(&format!("Assistant: {answer}\n"));
        }
        _ => {
            let reason = outcome
                .abort_reason
                .map(|reason| reason.to_string())
                .unwrap_or_else(|| outcome.status.to_string());
            out.push_str(&format!("Run incomplete: {reason}\n"));
        }
    }

    if outcome.steps.len() > 1 || !outcome.is_done() {
        out.push_str("Tool calls:\n");
        for step in outcome.steps.iter().filter(|step| !step.tool_calls.is_empty()) {
            for record in &step.tool_calls {
                out.push_str(&format!("  [{}] {}\n", step.index + 1, record.summary()));
            }
        }
    }

    out
}
