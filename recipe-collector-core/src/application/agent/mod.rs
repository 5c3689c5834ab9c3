//! # Agent Module
//!
//! A bounded reasoning loop that lets a model call the recipe tools.
//!
//! ## Key Types
//!
//! - [`Agent`] - The loop driver
//! - [`AgentOptions`] - Step budget and per-run overrides
//! - [`AgentOutcome`] - Final status, answer and [`Transcript`]
//! - [`AgentError`] - Failures the loop cannot recover from
//!
//! ## Agent Loop
//!
//! 1. Send the conversation and tool definitions to the model
//! 2. If it asks for tools, run them concurrently and append the results in
//!    request order
//! 3. If it answers with text only, finish
//! 4. Stop with [`AgentStatus::Aborted`] once the step budget is spent

mod errors;
mod models;
mod runner;


pub use errors::AgentError;
pub use models::{
    AbortReason, AgentOptions, AgentOutcome, AgentStatus, ReasoningStep, StepTransition,
    ToolCallRecord, Transcript,
};
pub use runner::Agent;
