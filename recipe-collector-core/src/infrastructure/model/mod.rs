//! Oracle adapters: the text-generation services that decide, per turn,
//! whether to answer or to call recipe tools.
//!
//! The agent loop only sees [`ModelProvider`]. [`DynamicModelProvider`] routes
//! each request by provider id to a [`clients::ProviderClient`], which speaks
//! either the OpenAI-compatible or the Ollama wire format.

pub mod adapter;
pub mod clients;
pub mod provider;
pub mod traits;
pub mod types;

pub use provider::DynamicModelProvider;
pub use traits::ModelProvider;
pub use types::{ModelError, ModelRequest, ModelResponse};
