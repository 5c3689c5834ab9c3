//! # Tooling Module
//!
//! The protocol-neutral tool layer shared by the agent loop and the stdio
//! server.
//!
//! - [`contract`] - [`ToolContract`] declarations and their input schemas
//! - [`validation`] - structural argument checks that report every violation
//! - [`registry`] - [`ToolRegistry`], name → contract with unique names
//! - [`executor`] - [`ToolExecutor`], runs validated calls against the backend
//! - [`result`] - [`ToolCallResult`], the success/failure data every call yields

pub mod arguments;
pub mod contract;
pub mod error;
pub mod executor;
pub mod registry;
pub mod result;
pub mod validation;

pub use arguments::{GetRecipeByIdArgs, SearchRecipesArgs, ToolArguments};
pub use contract::{FieldSpec, FieldType, InputSchema, StringFormat, ToolContract, ToolKind};
pub use error::{RegistryError, ToolError};
pub use executor::ToolExecutor;
pub use registry::{ToolDescriptor, ToolRegistry};
pub use result::{FailureKind, ToolCallResult, ToolFailure, ToolOutcome};
pub use validation::{FieldViolation, ValidationError};
