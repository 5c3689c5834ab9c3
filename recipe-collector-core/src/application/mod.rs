//! # Application Module
//!
//! Core application logic shared by both host protocols.
//!
//! ## Submodules
//!
//! - [`tooling`] - Tool contracts, argument validation and the invocation executor
//! - [`agent`] - Step-bounded reasoning loop that lets a model call the tools

pub mod agent;
pub mod tooling;
