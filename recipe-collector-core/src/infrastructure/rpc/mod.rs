//! Stdio JSON-RPC surface for external tool clients.
//!
//! - [`types`] - request/response envelopes and error codes
//! - [`server`] - [`McpServer`], the line-framed stdio loop

pub mod error;
pub mod server;
pub mod types;

pub use error::ServerError;
pub use server::{McpServer, PROTOCOL_VERSION};
pub use types::{RpcError, RpcRequest, RpcResponse};
