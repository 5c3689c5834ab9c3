//! Line-framed JSON-RPC server exposing recipe tools over stdio.
//!
//! Each inbound line is one JSON-RPC message. Requests are handled on their
//! own task; a single writer task owns the output stream so response frames
//! never interleave.

use super::error::ServerError;
use super::types::{RpcRequest, RpcResponse};
use crate::application::tooling::{ToolCallResult, ToolError, ToolExecutor};
use crate::config::ServerIdentity;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

pub const PROTOCOL_VERSION: &str = "2024-11-05";

#[derive(Debug, Deserialize)]
struct CallToolParams {
    name: String,
    #[serde(default)]
    arguments: Value,
}

#[derive(Clone)]
pub struct McpServer {
    identity: ServerIdentity,
    executor: ToolExecutor,
}

impl McpServer {
    pub fn new(identity: ServerIdentity, executor: ToolExecutor) -> Self {
        Self { identity, executor }
    }

    /// Serve until `reader` reaches end of input and every in-flight request
    /// has been answered.
    pub async fn serve<R, W>(&self, reader: R, writer: W) -> Result<(), ServerError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel::<RpcResponse>();
        let writer_task = tokio::spawn(write_responses(writer, rx));

        info!(
            server = self.identity.name.as_str(),
            version = self.identity.version.as_str(),
            tools = self.executor.registry().len(),
            "Stdio server ready"
        );

        let mut lines = reader.lines();
        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(err) => return Err(ServerError::Read(err)),
            };
            if line.trim().is_empty() {
                continue;
            }

            let server = self.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                if let Some(response) = server.handle_line(&line).await {
                    if tx.send(response).is_err() {
                        warn!("Response dropped, writer has stopped");
                    }
                }
            });
        }

        debug!("Input closed, waiting for in-flight requests");
        drop(tx);
        match writer_task.await {
            Ok(result) => result,
            Err(err) => {
                error!(%err, "Writer task failed");
                Err(ServerError::Write(std::io::Error::other(err)))
            }
        }
    }

    /// Handle one raw line. `None` means nothing should be written back.
    pub async fn handle_line(&self, line: &str) -> Option<RpcResponse> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(err) => {
                warn!(%err, "Received invalid JSON");
                return Some(RpcResponse::parse_error(err));
            }
        };

        let id = value.get("id").cloned();
        match serde_json::from_value::<RpcRequest>(value) {
            Ok(request) => self.handle_request(request).await,
            Err(err) => Some(RpcResponse::invalid_request(
                id,
                format!("Invalid request: {err}"),
            )),
        }
    }

    pub async fn handle_request(&self, request: RpcRequest) -> Option<RpcResponse> {
        debug!(method = %request.method, id = ?request.id, "Received JSON-RPC message");

        if request.jsonrpc != "2.0" {
            return Some(RpcResponse::invalid_request(
                request.id,
                "Unsupported jsonrpc version (expected 2.0)",
            ));
        }

        if request.is_notification() {
            debug!(method = %request.method, "Notification acknowledged");
            return None;
        }

        let id = request.id.clone();
        let response = match request.method.as_str() {
            "initialize" => RpcResponse::success(id, self.initialize_result()),
            "ping" => RpcResponse::success(id, json!({})),
            "tools/list" => RpcResponse::success(
                id,
                json!({ "tools": self.executor.registry().descriptors() }),
            ),
            "tools/call" => self.handle_tool_call(id, request.params).await,
            other => {
                warn!(method = other, "Unknown JSON-RPC method");
                RpcResponse::method_not_found(id, other)
            }
        };
        Some(response)
    }

    fn initialize_result(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": { "listChanged": false }
            },
            "serverInfo": {
                "name": self.identity.name,
                "version": self.identity.version,
            }
        })
    }

    async fn handle_tool_call(&self, id: Option<Value>, params: Option<Value>) -> RpcResponse {
        let params: CallToolParams = match params.map(serde_json::from_value) {
            Some(Ok(params)) => params,
            Some(Err(err)) => {
                return RpcResponse::invalid_params(id, format!("Invalid tools/call params: {err}"));
            }
            None => {
                return RpcResponse::invalid_params(
                    id,
                    "tools/call requires params with a tool name",
                );
            }
        };

        let arguments = match self.executor.registry().validate(&params.name, &params.arguments) {
            Ok(arguments) => arguments,
            Err(err) => return refusal_response(id, err),
        };

        let result = self.executor.execute(arguments).await;
        RpcResponse::success(id, call_tool_result(&result))
    }
}

fn refusal_response(id: Option<Value>, err: ToolError) -> RpcResponse {
    let message = err.user_message();
    let data = match err {
        ToolError::UnknownTool(name) => json!({ "tool": name }),
        ToolError::Validation(validation) => json!({
            "tool": validation.tool,
            "violations": validation.violations,
        }),
    };
    RpcResponse::invalid_params(id, message).with_data(data)
}

/// Render an executed call as an MCP `CallToolResult`.
fn call_tool_result(result: &ToolCallResult) -> Value {
    if let Some(payload) = result.payload() {
        let text = serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());
        return json!({
            "content": [{ "type": "text", "text": text }],
            "isError": false,
        });
    }

    let mut structured = Map::new();
    let message = match result.failure_detail() {
        Some(failure) => {
            if let Some(code) = failure.status_code {
                structured.insert("statusCode".to_string(), json!(code));
            }
            failure.message.clone()
        }
        None => result.summary(),
    };
    structured.insert("message".to_string(), Value::String(message.clone()));

    json!({
        "content": [{ "type": "text", "text": message }],
        "isError": true,
        "structuredContent": structured,
    })
}

async fn write_responses<W>(
    mut writer: W,
    mut rx: mpsc::UnboundedReceiver<RpcResponse>,
) -> Result<(), ServerError>
where
    W: AsyncWrite + Unpin,
{
    while let Some(response) = rx.recv().await {
        let mut frame = serde_json::to_vec(&response)?;
        frame.push(b'\n');
        writer.write_all(&frame).await.map_err(ServerError::Write)?;
        writer.flush().await.map_err(ServerError::Write)?;
    }
    Ok(())
}
