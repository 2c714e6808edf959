//! MCP method dispatch.
//!
//! Transport-agnostic: each inbound message yields at most one response,
//! and notifications yield none.

use serde::Deserialize;
use serde_json::{Value, json};

use crate::tools::{ToolContext, tool_definitions};

use super::types::{RpcRequest, RpcResponse};

/// Protocol revision answered when the client does not ask for one.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

pub const SERVER_NAME: &str = "irail-mcp";

#[derive(Debug, Deserialize)]
struct CallParams {
    name: String,
    #[serde(default)]
    arguments: Value,
}

/// MCP server over the railway tools.
#[derive(Clone)]
pub struct McpServer {
    tools: ToolContext,
}

impl McpServer {
    pub fn new(tools: ToolContext) -> Self {
        Self { tools }
    }

    pub fn tools(&self) -> &ToolContext {
        &self.tools
    }

    /// Handle one raw JSON message.
    pub async fn handle_message(&self, raw: &str) -> Option<RpcResponse> {
        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "unparseable message");
                return Some(RpcResponse::parse_error(format!("Parse error: {e}")));
            }
        };

        if !value.is_object() {
            return Some(RpcResponse::invalid_request(
                None,
                "Request must be a JSON object",
            ));
        }

        match serde_json::from_value::<RpcRequest>(value) {
            Ok(request) => self.handle(request).await,
            Err(e) => Some(RpcResponse::invalid_request(None, e.to_string())),
        }
    }

    /// Handle one decoded request.
    pub async fn handle(&self, request: RpcRequest) -> Option<RpcResponse> {
        tracing::debug!(method = %request.method, "received JSON-RPC message");

        if request.method.is_empty() {
            return Some(RpcResponse::invalid_request(
                request.id,
                "Request is missing a method",
            ));
        }

        if request.is_notification() {
            // Nothing to do for `notifications/initialized` and friends.
            tracing::debug!(method = %request.method, "notification");
            return None;
        }

        let id = request.id.clone();

        if request.jsonrpc != "2.0" {
            return Some(RpcResponse::invalid_request(
                id,
                "Unsupported jsonrpc version (expected 2.0)",
            ));
        }

        let response = match request.method.as_str() {
            "initialize" => self.initialize(id, request.params.as_ref()),
            "ping" => RpcResponse::success(id, json!({})),
            "tools/list" => RpcResponse::success(id, json!({ "tools": tool_definitions() })),
            "tools/call" => self.call_tool(id, request.params).await,
            other => {
                tracing::warn!(method = other, "unknown JSON-RPC method");
                RpcResponse::method_not_found(id, other)
            }
        };

        Some(response)
    }

    fn initialize(&self, id: Option<Value>, params: Option<&Value>) -> RpcResponse {
        let version = params
            .and_then(|p| p.get("protocolVersion"))
            .and_then(Value::as_str)
            .unwrap_or(PROTOCOL_VERSION);

        tracing::info!(protocol = version, "client initialized");

        RpcResponse::success(
            id,
            json!({
                "protocolVersion": version,
                "capabilities": { "tools": { "listChanged": false } },
                "serverInfo": {
                    "name": SERVER_NAME,
                    "version": env!("CARGO_PKG_VERSION"),
                },
            }),
        )
    }

    async fn call_tool(&self, id: Option<Value>, params: Option<Value>) -> RpcResponse {
        let params: CallParams = match params.map(serde_json::from_value) {
            Some(Ok(params)) => params,
            Some(Err(e)) => return RpcResponse::invalid_params(id, e.to_string()),
            None => return RpcResponse::invalid_params(id, "missing params"),
        };

        tracing::info!(tool = %params.name, "tool call");
        let output = self.tools.call(&params.name, params.arguments).await;

        RpcResponse::success(
            id,
            json!({
                "content": [{ "type": "text", "text": output.text }],
                "isError": output.is_error,
            }),
        )
    }
}
