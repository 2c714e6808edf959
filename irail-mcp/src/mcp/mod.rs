//! Model Context Protocol server.
//!
//! JSON-RPC 2.0 with the `initialize`, `ping`, `tools/list` and
//! `tools/call` methods, served over stdio or HTTP.

pub mod http;
mod server;
pub mod stdio;
mod types;

pub use http::{create_router, serve_http};
pub use server::{McpServer, PROTOCOL_VERSION, SERVER_NAME};
pub use stdio::{serve_lines, serve_stdio};
pub use types::{
    INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR, RpcError, RpcRequest,
    RpcResponse,
};
