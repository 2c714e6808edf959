//! HTTP transport: one JSON-RPC message per `POST /mcp`.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tower_http::trace::TraceLayer;

use super::server::McpServer;

/// Create the HTTP router.
pub fn create_router(server: McpServer) -> Router {
    Router::new()
        .route("/mcp", post(handle_mcp))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(server)
}

/// Serve on an already bound listener.
pub async fn serve_http(server: McpServer, listener: tokio::net::TcpListener) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "serving MCP over HTTP");
    }
    axum::serve(listener, create_router(server)).await
}

/// Health check endpoint.
async fn health(State(server): State<McpServer>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "stations": server.tools().stations().len(),
        "cached_responses": server.tools().irail().cache_entry_count(),
    }))
}

/// The body is taken raw so malformed JSON gets a JSON-RPC parse error
/// rather than axum's plain-text rejection.
async fn handle_mcp(State(server): State<McpServer>, body: String) -> Response {
    match server.handle_message(&body).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}
