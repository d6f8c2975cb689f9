//! MCP server exposing Tempo search/trace tools.

use chrono::{Duration, Utc};
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars,
    schemars::JsonSchema,
    tool, tool_handler, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::config;
use crate::tempo::{
    Credentials, SearchRequest, TempoClient, TempoError, TraceRequest, format_search_results,
    parse_time,
};

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TempoQueryParams {
    #[schemars(description = "TraceQL query string, e.g. {duration>1s}")]
    pub query: String,
    #[schemars(
        description = "Tempo server URL (default: TEMPO_URL env var, falling back to http://localhost:3200)"
    )]
    pub url: Option<String>,
    #[schemars(description = "Username for basic authentication")]
    pub username: Option<String>,
    #[schemars(description = "Password for basic authentication")]
    pub password: Option<String>,
    #[schemars(description = "Bearer token for authentication")]
    pub token: Option<String>,
    #[schemars(
        description = "Start time: 'now', a relative offset like '-30m', RFC 3339, or YYYY-MM-DD (default: 1h ago)"
    )]
    pub start: Option<String>,
    #[schemars(description = "End time, same formats as start (default: now)")]
    pub end: Option<String>,
    #[schemars(description = "Maximum number of traces to return (default: 20)")]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TempoTraceParams {
    #[schemars(description = "Tempo trace ID")]
    pub trace_id: String,
    #[schemars(
        description = "Tempo server URL (default: TEMPO_URL env var, falling back to http://localhost:3200)"
    )]
    pub url: Option<String>,
    #[schemars(description = "Username for basic authentication")]
    pub username: Option<String>,
    #[schemars(description = "Password for basic authentication")]
    pub password: Option<String>,
    #[schemars(description = "Bearer token for authentication")]
    pub token: Option<String>,
    #[schemars(description = "Filename to save the JSON trace data to")]
    pub filename: Option<String>,
}

// =============================================================================
// Server
// =============================================================================

/// MCP server handler wrapping a shared [`TempoClient`].
#[derive(Clone)]
pub struct TempoMcpServer {
    client: TempoClient,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl TempoMcpServer {
    pub fn new(client: TempoClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Run a TraceQL query against Grafana Tempo and return matching traces as readable text. Times accept 'now', relative offsets like '-30m', RFC 3339, or YYYY-MM-DD."
    )]
    pub async fn tempo_query(
        &self,
        params: Parameters<TempoQueryParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let base_url = config::resolve_tempo_url(params.url.as_deref());
        tracing::info!(url = %base_url, query = %params.query, "tempo_query");

        let start = match &params.start {
            Some(s) if !s.is_empty() => parse_time(s).map_err(invalid_time("start"))?,
            _ => Utc::now() - Duration::hours(1),
        };
        let end = match &params.end {
            Some(s) if !s.is_empty() => parse_time(s).map_err(invalid_time("end"))?,
            _ => Utc::now(),
        };

        let request = SearchRequest {
            base_url,
            query: params.query,
            start,
            end,
            limit: params.limit.unwrap_or(config::DEFAULT_SEARCH_LIMIT),
            credentials: Credentials {
                username: params.username,
                password: params.password,
                token: params.token,
            },
        };

        let response = self.client.search(&request).await.map_err(map_tempo_error)?;

        Ok(CallToolResult::success(vec![Content::text(
            format_search_results(&response),
        )]))
    }

    #[tool(
        description = "Fetch a single trace from Grafana Tempo by trace ID. Returns the raw JSON trace, or saves it to a file when filename is given."
    )]
    pub async fn tempo_trace(
        &self,
        params: Parameters<TempoTraceParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let base_url = config::resolve_tempo_url(params.url.as_deref());
        tracing::info!(url = %base_url, trace_id = %params.trace_id, "tempo_trace");

        let request = TraceRequest {
            base_url,
            trace_id: params.trace_id,
            credentials: Credentials {
                username: params.username,
                password: params.password,
                token: params.token,
            },
        };

        let body = self.client.trace(&request).await.map_err(map_tempo_error)?;

        let text = match params.filename {
            Some(filename) if !filename.is_empty() => {
                tokio::fs::write(&filename, &body).await.map_err(|e| {
                    map_tempo_error(TempoError::Save {
                        path: filename.clone(),
                        message: e.to_string(),
                    })
                })?;
                format!("Trace saved to {filename}")
            }
            _ => body,
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for TempoMcpServer {
    fn get_info(&self) -> ServerInfo {
        // ServerInfo is non-exhaustive, so it cannot be built with a
        // struct expression.
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.instructions = Some(
            "Tempo MCP Server - Query Grafana Tempo traces with TraceQL and fetch traces by ID"
                .to_string(),
        );
        info
    }
}

// =============================================================================
// Error mapping
// =============================================================================

fn invalid_time(field: &'static str) -> impl FnOnce(TempoError) -> McpError {
    move |e| {
        McpError::invalid_params(
            format!("invalid {field} time"),
            Some(serde_json::json!({"error": e.to_string()})),
        )
    }
}

/// Map a Tempo adapter failure onto the closest JSON-RPC error class.
fn map_tempo_error(e: TempoError) -> McpError {
    match e {
        TempoError::InvalidTime { .. } | TempoError::InvalidUrl { .. } => {
            McpError::invalid_params(e.to_string(), None)
        }
        other => McpError::internal_error(other.to_string(), None),
    }
}
