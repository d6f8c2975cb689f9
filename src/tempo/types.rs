//! Request and wire-format types for Tempo's HTTP API.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-request authentication. Bearer token takes precedence over
/// basic auth when both are supplied.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<String>,
    pub token: Option<String>,
}

impl Credentials {
    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.username.is_none() && self.password.is_none()
    }
}

/// One search invocation against Tempo. Constructed per tool call and
/// discarded after the HTTP request completes.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub base_url: String,
    pub query: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub limit: usize,
    pub credentials: Credentials,
}

/// One trace-by-ID fetch against Tempo.
#[derive(Debug, Clone)]
pub struct TraceRequest {
    pub base_url: String,
    pub trace_id: String,
    pub credentials: Credentials,
}

/// Tempo search response body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub traces: Vec<TraceSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<serde_json::Value>,
    /// Tempo reports some failures inside a 200 body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A single trace record from a search response, field names matching
/// Tempo's camelCase wire format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraceSummary {
    #[serde(rename = "traceID", default)]
    pub trace_id: String,
    #[serde(rename = "rootServiceName", default)]
    pub root_service_name: String,
    #[serde(rename = "rootTraceName", default)]
    pub root_trace_name: String,
    /// Nanosecond Unix timestamp, serialized as a string by Tempo.
    #[serde(rename = "startTimeUnixNano", default)]
    pub start_time_unix_nano: String,
    #[serde(rename = "durationMs", default)]
    pub duration_ms: i64,
    #[serde(rename = "spanSet", skip_serializing_if = "Option::is_none")]
    pub span_set: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, String>,
}
