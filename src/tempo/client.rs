//! Outbound HTTP client for Tempo.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};

use crate::config;

use super::error::{TempoError, TempoResult};
use super::query::{build_search_url, build_trace_url};
use super::types::{Credentials, SearchRequest, SearchResponse, TraceRequest};

/// Outbound request timeout. No retries, no local recovery.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for Tempo's search and trace APIs.
///
/// The underlying reqwest client is built once (timeout, optional proxy
/// from `HTTP_PROXY`) and shared across tool invocations; credentials
/// are applied per request.
#[derive(Debug, Clone)]
pub struct TempoClient {
    client: Client,
}

impl TempoClient {
    pub fn new() -> TempoResult<Self> {
        let mut builder = Client::builder().timeout(REQUEST_TIMEOUT);

        if let Some(proxy_url) = config::http_proxy() {
            tracing::info!(proxy = %proxy_url, "using HTTP_PROXY for outbound requests");
            let proxy =
                reqwest::Proxy::all(&proxy_url).map_err(|e| TempoError::InvalidUrl {
                    url: proxy_url,
                    message: e.to_string(),
                })?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|source| TempoError::Request { source })?;

        Ok(Self { client })
    }

    /// Run a TraceQL search and decode the JSON response.
    pub async fn search(&self, request: &SearchRequest) -> TempoResult<SearchResponse> {
        let url = build_search_url(
            &request.base_url,
            &request.query,
            request.start,
            request.end,
            request.limit,
        )?;

        tracing::debug!(url = %url, "executing Tempo search");
        let body = self.get(&url, &request.credentials).await?;
        decode_search_response(&body)
    }

    /// Fetch a trace by ID, returning the raw JSON body.
    pub async fn trace(&self, request: &TraceRequest) -> TempoResult<String> {
        let url = build_trace_url(&request.base_url, &request.trace_id);

        tracing::debug!(url = %url, "fetching Tempo trace");
        self.get(&url, &request.credentials).await
    }

    async fn get(&self, url: &str, credentials: &Credentials) -> TempoResult<String> {
        let request = apply_credentials(self.client.get(url), credentials);

        let response = request
            .send()
            .await
            .map_err(|source| TempoError::Request { source })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| TempoError::Request { source })?;

        tracing::debug!(status = %status, bytes = body.len(), "Tempo response received");
        check_status(status, body)
    }
}

pub(super) fn apply_credentials(
    request: RequestBuilder,
    credentials: &Credentials,
) -> RequestBuilder {
    if let Some(token) = &credentials.token {
        request.bearer_auth(token)
    } else if credentials.username.is_some() || credentials.password.is_some() {
        request.basic_auth(
            credentials.username.as_deref().unwrap_or_default(),
            credentials.password.as_deref(),
        )
    } else {
        request
    }
}

pub(super) fn check_status(status: StatusCode, body: String) -> TempoResult<String> {
    if status != StatusCode::OK {
        return Err(TempoError::HttpStatus {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}

pub(super) fn decode_search_response(body: &str) -> TempoResult<SearchResponse> {
    let mut response: SearchResponse =
        serde_json::from_str(body).map_err(|e| TempoError::Decode {
            message: e.to_string(),
        })?;

    if let Some(message) = response.error.take() {
        return Err(TempoError::Tempo { message });
    }

    Ok(response)
}
