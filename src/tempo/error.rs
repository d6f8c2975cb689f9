//! Tempo adapter error types.

use miette::Diagnostic;
use thiserror::Error;

/// Failures surfaced by the Tempo adapter.
///
/// None of these are retried or recovered locally; each propagates to
/// the MCP response as a tool-call error.
#[derive(Error, Diagnostic, Debug)]
pub enum TempoError {
    #[error("unsupported time format: {input}")]
    #[diagnostic(
        code(tempo_mcp::tempo::invalid_time),
        help("Use 'now', a relative offset like '-30m', an RFC 3339 timestamp, or YYYY-MM-DD")
    )]
    InvalidTime { input: String },

    #[error("invalid Tempo URL '{url}': {message}")]
    #[diagnostic(code(tempo_mcp::tempo::invalid_url))]
    InvalidUrl { url: String, message: String },

    #[error("request to Tempo failed")]
    #[diagnostic(
        code(tempo_mcp::tempo::request_failed),
        help("Is the Tempo server reachable? Check TEMPO_URL or the url argument.")
    )]
    Request {
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error: {status} - {body}")]
    #[diagnostic(code(tempo_mcp::tempo::http_status))]
    HttpStatus { status: u16, body: String },

    #[error("Tempo error: {message}")]
    #[diagnostic(code(tempo_mcp::tempo::server_error))]
    Tempo { message: String },

    #[error("failed to decode Tempo response: {message}")]
    #[diagnostic(code(tempo_mcp::tempo::decode))]
    Decode { message: String },

    #[error("failed to save trace to '{path}': {message}")]
    #[diagnostic(code(tempo_mcp::tempo::save_failed))]
    Save { path: String, message: String },
}

pub type TempoResult<T> = Result<T, TempoError>;
