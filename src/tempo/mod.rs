//! Tempo domain layer.
//!
//! Everything needed to turn a tool invocation into an HTTP GET against
//! a Tempo server and back into readable text:
//!
//! - `time`: absolute/relative time string parsing
//! - `query`: search/trace URL construction
//! - `types`: request and wire-format response types
//! - `client`: outbound HTTP with optional auth and proxy
//! - `format`: plain-text rendering of search results

mod client;
mod error;
mod format;
mod query;
mod time;
mod types;

#[cfg(test)]
mod query_test;
#[cfg(test)]
mod time_test;

pub use client::TempoClient;
pub use error::{TempoError, TempoResult};
pub use format::format_search_results;
pub use query::{build_search_url, build_trace_url};
pub use time::parse_time;
pub use types::{Credentials, SearchRequest, SearchResponse, TraceRequest, TraceSummary};
