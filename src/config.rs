//! Environment-derived configuration.
//!
//! The server carries no config file; everything comes from two
//! environment variables and per-call tool arguments.

use std::env;

/// Environment variable naming the Tempo server base URL.
pub const ENV_TEMPO_URL: &str = "TEMPO_URL";

/// Environment variable naming an outbound HTTP proxy.
pub const ENV_HTTP_PROXY: &str = "HTTP_PROXY";

/// Base URL used when `TEMPO_URL` is unset.
pub const DEFAULT_TEMPO_URL: &str = "http://localhost:3200";

/// Default number of traces returned by a search.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Resolve the effective Tempo base URL.
///
/// Priority:
/// 1. Explicit `url` tool argument
/// 2. `TEMPO_URL` environment variable
/// 3. Default: `http://localhost:3200`
pub fn resolve_tempo_url(url_arg: Option<&str>) -> String {
    url_arg
        .filter(|u| !u.is_empty())
        .map(str::to_string)
        .or_else(|| env::var(ENV_TEMPO_URL).ok().filter(|u| !u.is_empty()))
        .unwrap_or_else(|| DEFAULT_TEMPO_URL.to_string())
}

/// Outbound proxy address from `HTTP_PROXY`, if set.
///
/// A bare `host:port` value is prefixed with `http://` so reqwest
/// accepts it as a proxy URL.
pub fn http_proxy() -> Option<String> {
    let addr = env::var(ENV_HTTP_PROXY).ok().filter(|a| !a.is_empty())?;
    if addr.starts_with("http://") || addr.starts_with("https://") {
        Some(addr)
    } else {
        Some(format!("http://{addr}"))
    }
}
