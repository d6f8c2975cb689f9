//! Search and trace URL construction.

use chrono::{DateTime, Utc};
use url::Url;

use super::error::{TempoError, TempoResult};

/// Path segment of Tempo's search API.
const SEARCH_PATH: &str = "/api/search";

const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Build the full search URL for a TraceQL query.
///
/// Ensures the path ends in `/api/search`, preserving any existing path
/// prefix (e.g. a base of `http://host/tempo` yields
/// `http://host/tempo/api/search`). A base that already contains the
/// search path is left untouched. `start` and `end` are encoded as Unix
/// nanoseconds, which is what Tempo's API expects.
pub fn build_search_url(
    base_url: &str,
    query: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    limit: usize,
) -> TempoResult<String> {
    let mut url = Url::parse(base_url).map_err(|e| TempoError::InvalidUrl {
        url: base_url.to_string(),
        message: e.to_string(),
    })?;

    if !url.path().contains(SEARCH_PATH) {
        let path = match url.path() {
            "" | "/" => SEARCH_PATH.to_string(),
            prefix => format!("{}{}", prefix.trim_end_matches('/'), SEARCH_PATH),
        };
        url.set_path(&path);
    }

    // Managed keys replace any same-keyed params already on the base;
    // unrelated params are preserved.
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| !matches!(k.as_ref(), "q" | "start" | "end" | "limit"))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    url.set_query(None);

    let mut pairs = url.query_pairs_mut();
    for (k, v) in &kept {
        pairs.append_pair(k, v);
    }
    pairs
        .append_pair("q", query)
        .append_pair("start", &to_unix_nanos(start).to_string())
        .append_pair("end", &to_unix_nanos(end).to_string())
        .append_pair("limit", &limit.to_string());
    drop(pairs);

    Ok(url.to_string())
}

/// Build the trace-by-ID URL: `<base>/api/traces/<id>`.
pub fn build_trace_url(base_url: &str, trace_id: &str) -> String {
    format!("{}/api/traces/{}", base_url.trim_end_matches('/'), trace_id)
}

/// Whole-second resolution, matching Tempo's expectations for range
/// boundaries.
fn to_unix_nanos(t: DateTime<Utc>) -> i64 {
    t.timestamp() * NANOS_PER_SECOND
}
