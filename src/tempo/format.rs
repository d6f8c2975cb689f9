//! Plain-text rendering of search results.

use std::fmt::Write;

use chrono::{DateTime, Utc};

use super::types::{SearchResponse, TraceSummary};

/// Render a search response as a multi-line text block, one stanza per
/// trace. An empty result set yields a fixed sentinel line.
pub fn format_search_results(response: &SearchResponse) -> String {
    if response.traces.is_empty() {
        return "No traces found matching the query".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "Found {} traces:\n", response.traces.len());

    for (i, trace) in response.traces.iter().enumerate() {
        format_trace(&mut out, i + 1, trace);
        out.push('\n');
    }

    out
}

fn format_trace(out: &mut String, index: usize, trace: &TraceSummary) {
    let _ = writeln!(out, "Trace {index}:");
    let _ = writeln!(out, "  TraceID: {}", trace.trace_id);
    let _ = writeln!(out, "  Service: {}", trace.root_service_name);
    let _ = writeln!(out, "  Name: {}", trace.root_trace_name);

    // Skipped when the timestamp is absent or not a valid integer.
    if let Some(start) = parse_start_time(&trace.start_time_unix_nano) {
        let _ = writeln!(out, "  Start Time: {}", start.to_rfc3339());
    }

    let _ = writeln!(out, "  Duration: {} ms", trace.duration_ms);

    if !trace.attributes.is_empty() {
        let _ = writeln!(out, "  Attributes:");
        let mut keys: Vec<_> = trace.attributes.keys().collect();
        keys.sort();
        for key in keys {
            let _ = writeln!(out, "    {}: {}", key, trace.attributes[key]);
        }
    }
}

fn parse_start_time(nanos: &str) -> Option<DateTime<Utc>> {
    let nanos: i64 = nanos.parse().ok()?;
    // Handles pre-1970 instants, unlike splitting into secs/subsec parts.
    Some(DateTime::from_timestamp_nanos(nanos))
}
