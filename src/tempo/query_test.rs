//! Tests for search/trace URL construction.

use chrono::{TimeZone, Utc};

use crate::tempo::{TempoError, build_search_url, build_trace_url};

fn range() -> (chrono::DateTime<Utc>, chrono::DateTime<Utc>) {
    (
        Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2023, 1, 1, 1, 0, 0).unwrap(),
    )
}

#[test]
fn pathless_base_gets_search_path() {
    let (start, end) = range();
    let url = build_search_url("http://localhost:3200", "{duration>1s}", start, end, 20).unwrap();
    assert!(url.starts_with("http://localhost:3200/api/search?"));
}

#[test]
fn existing_search_path_is_not_duplicated() {
    let (start, end) = range();
    let url =
        build_search_url("http://localhost:3200/api/search", "{}", start, end, 20).unwrap();
    assert_eq!(url.matches("/api/search").count(), 1);
}

#[test]
fn path_prefix_is_preserved() {
    let (start, end) = range();
    let url = build_search_url("http://host:3200/tempo", "{}", start, end, 20).unwrap();
    assert!(url.starts_with("http://host:3200/tempo/api/search?"));
}

#[test]
fn range_is_encoded_as_nanoseconds() {
    let (start, end) = range();
    let url = build_search_url("http://host:3200", "{}", start, end, 20).unwrap();
    // 2023-01-01T00:00:00Z = 1672531200s
    assert!(url.contains("start=1672531200000000000"));
    assert!(url.contains("end=1672534800000000000"));
}

#[test]
fn query_and_limit_are_encoded() {
    let (start, end) = range();
    let url = build_search_url(
        "http://host:3200",
        r#"{service.name="frontend"}"#,
        start,
        end,
        50,
    )
    .unwrap();
    assert!(url.contains("limit=50"));
    // The query string must survive percent-encoding round trips.
    let parsed = url::Url::parse(&url).unwrap();
    let q = parsed
        .query_pairs()
        .find(|(k, _)| k == "q")
        .map(|(_, v)| v.to_string())
        .unwrap();
    assert_eq!(q, r#"{service.name="frontend"}"#);
}

#[test]
fn existing_managed_params_are_replaced() {
    let (start, end) = range();
    let url = build_search_url(
        "http://host:3200/api/search?q=old&limit=5",
        "{duration>1s}",
        start,
        end,
        20,
    )
    .unwrap();

    let parsed = url::Url::parse(&url).unwrap();
    let q_values: Vec<String> = parsed
        .query_pairs()
        .filter(|(k, _)| k == "q")
        .map(|(_, v)| v.to_string())
        .collect();
    assert_eq!(q_values, vec!["{duration>1s}"]);

    let limit_values: Vec<String> = parsed
        .query_pairs()
        .filter(|(k, _)| k == "limit")
        .map(|(_, v)| v.to_string())
        .collect();
    assert_eq!(limit_values, vec!["20"]);
}

#[test]
fn unrelated_params_are_preserved() {
    let (start, end) = range();
    let url = build_search_url("http://host:3200/?orgID=7", "{}", start, end, 20).unwrap();

    let parsed = url::Url::parse(&url).unwrap();
    let org = parsed
        .query_pairs()
        .find(|(k, _)| k == "orgID")
        .map(|(_, v)| v.to_string());
    assert_eq!(org.as_deref(), Some("7"));
    assert!(url.contains("limit=20"));
}

#[test]
fn invalid_base_url_is_an_error() {
    let (start, end) = range();
    let err = build_search_url("not a url", "{}", start, end, 20).unwrap_err();
    match err {
        TempoError::InvalidUrl { url, .. } => assert_eq!(url, "not a url"),
        other => panic!("expected InvalidUrl, got {other:?}"),
    }
}

#[test]
fn trace_url_joins_base_and_id() {
    assert_eq!(
        build_trace_url("http://localhost:3200", "abc123"),
        "http://localhost:3200/api/traces/abc123"
    );
}

#[test]
fn trace_url_trims_trailing_slash() {
    assert_eq!(
        build_trace_url("http://localhost:3200/", "abc123"),
        "http://localhost:3200/api/traces/abc123"
    );
}
