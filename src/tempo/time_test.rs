//! Tests for time string parsing.

use chrono::{Duration, TimeZone, Utc};

use crate::tempo::{TempoError, parse_time};

#[test]
fn now_yields_current_time() {
    let parsed = parse_time("now").unwrap();
    let delta = (Utc::now() - parsed).num_seconds().abs();
    assert!(delta <= 2, "expected 'now' within 2s, got {delta}s drift");
}

#[test]
fn relative_offset_one_hour() {
    let parsed = parse_time("-1h").unwrap();
    let expected = Utc::now() - Duration::hours(1);
    let delta = (expected - parsed).num_seconds().abs();
    assert!(delta <= 2, "expected now-1h within 2s, got {delta}s drift");
}

#[test]
fn relative_offset_thirty_minutes() {
    let parsed = parse_time("-30m").unwrap();
    let expected = Utc::now() - Duration::minutes(30);
    let delta = (expected - parsed).num_seconds().abs();
    assert!(delta <= 2);
}

#[test]
fn rfc3339_with_zulu() {
    let parsed = parse_time("2023-01-01T10:30:00Z").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 1, 1, 10, 30, 0).unwrap());
}

#[test]
fn rfc3339_with_offset() {
    let parsed = parse_time("2023-01-01T10:30:00+02:00").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 1, 1, 8, 30, 0).unwrap());
}

#[test]
fn naive_datetime_with_t_separator() {
    let parsed = parse_time("2023-06-15T08:00:00").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 6, 15, 8, 0, 0).unwrap());
}

#[test]
fn naive_datetime_with_space_separator() {
    let parsed = parse_time("2023-06-15 08:00:00").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 6, 15, 8, 0, 0).unwrap());
}

#[test]
fn bare_date_is_midnight_utc() {
    let parsed = parse_time("2023-01-01").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());
}

#[test]
fn garbage_input_names_the_input() {
    let err = parse_time("yesterday-ish").unwrap_err();
    match err {
        TempoError::InvalidTime { input } => assert_eq!(input, "yesterday-ish"),
        other => panic!("expected InvalidTime, got {other:?}"),
    }
}

#[test]
fn positive_offset_is_not_relative() {
    // Only negative offsets are relative; "30m" alone is rejected.
    assert!(parse_time("30m").is_err());
}
