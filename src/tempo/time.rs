//! Time string parsing for query ranges.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use super::error::{TempoError, TempoResult};

/// Fallback layouts tried after RFC 3339, in order.
/// Naive values are interpreted as UTC; a bare date means midnight.
const FALLBACK_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a user-supplied time string into an absolute instant.
///
/// Formats are attempted in fixed order, first success wins:
/// 1. the literal `now`
/// 2. a negative offset relative to now, e.g. `-30m` or `-1h`
/// 3. an RFC 3339 timestamp
/// 4. `%Y-%m-%dT%H:%M:%S`, `%Y-%m-%d %H:%M:%S`, `%Y-%m-%d`
pub fn parse_time(input: &str) -> TempoResult<DateTime<Utc>> {
    if input == "now" {
        return Ok(Utc::now());
    }

    if let Some(offset) = input.strip_prefix('-')
        && let Ok(duration) = humantime::parse_duration(offset)
        && let Ok(duration) = chrono::Duration::from_std(duration)
    {
        return Ok(Utc::now() - duration);
    }

    if let Ok(t) = DateTime::parse_from_rfc3339(input) {
        return Ok(t.with_timezone(&Utc));
    }

    for format in FALLBACK_DATETIME_FORMATS {
        if let Ok(t) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(t.and_utc());
        }
    }

    if let Ok(d) = NaiveDate::parse_from_str(input, FALLBACK_DATE_FORMAT) {
        return Ok(d.and_time(NaiveTime::MIN).and_utc());
    }

    Err(TempoError::InvalidTime {
        input: input.to_string(),
    })
}
