//! Timestamps with literal UTC offsets.
//!
//! The offset of a timestamp is read straight from its trailing `±HH:MM`.
//! Nothing is resolved against a timezone database, so `+09:00` means
//! "nine hours ahead of UTC" whatever city the traveler had in mind.

use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

use crate::error::PlannerError;

/// A datetime string resolved to an absolute instant and its literal offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimePoint {
    /// The instant in UTC.
    pub instant: DateTime<Utc>,
    /// The trailing offset in signed fractional hours (`+05:30` → `5.5`).
    pub offset_hours: f64,
}

impl FromStr for TimePoint {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_time_point(s)
    }
}

/// Extract the trailing `±HH:MM` offset of a datetime string in hours.
///
/// Strings without a trailing offset (including a `Z` suffix) yield `0.0`.
///
/// # Examples
///
/// ```
/// use jetlag_engine::offset::extract_offset_hours;
///
/// assert_eq!(extract_offset_hours("2025-08-10T14:00:00+05:30"), 5.5);
/// assert_eq!(extract_offset_hours("2025-08-10T14:00:00-03:30"), -3.5);
/// assert_eq!(extract_offset_hours("2025-08-10T14:00:00"), 0.0);
/// ```
pub fn extract_offset_hours(datetime: &str) -> f64 {
    trailing_offset_minutes(datetime.trim())
        .map(|minutes| f64::from(minutes) / 60.0)
        .unwrap_or(0.0)
}

/// Parse a datetime string into a [`TimePoint`].
///
/// Accepts `YYYY-MM-DDTHH:MM[:SS[.fff]]` followed by `±HH:MM`, `Z`, or nothing.
/// Without an offset the wall-clock time is read as UTC, matching the
/// zero offset reported by [`extract_offset_hours`].
///
/// # Errors
///
/// Returns [`PlannerError::InvalidDatetime`] if the date and time cannot be
/// parsed.
pub fn parse_time_point(datetime: &str) -> Result<TimePoint, PlannerError> {
    let s = datetime.trim();

    let offset_hours = match trailing_offset_minutes(s) {
        Some(minutes) => f64::from(minutes) / 60.0,
        None => {
            tracing::debug!(datetime = s, "no trailing UTC offset, assuming +00:00");
            0.0
        }
    };

    let instant =
        parse_instant(s).ok_or_else(|| PlannerError::InvalidDatetime(format!("'{}'", s)))?;

    Ok(TimePoint {
        instant,
        offset_hours,
    })
}

/// Signed offset minutes if the string ends in `±HH:MM`.
fn trailing_offset_minutes(s: &str) -> Option<i32> {
    let tail = s.get(s.len().checked_sub(6)?..)?.as_bytes();

    let sign = match tail[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    if tail[3] != b':' {
        return None;
    }
    let hours = two_digits(&tail[1..3])?;
    let minutes = two_digits(&tail[4..6])?;

    Some(sign * (hours * 60 + minutes))
}

fn two_digits(b: &[u8]) -> Option<i32> {
    match b {
        [hi, lo] if hi.is_ascii_digit() && lo.is_ascii_digit() => {
            Some(i32::from(hi - b'0') * 10 + i32::from(lo - b'0'))
        }
        _ => None,
    }
}

fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    // Offset present but seconds omitted: "2025-08-10T14:00+09:00"
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M%:z") {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    // ── extract_offset_hours tests ──────────────────────────────────────

    #[test]
    fn test_offset_whole_hours() {
        assert_eq!(extract_offset_hours("2025-08-11T09:00:00+09:00"), 9.0);
        assert_eq!(extract_offset_hours("2025-08-11T09:00:00-08:00"), -8.0);
    }

    #[test]
    fn test_offset_fractional() {
        assert_eq!(extract_offset_hours("2025-08-11T09:00:00+05:45"), 5.75);
        assert_eq!(extract_offset_hours("2025-08-11T09:00:00-09:30"), -9.5);
    }

    #[test]
    fn test_offset_zulu_is_zero() {
        assert_eq!(extract_offset_hours("2025-08-11T09:00:00Z"), 0.0);
    }

    #[test]
    fn test_offset_malformed_falls_back_to_zero() {
        assert_eq!(extract_offset_hours("2025-08-11T09:00:00+5:30"), 0.0);
        assert_eq!(extract_offset_hours("2025-08-11T09:00:00+0530"), 0.0);
        assert_eq!(extract_offset_hours(""), 0.0);
        assert_eq!(extract_offset_hours("+09"), 0.0);
    }

    #[test]
    fn test_offset_multibyte_tail_does_not_panic() {
        assert_eq!(extract_offset_hours("2025-08-11T09:00:00→東京"), 0.0);
    }

    // ── parse_time_point tests ──────────────────────────────────────────

    #[test]
    fn test_parse_with_offset() {
        let tp = parse_time_point("2025-08-11T09:00:00+09:00").unwrap();
        assert_eq!(tp.instant, Utc.with_ymd_and_hms(2025, 8, 11, 0, 0, 0).unwrap());
        assert_eq!(tp.offset_hours, 9.0);
    }

    #[test]
    fn test_parse_without_seconds() {
        let tp = parse_time_point("2025-08-11T09:00+05:30").unwrap();
        assert_eq!(tp.instant, Utc.with_ymd_and_hms(2025, 8, 11, 3, 30, 0).unwrap());
        assert_eq!(tp.offset_hours, 5.5);
    }

    #[test]
    fn test_parse_naive_reads_as_utc() {
        let tp = parse_time_point("2025-08-11T09:00:00").unwrap();
        assert_eq!(tp.instant, Utc.with_ymd_and_hms(2025, 8, 11, 9, 0, 0).unwrap());
        assert_eq!(tp.offset_hours, 0.0);

        let short = parse_time_point("2025-08-11T09:15").unwrap();
        assert_eq!(short.instant, Utc.with_ymd_and_hms(2025, 8, 11, 9, 15, 0).unwrap());
    }

    #[test]
    fn test_parse_naive_fractional_seconds() {
        let whole = parse_time_point("2025-08-10T10:00:00.000").unwrap();
        assert_eq!(whole.instant, Utc.with_ymd_and_hms(2025, 8, 10, 10, 0, 0).unwrap());
        assert_eq!(whole.offset_hours, 0.0);

        let part = parse_time_point("2025-08-10T10:00:00.250").unwrap();
        let expected =
            Utc.with_ymd_and_hms(2025, 8, 10, 10, 0, 0).unwrap() + Duration::milliseconds(250);
        assert_eq!(part.instant, expected);
    }

    #[test]
    fn test_parse_offset_fractional_seconds() {
        let tp = parse_time_point("2025-08-10T19:00:00.000+09:00").unwrap();
        assert_eq!(tp.instant, Utc.with_ymd_and_hms(2025, 8, 10, 10, 0, 0).unwrap());
        assert_eq!(tp.offset_hours, 9.0);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let tp = parse_time_point("  2025-08-11T09:00:00-04:00 \n").unwrap();
        assert_eq!(tp.offset_hours, -4.0);
    }

    #[test]
    fn test_parse_garbage_returns_error() {
        let err = parse_time_point("next tuesday").unwrap_err().to_string();
        assert!(err.contains("Invalid datetime"), "got: {err}");
    }

    #[test]
    fn test_from_str() {
        let tp: TimePoint = "2025-08-10T14:00:00+00:00".parse().unwrap();
        assert_eq!(tp.instant, Utc.with_ymd_and_hms(2025, 8, 10, 14, 0, 0).unwrap());
    }
}
