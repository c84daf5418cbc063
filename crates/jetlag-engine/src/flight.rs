//! Flight duration, timezone shift and plausibility checks.

use std::fmt;

use serde::Serialize;

use crate::error::PlannerError;
use crate::offset::{parse_time_point, TimePoint};

/// Flights at or below this many hours are rejected as impossible.
const MIN_DURATION_HOURS: f64 = 0.0;
/// Longer than any itinerary worth planning for, connections included.
const MAX_DURATION_HOURS: f64 = 30.0;
/// Above this, only near-antipodal routes are believable.
const SUSPICIOUS_DURATION_HOURS: f64 = 20.0;
/// Minimum |shift| for which a [`SUSPICIOUS_DURATION_HOURS`] flight is accepted.
const SUSPICIOUS_MIN_SHIFT_HOURS: f64 = 12.0;
/// Ultra long-haul threshold.
const LONG_DURATION_HOURS: f64 = 15.0;

// ── Direction ───────────────────────────────────────────────────────────────

/// Direction of travel implied by the sign of the timezone shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    East,
    West,
    None,
}

impl Direction {
    /// Classify a signed shift in hours.
    pub fn from_shift(hours_shifted: f64) -> Self {
        if hours_shifted > 0.0 {
            Direction::East
        } else if hours_shifted < 0.0 {
            Direction::West
        } else {
            Direction::None
        }
    }

    /// Sign applied to clock times when pre-adjusting: east moves earlier.
    pub fn clock_sign(self) -> i64 {
        match self {
            Direction::East => -1,
            Direction::West => 1,
            Direction::None => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::East => "east",
            Direction::West => "west",
            Direction::None => "none",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Duration & shift ────────────────────────────────────────────────────────

/// Elapsed time and offset change between departure and arrival.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlightMetrics {
    pub departure: TimePoint,
    pub arrival: TimePoint,
    /// Real elapsed hours between the two instants (negative if arrival is first).
    pub duration_hours: f64,
    /// Arrival offset minus departure offset.
    pub hours_shifted: f64,
    pub direction: Direction,
}

impl FlightMetrics {
    /// Compute the metrics of two already-parsed timestamps.
    pub fn between(departure: TimePoint, arrival: TimePoint) -> Self {
        let elapsed = arrival.instant - departure.instant;
        let duration_hours = elapsed.num_milliseconds() as f64 / 3_600_000.0;
        let hours_shifted = arrival.offset_hours - departure.offset_hours;

        Self {
            departure,
            arrival,
            duration_hours,
            hours_shifted,
            direction: Direction::from_shift(hours_shifted),
        }
    }

    /// Magnitude of the timezone shift in hours.
    pub fn abs_shift(&self) -> f64 {
        self.hours_shifted.abs()
    }
}

/// Parse both timestamps and derive duration, shift and direction.
///
/// # Errors
///
/// Returns [`PlannerError::InvalidDatetime`] if either timestamp cannot be parsed.
///
/// # Examples
///
/// ```
/// use jetlag_engine::flight::{derive_flight, Direction};
///
/// let m = derive_flight("2025-08-10T14:00:00+00:00", "2025-08-11T09:00:00+09:00").unwrap();
/// assert_eq!(m.duration_hours, 10.0);
/// assert_eq!(m.hours_shifted, 9.0);
/// assert_eq!(m.direction, Direction::East);
/// ```
pub fn derive_flight(departure: &str, arrival: &str) -> Result<FlightMetrics, PlannerError> {
    let departure = parse_time_point(departure)?;
    let arrival = parse_time_point(arrival)?;
    Ok(FlightMetrics::between(departure, arrival))
}

// ── Validation ──────────────────────────────────────────────────────────────

/// Why a flight was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    /// Arrival at or before departure.
    NegativeDuration,
    /// More than 30 hours in the air.
    TooLong,
    /// Over 20 hours without crossing at least 12 zones.
    UnrealisticRoute,
}

impl InvalidReason {
    pub fn as_str(self) -> &'static str {
        match self {
            InvalidReason::NegativeDuration => "negative_duration",
            InvalidReason::TooLong => "too_long",
            InvalidReason::UnrealisticRoute => "unrealistic_route",
        }
    }

    /// Plain explanation of the rejection.
    pub fn description(self) -> &'static str {
        match self {
            InvalidReason::NegativeDuration => {
                "Arrival is at or before departure; check the dates and times."
            }
            InvalidReason::TooLong => {
                "The journey is longer than 30 hours; check the arrival date."
            }
            InvalidReason::UnrealisticRoute => {
                "Over 20 hours in the air while crossing fewer than 12 time zones; check for layovers."
            }
        }
    }

    /// `true` for routes that could exist but look mistyped, `false` for
    /// physically impossible ones.
    pub fn is_suspicious(self) -> bool {
        matches!(self, InvalidReason::UnrealisticRoute)
    }
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Length class of an accepted flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightCategory {
    Normal,
    Long,
}

/// Outcome of [`validate_flight`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightCheck {
    Invalid(InvalidReason),
    Valid(FlightCategory),
}

impl FlightCheck {
    pub fn is_valid(self) -> bool {
        matches!(self, FlightCheck::Valid(_))
    }

    /// One of `impossible`, `suspicious`, `long` or `normal`.
    pub fn label(self) -> &'static str {
        match self {
            FlightCheck::Invalid(reason) if reason.is_suspicious() => "suspicious",
            FlightCheck::Invalid(_) => "impossible",
            FlightCheck::Valid(FlightCategory::Long) => "long",
            FlightCheck::Valid(FlightCategory::Normal) => "normal",
        }
    }
}

/// Classify a flight by its duration and the magnitude of its shift.
///
/// Rules are checked in order: non-positive duration, over 30 hours,
/// over 20 hours with fewer than 12 zones crossed, over 15 hours (long),
/// otherwise normal.
pub fn validate_flight(duration_hours: f64, abs_shift: f64) -> FlightCheck {
    if duration_hours <= MIN_DURATION_HOURS {
        FlightCheck::Invalid(InvalidReason::NegativeDuration)
    } else if duration_hours > MAX_DURATION_HOURS {
        FlightCheck::Invalid(InvalidReason::TooLong)
    } else if duration_hours > SUSPICIOUS_DURATION_HOURS && abs_shift < SUSPICIOUS_MIN_SHIFT_HOURS
    {
        FlightCheck::Invalid(InvalidReason::UnrealisticRoute)
    } else if duration_hours > LONG_DURATION_HOURS {
        FlightCheck::Valid(FlightCategory::Long)
    } else {
        FlightCheck::Valid(FlightCategory::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── derive_flight tests ─────────────────────────────────────────────

    #[test]
    fn test_duration_uses_absolute_instants() {
        // Same clock face, three zones apart: 3 real hours, not 0
        let m = derive_flight("2025-03-01T12:00:00+03:00", "2025-03-01T12:00:00+00:00").unwrap();
        assert_eq!(m.duration_hours, 3.0);
        assert_eq!(m.hours_shifted, -3.0);
        assert_eq!(m.direction, Direction::West);
    }

    #[test]
    fn test_duration_fractional_hours() {
        let m = derive_flight("2025-03-01T08:00:00+00:00", "2025-03-01T18:15:00+05:45").unwrap();
        assert_eq!(m.duration_hours, 4.5);
        assert_eq!(m.hours_shifted, 5.75);
    }

    #[test]
    fn test_no_shift_is_direction_none() {
        let m = derive_flight("2025-03-01T08:00:00+01:00", "2025-03-01T10:00:00+01:00").unwrap();
        assert_eq!(m.direction, Direction::None);
        assert_eq!(m.abs_shift(), 0.0);
    }

    #[test]
    fn test_negative_duration_is_reported() {
        let m = derive_flight("2025-03-02T08:00:00+00:00", "2025-03-01T08:00:00+00:00").unwrap();
        assert_eq!(m.duration_hours, -24.0);
    }

    #[test]
    fn test_derive_flight_invalid_input() {
        let result = derive_flight("yesterday", "2025-03-01T08:00:00+00:00");
        assert!(matches!(result, Err(PlannerError::InvalidDatetime(_))));
    }

    // ── validate_flight tests ───────────────────────────────────────────

    #[test]
    fn test_zero_and_negative_are_impossible() {
        assert_eq!(
            validate_flight(0.0, 3.0),
            FlightCheck::Invalid(InvalidReason::NegativeDuration)
        );
        assert_eq!(
            validate_flight(-5.0, 3.0),
            FlightCheck::Invalid(InvalidReason::NegativeDuration)
        );
    }

    #[test]
    fn test_over_thirty_hours_is_too_long() {
        assert_eq!(
            validate_flight(30.5, 14.0),
            FlightCheck::Invalid(InvalidReason::TooLong)
        );
        // Exactly 30h with a big shift is still accepted
        assert_eq!(
            validate_flight(30.0, 14.0),
            FlightCheck::Valid(FlightCategory::Long)
        );
    }

    #[test]
    fn test_long_flight_with_small_shift_is_suspicious() {
        let check = validate_flight(22.0, 11.5);
        assert_eq!(check, FlightCheck::Invalid(InvalidReason::UnrealisticRoute));
        assert_eq!(check.label(), "suspicious");
    }

    #[test]
    fn test_long_flight_with_large_shift_is_long() {
        assert_eq!(
            validate_flight(22.0, 12.0),
            FlightCheck::Valid(FlightCategory::Long)
        );
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(validate_flight(15.0, 2.0), FlightCheck::Valid(FlightCategory::Normal));
        assert_eq!(validate_flight(15.5, 2.0), FlightCheck::Valid(FlightCategory::Long));
        assert_eq!(validate_flight(20.0, 0.0), FlightCheck::Valid(FlightCategory::Long));
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            FlightCheck::Invalid(InvalidReason::TooLong).label(),
            "impossible"
        );
        assert_eq!(validate_flight(2.0, 0.0).label(), "normal");
        assert!(!FlightCheck::Invalid(InvalidReason::NegativeDuration).is_valid());
    }
}
