//! Habitual sleep schedule and 24-hour clock arithmetic.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Minutes in one day; all clock arithmetic wraps modulo this value.
pub const MINUTES_PER_DAY: i64 = 1440;

/// A recurring bedtime and wake time.
///
/// The wake time may be numerically before the bedtime; the night then
/// wraps past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepSchedule {
    pub bedtime: NaiveTime,
    pub wake_time: NaiveTime,
}

impl SleepSchedule {
    pub fn new(bedtime: NaiveTime, wake_time: NaiveTime) -> Self {
        Self { bedtime, wake_time }
    }

    /// Parse a schedule from two `HH:MM` strings.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::InvalidTime`] if either string is not a
    /// 24-hour time of day.
    pub fn parse(bedtime: &str, wake_time: &str) -> Result<Self, PlannerError> {
        Ok(Self {
            bedtime: parse_time_of_day(bedtime)?,
            wake_time: parse_time_of_day(wake_time)?,
        })
    }

    /// Bedtime as minutes past midnight.
    pub fn bedtime_minutes(&self) -> i64 {
        minutes_of_day(self.bedtime)
    }

    /// Wake time as minutes past midnight.
    pub fn wake_minutes(&self) -> i64 {
        minutes_of_day(self.wake_time)
    }

    /// Nightly sleep in minutes, always in `1..=1440`.
    ///
    /// A non-positive raw difference wraps past midnight, so equal bedtime
    /// and wake time count as a full day.
    pub fn duration_minutes(&self) -> i64 {
        let raw = self.wake_minutes() - self.bedtime_minutes();
        if raw <= 0 {
            raw + MINUTES_PER_DAY
        } else {
            raw
        }
    }

    /// Nightly sleep in hours.
    ///
    /// ```
    /// use jetlag_engine::schedule::SleepSchedule;
    ///
    /// assert_eq!(SleepSchedule::parse("23:00", "07:00").unwrap().duration_hours(), 8.0);
    /// assert_eq!(SleepSchedule::parse("07:00", "23:00").unwrap().duration_hours(), 16.0);
    /// ```
    pub fn duration_hours(&self) -> f64 {
        self.duration_minutes() as f64 / 60.0
    }

    /// Bedtime and wake time moved by `delta_minutes`, as `HH:MM` strings.
    pub fn shifted(&self, delta_minutes: i64) -> (String, String) {
        (
            minutes_to_time(self.bedtime_minutes() + delta_minutes),
            minutes_to_time(self.wake_minutes() + delta_minutes),
        )
    }
}

/// Parse a 24-hour `HH:MM` (or `HH:MM:SS`) time of day into minutes past midnight.
///
/// # Errors
///
/// Returns [`PlannerError::InvalidTime`] if the string is not a valid time.
pub fn parse_time_to_minutes(time: &str) -> Result<i64, PlannerError> {
    parse_time_of_day(time).map(minutes_of_day)
}

/// Format minutes as an `HH:MM` clock time, wrapping modulo 24 hours.
///
/// Negative values and values past midnight wrap around, so adding
/// [`MINUTES_PER_DAY`] never changes the result.
///
/// ```
/// use jetlag_engine::schedule::minutes_to_time;
///
/// assert_eq!(minutes_to_time(23 * 60 + 30), "23:30");
/// assert_eq!(minutes_to_time(-60), "23:00");
/// assert_eq!(minutes_to_time(25 * 60), "01:00");
/// ```
pub fn minutes_to_time(minutes: i64) -> String {
    let wrapped = minutes.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", wrapped / 60, wrapped % 60)
}

fn parse_time_of_day(s: &str) -> Result<NaiveTime, PlannerError> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|e| PlannerError::InvalidTime(format!("'{}': {}", s, e)))
}

fn minutes_of_day(t: NaiveTime) -> i64 {
    i64::from(t.hour()) * 60 + i64::from(t.minute())
}
