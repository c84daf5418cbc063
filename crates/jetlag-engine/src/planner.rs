//! Jet-lag plan computation.
//!
//! [`calculate_jet_lag`] runs the whole pipeline: parse both timestamps,
//! derive duration and shift, reject implausible flights, then build the
//! severity estimate, light advice, pre-travel schedule and in-flight
//! strategy. Implausible flights are returned as [`JetLagOutcome::Invalid`]
//! rather than as errors, so callers branch on the variant instead of
//! checking flags.

use serde::Serialize;

use crate::adjustment::{adjustment_window, pre_travel_plan, AdjustmentWindow};
use crate::commentary::Remark;
use crate::error::PlannerError;
use crate::flight::{
    derive_flight, validate_flight, Direction, FlightCategory, FlightCheck, InvalidReason,
};
use crate::inflight::in_flight_plan;
use crate::light::light_exposure_advice;
use crate::options::PlannerOptions;
use crate::schedule::SleepSchedule;
use crate::severity::{estimate_severity, Severity};

/// Nightly sleep above this many hours is flagged.
const EXCESSIVE_SLEEP_HOURS: f64 = 12.0;

/// A flight rejected by validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvalidFlight {
    pub reason: InvalidReason,
    /// Elapsed hours as computed from the input (may be negative).
    pub flight_duration_hours: f64,
    /// Human-readable messages for the traveler.
    pub messages: Vec<String>,
}

/// A complete plan for a plausible flight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JetLagPlan {
    /// Arrival offset minus departure offset, in hours.
    pub hours_shifted: f64,
    pub direction: Direction,
    pub flight_duration_hours: f64,
    pub category: FlightCategory,
    pub sleep_duration_hours: f64,
    /// Whether the habitual night is longer than 12 hours.
    pub excessive_sleep: bool,
    pub severity: Severity,
    pub recovery_days: u32,
    /// `None` when the shift is small enough to skip pre-adjustment.
    pub adjustment: Option<AdjustmentWindow>,
    pub plan: Vec<String>,
    pub flight_sleep_plan: Vec<String>,
    pub light_exposure_advice: Vec<String>,
    pub remarks: Vec<String>,
}

/// Result of [`calculate_jet_lag`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum JetLagOutcome {
    Invalid(InvalidFlight),
    Valid(JetLagPlan),
}

impl JetLagOutcome {
    pub fn as_plan(&self) -> Option<&JetLagPlan> {
        match self {
            JetLagOutcome::Valid(plan) => Some(plan),
            JetLagOutcome::Invalid(_) => None,
        }
    }

    pub fn invalid_reason(&self) -> Option<InvalidReason> {
        match self {
            JetLagOutcome::Invalid(invalid) => Some(invalid.reason),
            JetLagOutcome::Valid(_) => None,
        }
    }

    pub fn is_impossible_flight(&self) -> bool {
        matches!(self, JetLagOutcome::Invalid(_))
    }

    /// Rejected flights and valid flights in the long category.
    pub fn is_flight_too_long(&self) -> bool {
        match self {
            JetLagOutcome::Invalid(_) => true,
            JetLagOutcome::Valid(plan) => plan.category == FlightCategory::Long,
        }
    }

    /// Signed shift, or `0.0` for a rejected flight.
    pub fn hours_shifted(&self) -> f64 {
        self.as_plan().map_or(0.0, |p| p.hours_shifted)
    }

    /// Direction of travel, or [`Direction::None`] for a rejected flight.
    pub fn direction(&self) -> Direction {
        self.as_plan().map_or(Direction::None, |p| p.direction)
    }

    pub fn flight_duration_hours(&self) -> f64 {
        match self {
            JetLagOutcome::Invalid(invalid) => invalid.flight_duration_hours,
            JetLagOutcome::Valid(plan) => plan.flight_duration_hours,
        }
    }

    pub fn severity(&self) -> Severity {
        self.as_plan().map_or(Severity::None, |p| p.severity)
    }

    pub fn recovery_days(&self) -> u32 {
        self.as_plan().map_or(0, |p| p.recovery_days)
    }

    /// Pre-travel plan lines; empty for a rejected flight.
    pub fn plan(&self) -> &[String] {
        match self {
            JetLagOutcome::Valid(plan) => &plan.plan,
            JetLagOutcome::Invalid(_) => &[],
        }
    }

    /// In-flight plan lines; empty for a rejected flight.
    pub fn flight_sleep_plan(&self) -> &[String] {
        match self {
            JetLagOutcome::Valid(plan) => &plan.flight_sleep_plan,
            JetLagOutcome::Invalid(_) => &[],
        }
    }

    pub fn light_exposure_advice(&self) -> &[String] {
        match self {
            JetLagOutcome::Valid(plan) => &plan.light_exposure_advice,
            JetLagOutcome::Invalid(_) => &[],
        }
    }

    /// Remarks for a valid plan, or the rejection messages.
    pub fn remarks(&self) -> &[String] {
        match self {
            JetLagOutcome::Invalid(invalid) => &invalid.messages,
            JetLagOutcome::Valid(plan) => &plan.remarks,
        }
    }
}

/// Compute a jet-lag plan with default options.
///
/// See [`calculate_jet_lag_with_options`].
///
/// # Examples
///
/// ```
/// use jetlag_engine::{calculate_jet_lag, Direction, Severity, SleepSchedule};
///
/// let sleep = SleepSchedule::parse("23:00", "07:00").unwrap();
/// let outcome = calculate_jet_lag(
///     "2025-08-10T14:00:00+00:00",
///     "2025-08-11T09:00:00+09:00",
///     &sleep,
/// )
/// .unwrap();
///
/// assert_eq!(outcome.direction(), Direction::East);
/// assert_eq!(outcome.hours_shifted(), 9.0);
/// assert_eq!(outcome.flight_duration_hours(), 10.0);
/// assert_eq!(outcome.severity(), Severity::Severe);
/// assert_eq!(outcome.recovery_days(), 9);
/// ```
pub fn calculate_jet_lag(
    departure: &str,
    arrival: &str,
    sleep: &SleepSchedule,
) -> Result<JetLagOutcome, PlannerError> {
    calculate_jet_lag_with_options(departure, arrival, sleep, &PlannerOptions::default())
}

/// Compute a jet-lag plan.
///
/// # Arguments
///
/// * `departure` — departure datetime with trailing offset (e.g. `"2025-08-10T14:00:00+00:00"`)
/// * `arrival` — arrival datetime with trailing offset
/// * `sleep` — the traveler's habitual schedule
/// * `options` — per-day shift limits, window cap, remark toggle
///
/// # Errors
///
/// Returns [`PlannerError::InvalidDatetime`] if a timestamp cannot be parsed
/// and [`PlannerError::InvalidOptions`] if `options` fail validation. A
/// timestamp without an offset is not an error; it counts as `+00:00`.
pub fn calculate_jet_lag_with_options(
    departure: &str,
    arrival: &str,
    sleep: &SleepSchedule,
    options: &PlannerOptions,
) -> Result<JetLagOutcome, PlannerError> {
    options.validate()?;

    let metrics = derive_flight(departure, arrival)?;
    let duration = metrics.duration_hours;
    let hours_shifted = metrics.hours_shifted;
    let direction = metrics.direction;

    let category = match validate_flight(duration, metrics.abs_shift()) {
        FlightCheck::Valid(category) => category,
        FlightCheck::Invalid(reason) => {
            tracing::info!(
                reason = %reason,
                duration_hours = duration,
                hours_shifted,
                "rejected implausible flight"
            );
            let messages = if options.include_remarks {
                Remark::from(reason).lines()
            } else {
                vec![reason.description().to_string()]
            };
            return Ok(JetLagOutcome::Invalid(InvalidFlight {
                reason,
                flight_duration_hours: duration,
                messages,
            }));
        }
    };

    let sleep_duration_hours = sleep.duration_hours();
    let excessive_sleep = sleep_duration_hours > EXCESSIVE_SLEEP_HOURS;

    let mut remarks = Vec::new();
    if options.include_remarks {
        if excessive_sleep {
            remarks.extend(
                Remark::ExcessiveSleep {
                    hours: sleep_duration_hours,
                }
                .lines(),
            );
        }
        if category == FlightCategory::Long {
            remarks.extend(Remark::UltraLongHaul.lines());
        }
    }

    let estimate = estimate_severity(hours_shifted);

    tracing::debug!(
        hours_shifted,
        duration_hours = duration,
        direction = %direction,
        severity = ?estimate.severity,
        recovery_days = estimate.recovery_days,
        "computed jet lag plan"
    );

    Ok(JetLagOutcome::Valid(JetLagPlan {
        hours_shifted,
        direction,
        flight_duration_hours: duration,
        category,
        sleep_duration_hours,
        excessive_sleep,
        severity: estimate.severity,
        recovery_days: estimate.recovery_days,
        adjustment: adjustment_window(direction, hours_shifted, options),
        plan: pre_travel_plan(direction, hours_shifted, sleep, options),
        flight_sleep_plan: in_flight_plan(direction, hours_shifted, duration),
        light_exposure_advice: light_exposure_advice(direction, hours_shifted),
        remarks,
    }))
}
