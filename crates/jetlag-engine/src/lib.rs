//! # jetlag-engine
//!
//! Deterministic jet-lag planning from a flight and a sleep schedule.
//!
//! Given departure and arrival timestamps with UTC offsets plus a habitual
//! bedtime and wake time, the engine validates the flight, estimates how
//! hard the adjustment will be, and produces a pre-travel sleep shift
//! schedule, in-flight sleep strategy and light-exposure advice. Plans can
//! be exported as iCalendar reminders.
//!
//! ## Modules
//!
//! - [`planner`] — the end-to-end computation and its tagged result
//! - [`flight`] — duration, shift, direction and plausibility checks
//! - [`severity`] — severity tier and recovery estimate
//! - [`adjustment`] — pre-travel adjustment window and daily schedule
//! - [`inflight`] — in-flight sleep strategy
//! - [`light`] — light-exposure advice
//! - [`commentary`] — informal remarks for unusual inputs
//! - [`calendar`] — iCalendar export
//! - [`presets`] — fixed-offset timezone presets for input forms
//! - [`offset`] — timestamp and UTC offset parsing
//! - [`schedule`] — sleep schedule and clock arithmetic
//! - [`options`] — planner configuration
//! - [`error`] — Error types

pub mod adjustment;
pub mod calendar;
pub mod commentary;
pub mod error;
pub mod flight;
mod format;
pub mod inflight;
pub mod light;
pub mod offset;
pub mod options;
pub mod planner;
pub mod presets;
pub mod schedule;
pub mod severity;

pub use calendar::{
    build_calendar_events, default_export_filename, export_calendar, export_calendar_with_options,
    CalendarEvent, CalendarOptions, CALENDAR_CONTENT_TYPE,
};
pub use error::PlannerError;
pub use flight::{Direction, FlightCategory, InvalidReason};
pub use offset::TimePoint;
pub use options::PlannerOptions;
pub use planner::{
    calculate_jet_lag, calculate_jet_lag_with_options, InvalidFlight, JetLagOutcome, JetLagPlan,
};
pub use presets::{compose_datetime, find_preset, TimezonePreset, TIMEZONE_PRESETS};
pub use schedule::SleepSchedule;
pub use severity::Severity;
