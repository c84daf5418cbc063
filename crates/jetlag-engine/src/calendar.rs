//! iCalendar (RFC 5545) export of a jet-lag plan.
//!
//! The export holds two days of bedtime and wake-up reminders before
//! departure (skipped when there is no timezone change) and a travel-day
//! reminder carrying the in-flight strategy. It is write-only: nothing in
//! this crate parses calendars back.
//!
//! The generation instant is an argument rather than a clock read, so
//! exports are reproducible in tests.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Offset, TimeZone, Utc};
use serde::Serialize;

use crate::error::PlannerError;
use crate::flight::Direction;
use crate::planner::JetLagOutcome;
use crate::schedule::{SleepSchedule, MINUTES_PER_DAY};

/// MIME type for the exported text.
pub const CALENDAR_CONTENT_TYPE: &str = "text/calendar;charset=utf-8";

const PRODID: &str = "-//Jet Lag Calculator//EN";
const UID_DOMAIN: &str = "jetlag-calculator.com";
/// Reminder days before departure; day `i` is `PREP_DAYS + 1 - i` days out.
const PREP_DAYS: i64 = 2;
const PREP_SHIFT_MINUTES_PER_DAY: i64 = 60;
const REMINDER_MINUTES: i64 = 15;
const TRAVEL_REMINDER_MINUTES_OF_DAY: i64 = 8 * 60;
const TRAVEL_REMINDER_MINUTES: i64 = 30;
/// Maximum octets per content line before folding.
const FOLD_LIMIT: usize = 75;

/// Export settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarOptions {
    /// Offset in which reminder wall-clock times are read.
    pub local_offset: FixedOffset,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            local_offset: Utc.fix(),
        }
    }
}

/// One calendar reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    pub uid: String,
    pub summary: String,
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl CalendarEvent {
    /// Render as a `VEVENT` block, CRLF-separated, without a trailing CRLF.
    pub fn to_ics(&self, stamp: DateTime<Utc>) -> String {
        [
            "BEGIN:VEVENT".to_string(),
            format!("DTSTART:{}", format_ics_utc(self.start)),
            format!("DTEND:{}", format_ics_utc(self.end)),
            format!("SUMMARY:{}", escape_text(&self.summary)),
            format!("DESCRIPTION:{}", escape_text(&self.description)),
            format!("UID:{}", self.uid),
            format!("DTSTAMP:{}", format_ics_utc(stamp)),
            "END:VEVENT".to_string(),
        ]
        .iter()
        .map(|line| fold_line(line))
        .collect::<Vec<_>>()
        .join("\r\n")
    }
}

/// Build the reminder events for a plan.
///
/// # Arguments
///
/// * `outcome` — a computed plan; only its direction and in-flight plan are used
/// * `base_date` — departure date as `YYYY-MM-DD`
/// * `sleep` — the habitual schedule the reminders shift from
/// * `generated_at` — generation instant, embedded in every UID
/// * `options` — offset for reading wall-clock times
///
/// # Errors
///
/// Returns [`PlannerError::InvalidDate`] if `base_date` cannot be parsed or
/// a reminder falls outside the representable date range.
pub fn build_calendar_events(
    outcome: &JetLagOutcome,
    base_date: &str,
    sleep: &SleepSchedule,
    generated_at: DateTime<Utc>,
    options: &CalendarOptions,
) -> Result<Vec<CalendarEvent>, PlannerError> {
    let base = parse_base_date(base_date)?;
    let millis = generated_at.timestamp_millis();
    let offset = options.local_offset;
    let direction = outcome.direction();
    let mut events = Vec::new();

    if direction != Direction::None {
        for i in 1..=PREP_DAYS {
            let day = add_days(base, -(PREP_DAYS + 1 - i))?;
            let delta = direction.clock_sign() * PREP_SHIFT_MINUTES_PER_DAY * i;
            let (bedtime, wake_time) = sleep.shifted(delta);

            let sleep_start = local_instant(day, sleep.bedtime_minutes() + delta, offset)?;
            events.push(CalendarEvent {
                uid: format!("jetlag-sleep-day{i}-{millis}@{UID_DOMAIN}"),
                summary: format!("💤 Jet Lag Prep - Day {i} Bedtime"),
                description: format!(
                    "Go to sleep at {bedtime} to prepare for your trip. This is {i} hour{} {} than usual.",
                    if i == 1 { "" } else { "s" },
                    if direction == Direction::East { "earlier" } else { "later" },
                ),
                start: sleep_start,
                end: sleep_start + Duration::minutes(REMINDER_MINUTES),
            });

            let wake_start =
                local_instant(add_days(day, 1)?, sleep.wake_minutes() + delta, offset)?;
            events.push(CalendarEvent {
                uid: format!("jetlag-wake-day{i}-{millis}@{UID_DOMAIN}"),
                summary: format!("☀️ Jet Lag Prep - Day {i} Wake Up"),
                description: format!(
                    "Wake up at {wake_time} to prepare for your trip. Get bright light exposure immediately after waking."
                ),
                start: wake_start,
                end: wake_start + Duration::minutes(REMINDER_MINUTES),
            });
        }
    }

    let travel_start = local_instant(base, TRAVEL_REMINDER_MINUTES_OF_DAY, offset)?;
    let flight_plan = outcome.flight_sleep_plan();
    let description = if flight_plan.is_empty() {
        "Today is your travel day!".to_string()
    } else {
        format!(
            "Today is your travel day! Follow your flight sleep strategy:\n• {}",
            flight_plan.join("\n• ")
        )
    };
    events.push(CalendarEvent {
        uid: format!("jetlag-travel-day-{millis}@{UID_DOMAIN}"),
        summary: "✈️ Travel Day - Jet Lag Strategy".to_string(),
        description,
        start: travel_start,
        end: travel_start + Duration::minutes(TRAVEL_REMINDER_MINUTES),
    });

    Ok(events)
}

/// Export a plan as iCalendar text with wall-clock times read as UTC.
///
/// See [`export_calendar_with_options`].
pub fn export_calendar(
    outcome: &JetLagOutcome,
    base_date: &str,
    sleep: &SleepSchedule,
    generated_at: DateTime<Utc>,
) -> Result<String, PlannerError> {
    export_calendar_with_options(
        outcome,
        base_date,
        sleep,
        generated_at,
        &CalendarOptions::default(),
    )
}

/// Export a plan as a complete `VCALENDAR` document.
///
/// # Errors
///
/// Same as [`build_calendar_events`].
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use jetlag_engine::{calculate_jet_lag, export_calendar, SleepSchedule};
///
/// let sleep = SleepSchedule::parse("23:00", "07:00").unwrap();
/// let outcome = calculate_jet_lag(
///     "2025-08-10T14:00:00+00:00",
///     "2025-08-11T09:00:00+09:00",
///     &sleep,
/// )
/// .unwrap();
/// let now = Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap();
///
/// let ics = export_calendar(&outcome, "2025-08-10", &sleep, now).unwrap();
/// assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
/// assert_eq!(ics.matches("BEGIN:VEVENT").count(), 5);
/// ```
pub fn export_calendar_with_options(
    outcome: &JetLagOutcome,
    base_date: &str,
    sleep: &SleepSchedule,
    generated_at: DateTime<Utc>,
    options: &CalendarOptions,
) -> Result<String, PlannerError> {
    let events = build_calendar_events(outcome, base_date, sleep, generated_at, options)?;
    tracing::debug!(events = events.len(), base_date, "exporting calendar");

    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{PRODID}"),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
    ];
    lines.extend(events.iter().map(|event| event.to_ics(generated_at)));
    lines.push("END:VCALENDAR".to_string());

    Ok(lines.join("\r\n"))
}

/// Suggested download name for an export.
pub fn default_export_filename(base_date: &str) -> String {
    format!("jetlag-plan-{}.ics", base_date.trim())
}

// ── Internal helpers ────────────────────────────────────────────────────────

fn parse_base_date(s: &str) -> Result<NaiveDate, PlannerError> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| PlannerError::InvalidDate(format!("'{}': {}", s, e)))
}

fn add_days(date: NaiveDate, days: i64) -> Result<NaiveDate, PlannerError> {
    date.checked_add_signed(Duration::days(days))
        .ok_or_else(|| PlannerError::InvalidDate(format!("{date} {days:+} days is out of range")))
}

/// The instant `minutes` after midnight of `date` at `offset`.
///
/// Minutes outside one day carry into the neighbouring date, so a bedtime
/// pushed past midnight lands on the following calendar day.
fn local_instant(
    date: NaiveDate,
    minutes: i64,
    offset: FixedOffset,
) -> Result<DateTime<Utc>, PlannerError> {
    let date = add_days(date, minutes.div_euclid(MINUTES_PER_DAY))?;
    let minutes = minutes.rem_euclid(MINUTES_PER_DAY);
    date.and_hms_opt((minutes / 60) as u32, (minutes % 60) as u32, 0)
        .and_then(|naive| offset.from_local_datetime(&naive).single())
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| PlannerError::InvalidDate(format!("no instant for {date} at {offset}")))
}

/// Compact UTC form, e.g. `20250810T080000Z`.
fn format_ics_utc(dt: DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Escape a TEXT property value.
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(ch),
        }
    }
    out
}

/// Fold a content line at [`FOLD_LIMIT`] octets without splitting a character.
fn fold_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + line.len() / FOLD_LIMIT * 3);
    let mut width = 0;
    for ch in line.chars() {
        let len = ch.len_utf8();
        if width + len > FOLD_LIMIT {
            out.push_str("\r\n ");
            // the leading space counts toward the next line
            width = 1;
        }
        out.push(ch);
        width += len;
    }
    out
}
