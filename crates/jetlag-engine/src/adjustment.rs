//! Pre-departure sleep adjustment.
//!
//! Bedtime and wake time move a little each day before departure so the
//! body clock is partly shifted by the time the traveler lands. Eastward
//! trips move the clock earlier at up to an hour a day; westward trips move
//! it later at up to an hour and a half, since delaying sleep is easier
//! than advancing it.

use serde::Serialize;

use crate::flight::Direction;
use crate::format::one_decimal;
use crate::options::PlannerOptions;
use crate::schedule::SleepSchedule;

/// Shifts at or below this need no pre-adjustment.
const NO_ADJUSTMENT_MAX_HOURS: f64 = 2.0;
/// Above this, melatonin and stimulant guidance is added.
const MELATONIN_THRESHOLD_HOURS: f64 = 6.0;
/// Eastward shifts above this get the morning-light and darkness warnings.
const EAST_CRITICAL_THRESHOLD_HOURS: f64 = 4.0;

/// How many days to spread the shift over, and how much per day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdjustmentWindow {
    pub days: u32,
    pub shift_per_day_hours: f64,
}

/// One day of the pre-departure schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjustmentDay {
    pub day: u32,
    pub bedtime: String,
    pub wake_time: String,
}

/// Size the adjustment window for a shift, or `None` when no adjustment is needed.
///
/// Days needed is `⌈|shift| / max per day⌉`, capped at
/// [`PlannerOptions::max_adjustment_days`]; the shift is then spread evenly
/// over the days actually used.
///
/// ```
/// use jetlag_engine::adjustment::adjustment_window;
/// use jetlag_engine::flight::Direction;
/// use jetlag_engine::options::PlannerOptions;
///
/// let w = adjustment_window(Direction::East, 20.0, &PlannerOptions::default()).unwrap();
/// assert_eq!(w.days, 5);
/// assert_eq!(w.shift_per_day_hours, 4.0);
/// ```
pub fn adjustment_window(
    direction: Direction,
    hours_shifted: f64,
    options: &PlannerOptions,
) -> Option<AdjustmentWindow> {
    let abs = hours_shifted.abs();
    if abs <= NO_ADJUSTMENT_MAX_HOURS {
        return None;
    }

    let max_per_day = match direction {
        Direction::East => options.east_max_shift_per_day,
        Direction::West => options.west_max_shift_per_day,
        Direction::None => return None,
    };

    let days_needed = (abs / max_per_day).ceil() as u32;
    let days = days_needed.clamp(1, options.max_adjustment_days.max(1));

    Some(AdjustmentWindow {
        days,
        shift_per_day_hours: abs / f64::from(days),
    })
}

/// Day-by-day bedtime and wake time over the window.
///
/// Day `n` moves both times by `n × shift_per_day`, earlier for east and
/// later for west, rounded to the nearest minute on a 24-hour clock.
pub fn adjustment_days(
    window: AdjustmentWindow,
    direction: Direction,
    sleep: &SleepSchedule,
) -> Vec<AdjustmentDay> {
    (1..=window.days)
        .map(|day| {
            let cumulative = f64::from(day) * window.shift_per_day_hours * 60.0;
            let delta = direction.clock_sign() * cumulative.round() as i64;
            let (bedtime, wake_time) = sleep.shifted(delta);
            AdjustmentDay {
                day,
                bedtime,
                wake_time,
            }
        })
        .collect()
}

/// Build the pre-travel sleep plan as display lines.
pub fn pre_travel_plan(
    direction: Direction,
    hours_shifted: f64,
    sleep: &SleepSchedule,
    options: &PlannerOptions,
) -> Vec<String> {
    let abs = hours_shifted.abs();
    let Some(window) = adjustment_window(direction, hours_shifted, options) else {
        return vec![
            "✅ Minor timezone change - no pre-adjustment needed".to_string(),
            "🛏️ Maintain your normal sleep schedule".to_string(),
        ];
    };

    let mut plan = vec![
        format!(
            "🎯 {} travel across {} time zones",
            direction.as_str().to_uppercase(),
            abs
        ),
        format!("📅 Start adjusting {} days before departure", window.days),
        format!(
            "⏰ Shift {} hours per day ({})",
            one_decimal(window.shift_per_day_hours),
            if direction == Direction::East {
                "earlier"
            } else {
                "later"
            }
        ),
    ];

    plan.extend(
        adjustment_days(window, direction, sleep)
            .into_iter()
            .map(|d| format!("Day {}: Sleep {} → Wake {}", d.day, d.bedtime, d.wake_time)),
    );

    if abs > MELATONIN_THRESHOLD_HOURS {
        plan.push(
            "💊 Consider consulting doctor about melatonin (0.5-3mg, 30min before new bedtime)"
                .to_string(),
        );
        plan.push(
            "🚫 Avoid alcohol and caffeine 6+ hours before sleep during adjustment".to_string(),
        );
    }

    if direction == Direction::East && abs > EAST_CRITICAL_THRESHOLD_HOURS {
        plan.push(
            "🌅 CRITICAL: Get bright light immediately upon waking at destination".to_string(),
        );
        plan.push(
            "😴 Use blackout curtains/eye mask - darkness is crucial for eastward travel"
                .to_string(),
        );
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sleep() -> SleepSchedule {
        SleepSchedule::parse("23:00", "07:00").unwrap()
    }

    // ── adjustment_window tests ─────────────────────────────────────────

    #[test]
    fn test_window_none_for_small_shift() {
        assert!(adjustment_window(Direction::East, 2.0, &PlannerOptions::default()).is_none());
        assert!(adjustment_window(Direction::West, -1.0, &PlannerOptions::default()).is_none());
    }

    #[test]
    fn test_window_east_one_hour_per_day() {
        let w = adjustment_window(Direction::East, 3.0, &PlannerOptions::default()).unwrap();
        assert_eq!(w.days, 3);
        assert_eq!(w.shift_per_day_hours, 1.0);
    }

    #[test]
    fn test_window_west_ninety_minutes_per_day() {
        let w = adjustment_window(Direction::West, -6.0, &PlannerOptions::default()).unwrap();
        assert_eq!(w.days, 4);
        assert_eq!(w.shift_per_day_hours, 1.5);
    }

    #[test]
    fn test_window_capped() {
        let w = adjustment_window(Direction::East, 9.0, &PlannerOptions::default()).unwrap();
        assert_eq!(w.days, 5);
        assert!((w.shift_per_day_hours - 1.8).abs() < 1e-9);
    }

    #[test]
    fn test_window_respects_custom_cap() {
        let options = PlannerOptions {
            max_adjustment_days: 2,
            ..Default::default()
        };
        let w = adjustment_window(Direction::West, -9.0, &options).unwrap();
        assert_eq!(w.days, 2);
        assert_eq!(w.shift_per_day_hours, 4.5);
    }

    // ── adjustment_days tests ───────────────────────────────────────────

    #[test]
    fn test_days_east_move_earlier() {
        let w = adjustment_window(Direction::East, 3.0, &PlannerOptions::default()).unwrap();
        let days = adjustment_days(w, Direction::East, &sleep());
        assert_eq!(days.len(), 3);
        assert_eq!(days[0].bedtime, "22:00");
        assert_eq!(days[0].wake_time, "06:00");
        assert_eq!(days[2].bedtime, "20:00");
        assert_eq!(days[2].wake_time, "04:00");
    }

    #[test]
    fn test_days_west_move_later_across_midnight() {
        let w = adjustment_window(Direction::West, -3.0, &PlannerOptions::default()).unwrap();
        let days = adjustment_days(w, Direction::West, &sleep());
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].bedtime, "00:30");
        assert_eq!(days[0].wake_time, "08:30");
        assert_eq!(days[1].bedtime, "02:00");
    }

    #[test]
    fn test_days_round_to_nearest_minute() {
        // 3.25h east over 4 days: 48.75 minutes per day
        let w = adjustment_window(Direction::East, 3.25, &PlannerOptions::default()).unwrap();
        let days = adjustment_days(w, Direction::East, &sleep());
        assert_eq!(days[0].bedtime, "22:11");
        assert_eq!(days[3].bedtime, "19:45");
    }

    // ── pre_travel_plan tests ───────────────────────────────────────────

    #[test]
    fn test_plan_small_shift_two_lines() {
        let plan = pre_travel_plan(Direction::West, -1.0, &sleep(), &PlannerOptions::default());
        assert_eq!(plan.len(), 2);
        assert!(plan[0].contains("no pre-adjustment needed"));
    }

    #[test]
    fn test_plan_east_nine_hours() {
        let plan = pre_travel_plan(Direction::East, 9.0, &sleep(), &PlannerOptions::default());
        assert_eq!(plan[0], "🎯 EAST travel across 9 time zones");
        assert_eq!(plan[1], "📅 Start adjusting 5 days before departure");
        assert_eq!(plan[2], "⏰ Shift 1.8 hours per day (earlier)");
        assert_eq!(plan[3], "Day 1: Sleep 21:12 → Wake 05:12");
        assert_eq!(plan[7], "Day 5: Sleep 14:00 → Wake 22:00");
        // melatonin + alcohol, then critical light + darkness
        assert_eq!(plan.len(), 12);
        assert!(plan[8].contains("melatonin"));
        assert!(plan[10].contains("CRITICAL"));
    }

    #[test]
    fn test_plan_west_five_hours_has_no_extras() {
        let plan = pre_travel_plan(Direction::West, -5.0, &sleep(), &PlannerOptions::default());
        assert_eq!(plan[0], "🎯 WEST travel across 5 time zones");
        assert_eq!(plan[2], "⏰ Shift 1.3 hours per day (later)");
        // header + 4 days
        assert_eq!(plan.len(), 7);
    }

    #[test]
    fn test_plan_fractional_zone_count() {
        let plan = pre_travel_plan(Direction::East, 5.5, &sleep(), &PlannerOptions::default());
        assert_eq!(plan[0], "🎯 EAST travel across 5.5 time zones");
        // east > 4 adds the critical pair, < 6 skips melatonin
        assert!(plan.last().unwrap().contains("blackout"));
        assert!(!plan.iter().any(|l| l.contains("melatonin")));
    }
}
