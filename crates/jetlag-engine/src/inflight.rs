//! In-flight sleep strategy.

use crate::flight::Direction;
use crate::format::one_decimal;

const SHORT_FLIGHT_MAX_HOURS: f64 = 4.0;
/// Shifts above this get a direction-specific strategy.
const STRATEGY_THRESHOLD_HOURS: f64 = 3.0;
/// Flights above this get timing sub-guidance.
const DETAILED_TIMING_HOURS: f64 = 8.0;
/// Flights above this get circulation advice.
const CIRCULATION_HOURS: f64 = 10.0;

/// Build the in-flight sleep plan as display lines.
///
/// ```
/// use jetlag_engine::flight::Direction;
/// use jetlag_engine::inflight::in_flight_plan;
///
/// let plan = in_flight_plan(Direction::East, 9.0, 10.0);
/// assert_eq!(plan[0], "✈️ Flight duration: 10.0 hours");
/// assert!(plan[1].starts_with("🌅 EASTWARD strategy"));
/// ```
pub fn in_flight_plan(
    direction: Direction,
    hours_shifted: f64,
    duration_hours: f64,
) -> Vec<String> {
    if duration_hours <= SHORT_FLIGHT_MAX_HOURS {
        return vec![
            "✈️ Short flight: Stay awake, hydrate, and prepare for destination timezone".to_string(),
        ];
    }

    let abs = hours_shifted.abs();
    let detailed = duration_hours > DETAILED_TIMING_HOURS;
    let mut plan = vec![format!(
        "✈️ Flight duration: {} hours",
        one_decimal(duration_hours)
    )];

    match direction {
        Direction::East if abs > STRATEGY_THRESHOLD_HOURS => {
            plan.push(
                "🌅 EASTWARD strategy: Sleep early in flight to align with destination".into(),
            );
            if detailed {
                plan.push(
                    "💤 Sleep in first 1/3 of flight, stay awake 3-4 hours before landing".into(),
                );
                plan.push("☀️ This helps you wake up ready for destination morning".into());
            }
            plan.push("🚫 Avoid screens 1 hour before your planned sleep time".into());
        }
        Direction::West if abs > STRATEGY_THRESHOLD_HOURS => {
            plan.push("🌆 WESTWARD strategy: Stay awake longer, sleep in second half".into());
            if detailed {
                plan.push("⏰ Stay awake first 4-6 hours, then sleep before arrival".into());
                plan.push("🌙 This helps extend your day to match destination timezone".into());
            }
        }
        _ if abs <= STRATEGY_THRESHOLD_HOURS => {
            plan.push("😴 Mild timezone change: Sleep according to your normal schedule".into());
            plan.push("💡 Focus on staying comfortable rather than timezone adjustment".into());
        }
        _ => {
            plan.push("🕐 No timezone change: Maintain your regular sleep pattern".into());
        }
    }

    plan.push("🛏️ Essential sleep kit: Eye mask, earplugs, neck pillow, blanket".into());
    plan.push("🚫 Avoid alcohol (dehydrates) and limit caffeine to early flight hours".into());
    plan.push("💧 Hydrate regularly but not too much before planned sleep".into());

    if duration_hours > CIRCULATION_HOURS {
        plan.push("🚶‍♂️ Walk every 2 hours when awake to prevent blood clots".into());
        plan.push("🦵 Do ankle circles and calf stretches during flight".into());
    }

    plan
}
