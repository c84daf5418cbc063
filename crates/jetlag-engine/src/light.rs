//! Light-exposure advice for the first days at the destination.

use crate::flight::Direction;

/// Shifts above this many hours warrant a light-therapy suggestion.
const LIGHT_THERAPY_THRESHOLD_HOURS: f64 = 6.0;

/// Build light-exposure advice for a trip.
///
/// Shifts of two hours or less get a single minimal-impact line. Larger
/// shifts get direction-specific advice: eastward travelers chase morning
/// light, westward travelers chase evening light.
pub fn light_exposure_advice(direction: Direction, hours_shifted: f64) -> Vec<String> {
    let abs = hours_shifted.abs();
    if abs <= 2.0 {
        return vec!["💡 Minimal jet lag expected - maintain normal light exposure".to_string()];
    }

    let (lines, therapy): (&[&str], &str) = match direction {
        Direction::East => (
            &[
                "🌅 Eastward travel: Get morning light at destination",
                "🕶️ Avoid evening light for first 2-3 days",
                "☀️ Seek bright light 30 min after waking up",
            ],
            "💡 Consider light therapy device (10,000 lux) for 30 minutes in morning",
        ),
        Direction::West => (
            &[
                "🌆 Westward travel: Get evening light at destination",
                "🕶️ Avoid morning light for first 2-3 days",
                "🌙 Stay up later and get light exposure in evening",
            ],
            "💡 Consider light therapy in late afternoon/early evening",
        ),
        Direction::None => return Vec::new(),
    };

    let mut advice: Vec<String> = lines.iter().map(|s| s.to_string()).collect();
    if abs > LIGHT_THERAPY_THRESHOLD_HOURS {
        advice.push(therapy.to_string());
    }
    advice
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_shift_single_line() {
        let advice = light_exposure_advice(Direction::East, 2.0);
        assert_eq!(advice.len(), 1);
        assert!(advice[0].contains("Minimal jet lag"));
    }

    #[test]
    fn test_no_shift_single_line() {
        assert_eq!(light_exposure_advice(Direction::None, 0.0).len(), 1);
    }

    #[test]
    fn test_east_moderate() {
        let advice = light_exposure_advice(Direction::East, 5.0);
        assert_eq!(advice.len(), 3);
        assert!(advice[0].contains("morning light"));
        assert!(advice[1].contains("Avoid evening light"));
    }

    #[test]
    fn test_east_large_adds_therapy() {
        let advice = light_exposure_advice(Direction::East, 9.0);
        assert_eq!(advice.len(), 4);
        assert!(advice[3].contains("10,000 lux"));
    }

    #[test]
    fn test_west_large_adds_evening_therapy() {
        let advice = light_exposure_advice(Direction::West, -8.0);
        assert_eq!(advice.len(), 4);
        assert!(advice[0].contains("evening light"));
        assert!(advice[3].contains("late afternoon"));
    }

    #[test]
    fn test_therapy_threshold_is_exclusive() {
        assert_eq!(light_exposure_advice(Direction::West, -6.0).len(), 3);
    }
}
