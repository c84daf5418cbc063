//! Jet-lag severity buckets and recovery estimates.

use serde::Serialize;

/// Coarse jet-lag severity derived from the shift magnitude alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    None,
    Mild,
    Moderate,
    Severe,
}

/// A severity bucket and the days it usually takes to re-synchronize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SeverityEstimate {
    pub severity: Severity,
    pub recovery_days: u32,
}

/// Classify a timezone shift.
///
/// | \|shift\| | severity | recovery days |
/// |---|---|---|
/// | ≤ 2 | none | 0 |
/// | ≤ 4 | mild | ⌈shift × 0.5⌉ |
/// | ≤ 8 | moderate | ⌈shift × 0.75⌉ |
/// | > 8 | severe | ⌈shift⌉ |
///
/// ```
/// use jetlag_engine::severity::{estimate_severity, Severity};
///
/// let e = estimate_severity(-5.0);
/// assert_eq!(e.severity, Severity::Moderate);
/// assert_eq!(e.recovery_days, 4);
/// ```
pub fn estimate_severity(hours_shifted: f64) -> SeverityEstimate {
    let abs = hours_shifted.abs();
    if abs <= 2.0 {
        return SeverityEstimate::default();
    }

    let (severity, days_per_hour) = if abs <= 4.0 {
        (Severity::Mild, 0.5)
    } else if abs <= 8.0 {
        (Severity::Moderate, 0.75)
    } else {
        (Severity::Severe, 1.0)
    };

    SeverityEstimate {
        severity,
        recovery_days: (abs * days_per_hour).ceil() as u32,
    }
}
