//! Planner configuration.

use serde::Deserialize;

use crate::error::PlannerError;

/// Tunables for [`calculate_jet_lag_with_options`](crate::planner::calculate_jet_lag_with_options).
///
/// Every field has a default, so a partial JSON document such as
/// `{"max_adjustment_days": 3}` is a complete configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerOptions {
    /// Largest bedtime change per day when flying east, in hours.
    pub east_max_shift_per_day: f64,
    /// Largest bedtime change per day when flying west, in hours.
    pub west_max_shift_per_day: f64,
    /// Upper bound on the pre-departure adjustment window.
    pub max_adjustment_days: u32,
    /// Whether the informal commentary is attached to results.
    pub include_remarks: bool,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            east_max_shift_per_day: 1.0,
            west_max_shift_per_day: 1.5,
            max_adjustment_days: 5,
            include_remarks: true,
        }
    }
}

impl PlannerOptions {
    /// Load options from JSON, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::InvalidOptions`] if the JSON is malformed or
    /// a value is out of range.
    pub fn from_json(json: &str) -> Result<Self, PlannerError> {
        let options: Self = serde_json::from_str(json)
            .map_err(|e| PlannerError::InvalidOptions(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Check that per-day limits are positive and the window is at least a day.
    pub fn validate(&self) -> Result<(), PlannerError> {
        for (name, value) in [
            ("east_max_shift_per_day", self.east_max_shift_per_day),
            ("west_max_shift_per_day", self.west_max_shift_per_day),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(PlannerError::InvalidOptions(format!(
                    "{name} must be a positive number of hours, got {value}"
                )));
            }
        }
        if self.max_adjustment_days == 0 {
            return Err(PlannerError::InvalidOptions(
                "max_adjustment_days must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
