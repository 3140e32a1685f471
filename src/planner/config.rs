use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::planner::constants::*;

/// What to do when a day cannot be filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Greedy pass over shuffled candidates; unfillable days become sentinel slots.
    #[default]
    Degrade,

    /// Rejection sampling per day; an unfillable day discards the whole
    /// schedule and starts over, up to `schedule_attempts` times.
    Retry,
}

impl FailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailurePolicy::Degrade => "degrade",
            FailurePolicy::Retry => "retry",
        }
    }
}

/// Tunable planner settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub min_calories: i32,
    pub max_calories: i32,
    pub policy: FailurePolicy,
    pub slot_attempts: usize,
    pub schedule_attempts: usize,
    /// If set, a combo's average popularity must be within this distance of
    /// the previous populated day's average.
    pub neighbor_tolerance: Option<f64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            min_calories: MIN_COMBO_CALORIES,
            max_calories: MAX_COMBO_CALORIES,
            policy: FailurePolicy::default(),
            slot_attempts: DEFAULT_SLOT_ATTEMPTS,
            schedule_attempts: DEFAULT_SCHEDULE_ATTEMPTS,
            neighbor_tolerance: None,
        }
    }
}

impl PlannerConfig {
    /// Settings of the date-labeled desktop flow: retry policy with the
    /// sequential popularity rule switched on.
    pub fn desktop() -> Self {
        Self {
            policy: FailurePolicy::Retry,
            neighbor_tolerance: Some(DESKTOP_NEIGHBOR_TOLERANCE),
            ..Default::default()
        }
    }

    /// Is `calories` inside the inclusive band?
    #[inline]
    pub fn calories_in_band(&self, calories: i32) -> bool {
        (self.min_calories..=self.max_calories).contains(&calories)
    }

    /// Does `avg` sit close enough to the previous day's average?
    pub fn neighbor_ok(&self, previous: Option<f64>, avg: f64) -> bool {
        match (self.neighbor_tolerance, previous) {
            // Small epsilon so 0.8 vs 0.7 with tolerance 0.1 is not lost to float error
            (Some(tol), Some(prev)) => (avg - prev).abs() <= tol + 1e-9,
            _ => true,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_calories > self.max_calories {
            return Err(PlannerError::InvalidInput(format!(
                "calorie band is inverted: {} > {}",
                self.min_calories, self.max_calories
            )));
        }
        if self.slot_attempts == 0 || self.schedule_attempts == 0 {
            return Err(PlannerError::InvalidInput(
                "attempt caps must be at least 1".to_string(),
            ));
        }
        if let Some(tol) = self.neighbor_tolerance {
            if !tol.is_finite() || tol < 0.0 {
                return Err(PlannerError::InvalidInput(format!(
                    "neighbor tolerance must be a non-negative number, got {}",
                    tol
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_band_inclusive() {
        let config = PlannerConfig::default();
        assert!(config.calories_in_band(500));
        assert!(config.calories_in_band(800));
        assert!(!config.calories_in_band(499));
        assert!(!config.calories_in_band(801));
        assert_eq!(config.policy, FailurePolicy::Degrade);
    }

    #[test]
    fn test_neighbor_ok() {
        let config = PlannerConfig::default();
        assert!(config.neighbor_ok(Some(0.6), 0.9));

        let desktop = PlannerConfig::desktop();
        assert!(desktop.neighbor_ok(None, 0.9));
        assert!(desktop.neighbor_ok(Some(0.8), 0.7));
        assert!(!desktop.neighbor_ok(Some(0.8), 0.65));
    }

    #[test]
    fn test_validate() {
        assert!(PlannerConfig::default().validate().is_ok());

        let inverted = PlannerConfig {
            min_calories: 900,
            ..Default::default()
        };
        assert!(inverted.validate().is_err());

        let no_attempts = PlannerConfig {
            slot_attempts: 0,
            ..Default::default()
        };
        assert!(no_attempts.validate().is_err());

        let negative = PlannerConfig {
            neighbor_tolerance: Some(-0.1),
            ..Default::default()
        };
        assert!(negative.validate().is_err());
    }
}
