//! Static widget configuration.

use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Goal the widget starts with
    pub default_daily_goal: u32,
    /// How long the total pulses after the meal list changes
    pub pulse_duration_ms: u32,
    /// How long the goal-reached banner stays up
    pub celebration_duration_ms: u32,
    /// Number of confetti pieces in the celebration overlay
    pub confetti_pieces: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            default_daily_goal: 2000,
            pulse_duration_ms: 500,
            celebration_duration_ms: 3000,
            confetti_pieces: 50,
        }
    }
}

impl TrackerConfig {
    /// Parse a JSON config block. Missing fields take their defaults.
    pub fn from_json(json: &str) -> TrackerResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> TrackerResult<()> {
        if self.default_daily_goal == 0 {
            return Err(TrackerError::NonPositiveGoal { value: 0 });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrackerConfig::default();
        assert_eq!(config.default_daily_goal, 2000);
        assert_eq!(config.pulse_duration_ms, 500);
        assert_eq!(config.celebration_duration_ms, 3000);
        assert_eq!(config.confetti_pieces, 50);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = TrackerConfig::from_json(r#"{ "default_daily_goal": 1800 }"#).unwrap();
        assert_eq!(config.default_daily_goal, 1800);
        assert_eq!(config.pulse_duration_ms, 500);
    }

    #[test]
    fn test_rejects_zero_goal() {
        assert!(matches!(
            TrackerConfig::from_json(r#"{ "default_daily_goal": 0 }"#),
            Err(TrackerError::NonPositiveGoal { value: 0 })
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            TrackerConfig::from_json("{ not json"),
            Err(TrackerError::InvalidConfig(_))
        ));
    }
}
