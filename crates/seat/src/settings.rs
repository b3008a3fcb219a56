//! Runtime engine settings and their conversion from configuration files.

use chrono::TimeDelta;
use sunside_config::{EngineConfig, ObliquityConfig};
use sunside_ephem::{DEFAULT_EVENT_PADDING_MINUTES, Obliquity};
use thiserror::Error;

/// Knobs for a recommendation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    /// Minutes between consecutive path samples.
    pub step_minutes: i64,
    /// Slack added before and after each sunrise/sunset window.
    pub event_padding: TimeDelta,
    /// Obliquity model used for the subsolar point in side votes.
    pub obliquity: Obliquity,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            step_minutes: 1,
            event_padding: TimeDelta::minutes(DEFAULT_EVENT_PADDING_MINUTES),
            obliquity: Obliquity::Reference,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("step_minutes must be positive (got {0})")]
    InvalidStep(i64),
    #[error("event_padding_minutes must be between 0 and one day (got {0})")]
    InvalidPadding(i64),
}

impl TryFrom<&EngineConfig> for EngineSettings {
    type Error = SettingsError;

    fn try_from(config: &EngineConfig) -> Result<Self, Self::Error> {
        if config.step_minutes <= 0 {
            return Err(SettingsError::InvalidStep(config.step_minutes));
        }
        if !(0..=1_440).contains(&config.event_padding_minutes) {
            return Err(SettingsError::InvalidPadding(config.event_padding_minutes));
        }

        Ok(Self {
            step_minutes: config.step_minutes,
            event_padding: TimeDelta::minutes(config.event_padding_minutes),
            obliquity: match config.obliquity {
                ObliquityConfig::Reference => Obliquity::Reference,
                ObliquityConfig::Standard => Obliquity::Standard,
            },
        })
    }
}
