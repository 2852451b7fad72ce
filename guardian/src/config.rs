//! Demo tuning knobs.
//!
//! Defaults reproduce the site's animation; every field can be overridden
//! from JSON (missing fields keep their defaults) and must pass
//! [`DemoConfig::validate`] before a tracker accepts it.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_ALERT_HOLD_TICKS, DEFAULT_HEADING_DELTA, DEFAULT_HEADING_OFFSET_DEG, DEFAULT_PROXIMITY_THRESHOLD,
    DEFAULT_STEP, DEFAULT_TICK_MS,
};
use crate::curve::HeadingParams;
use crate::error::GuardianError;

/// Inclusive bounds applied to the marker heading after the offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleClamp {
    pub min_deg: f64,
    pub max_deg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Milliseconds between ticks.
    pub tick_ms: u32,
    /// Progress added per tick; must lie in `(0, 1)`.
    pub step: f64,
    /// Heading look-ahead in `t`.
    pub heading_delta: f64,
    /// Rotation added to the travel angle.
    pub heading_offset_deg: f64,
    /// Off unless a layout needs it.
    pub heading_clamp: Option<AngleClamp>,
    /// View-box distance for "in range".
    pub proximity_threshold: f64,
    /// How long an alert stays up.
    pub alert_hold_ticks: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            step: DEFAULT_STEP,
            heading_delta: DEFAULT_HEADING_DELTA,
            heading_offset_deg: DEFAULT_HEADING_OFFSET_DEG,
            heading_clamp: None,
            proximity_threshold: DEFAULT_PROXIMITY_THRESHOLD,
            alert_hold_ticks: DEFAULT_ALERT_HOLD_TICKS,
        }
    }
}

impl DemoConfig {
    /// Check ranges, returning the config unchanged when it is usable.
    ///
    /// # Errors
    ///
    /// Returns [`GuardianError::InvalidConfig`] naming the first bad field.
    pub fn validate(self) -> Result<Self, GuardianError> {
        if self.tick_ms == 0 {
            return Err(invalid("tick_ms must be positive"));
        }
        if self.alert_hold_ticks == 0 {
            return Err(invalid("alert_hold_ticks must be positive"));
        }
        if !(self.step > 0.0 && self.step < 1.0) {
            return Err(invalid(format!("step must lie in (0, 1), got {}", self.step)));
        }
        if !(self.heading_delta > 0.0 && self.heading_delta < 0.5) {
            return Err(invalid(format!("heading_delta must lie in (0, 0.5), got {}", self.heading_delta)));
        }
        if !self.heading_offset_deg.is_finite() {
            return Err(invalid("heading_offset_deg must be finite"));
        }
        if let Some(clamp) = self.heading_clamp
            && !(clamp.min_deg.is_finite() && clamp.max_deg.is_finite() && clamp.min_deg <= clamp.max_deg)
        {
            return Err(invalid(format!(
                "heading_clamp bounds must be finite and ordered, got {}..{}",
                clamp.min_deg, clamp.max_deg
            )));
        }
        if !(self.proximity_threshold.is_finite() && self.proximity_threshold > 0.0) {
            return Err(invalid(format!(
                "proximity_threshold must be positive, got {}",
                self.proximity_threshold
            )));
        }
        Ok(self)
    }

    #[must_use]
    pub fn heading_params(&self) -> HeadingParams {
        HeadingParams { delta: self.heading_delta, offset_deg: self.heading_offset_deg, clamp: self.heading_clamp }
    }
}

fn invalid(msg: impl Into<String>) -> GuardianError {
    GuardianError::InvalidConfig(msg.into())
}
