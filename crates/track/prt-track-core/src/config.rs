//! Motion configuration for the progress integrator.

use serde::{Deserialize, Serialize};

use crate::error::TrackError;

/// Speed limits and acceleration shared by vehicles on a guideway.
/// Defaults match the viewer's PRT cars.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MotionConfig {
    /// Lower speed clamp (arc-length units per second).
    pub min_speed: f64,
    /// Upper speed clamp.
    pub max_speed: f64,
    /// Signed acceleration applied every frame; flip the sign to slow to a stop.
    pub acceleration: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            min_speed: 0.0,
            max_speed: 4.5,
            acceleration: 1.5,
        }
    }
}

impl MotionConfig {
    /// Validate limits: all finite, `0 <= min_speed <= max_speed`.
    pub fn validate(&self) -> Result<(), TrackError> {
        if !self.min_speed.is_finite() || !self.max_speed.is_finite() {
            return Err(TrackError::invalid_config("speed limits must be finite"));
        }
        if !self.acceleration.is_finite() {
            return Err(TrackError::invalid_config("acceleration must be finite"));
        }
        if self.min_speed < 0.0 {
            return Err(TrackError::invalid_config(format!(
                "min_speed must be >= 0 (got {})",
                self.min_speed
            )));
        }
        if self.min_speed > self.max_speed {
            return Err(TrackError::invalid_config(format!(
                "min_speed {} exceeds max_speed {}",
                self.min_speed, self.max_speed
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn clamp_speed(&self, speed: f64) -> f64 {
        speed.max(self.min_speed).min(self.max_speed)
    }
}
