//! Bounded-acceleration progress integrator.
//!
//! Each vehicle owns a [`VehicleState`]; the driver calls [`advance`] once per
//! frame and then composes the pose for the new progress value.

use serde::{Deserialize, Serialize};

use crate::config::MotionConfig;

/// Per-vehicle integrator state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    /// Arc-length distance from the track start.
    pub progress: f64,
    /// Current speed along the track.
    pub velocity: f64,
}

impl VehicleState {
    /// At rest at `progress`.
    pub fn at(progress: f64) -> Self {
        Self {
            progress,
            velocity: 0.0,
        }
    }
}

/// What happened during one integrator step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advance {
    Moved,
    /// Progress ran past the end and was reset to the start at rest.
    Wrapped,
    /// `dt` was not a finite non-negative number; state untouched.
    Skipped,
}

/// Integrate one frame of `dt` seconds.
///
/// `acceleration` is passed separately from `limits` so that several vehicles
/// can share a runtime-toggled value.
pub fn advance(
    state: &mut VehicleState,
    limits: &MotionConfig,
    acceleration: f64,
    dt: f64,
    total_length: f64,
) -> Advance {
    if !dt.is_finite() || dt < 0.0 {
        log::warn!("skipping integrator step with invalid dt {dt}");
        return Advance::Skipped;
    }
    state.velocity = limits.clamp_speed(state.velocity + acceleration * dt);
    state.progress += state.velocity * dt;
    if state.progress > total_length {
        state.progress = 0.0;
        state.velocity = 0.0;
        return Advance::Wrapped;
    }
    Advance::Moved
}
