//! Segment descriptors: one leg of the guideway with uniform turn/grade behaviour.

use serde::{Deserialize, Serialize};

use crate::error::TrackError;

/// Variant tag of a [`TrackSegment`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SegmentKind {
    Straight,
    Curve,
    GradeTransition,
}

/// One contiguous leg of the path.
///
/// Stepped kinds (`Curve`, `GradeTransition`) apply their rotation and rise in
/// discrete increments of `step_arc_length`; any remainder shorter than a step
/// is applied proportionally.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TrackSegment {
    Straight {
        length: f64,
    },
    #[serde(rename_all = "camelCase")]
    Curve {
        length: f64,
        /// Signed degrees about +Y per step; positive turns left.
        turn_angle_per_step: f64,
        step_arc_length: f64,
        step_rise: f64,
    },
    #[serde(rename_all = "camelCase")]
    GradeTransition {
        length: f64,
        step_arc_length: f64,
        step_rise: f64,
    },
}

/// Per-step increments of a stepped segment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct StepParams {
    pub turn: f64,
    pub arc: f64,
    pub rise: f64,
}

impl TrackSegment {
    pub fn straight(length: f64) -> Self {
        Self::Straight { length }
    }

    pub fn curve(
        length: f64,
        turn_angle_per_step: f64,
        step_arc_length: f64,
        step_rise: f64,
    ) -> Self {
        Self::Curve {
            length,
            turn_angle_per_step,
            step_arc_length,
            step_rise,
        }
    }

    pub fn grade(length: f64, step_arc_length: f64, step_rise: f64) -> Self {
        Self::GradeTransition {
            length,
            step_arc_length,
            step_rise,
        }
    }

    #[inline]
    pub fn kind(&self) -> SegmentKind {
        match self {
            Self::Straight { .. } => SegmentKind::Straight,
            Self::Curve { .. } => SegmentKind::Curve,
            Self::GradeTransition { .. } => SegmentKind::GradeTransition,
        }
    }

    /// Total arc length covered by the segment.
    #[inline]
    pub fn length(&self) -> f64 {
        match *self {
            Self::Straight { length }
            | Self::Curve { length, .. }
            | Self::GradeTransition { length, .. } => length,
        }
    }

    /// Arc length of one discrete step, `None` for straights.
    #[inline]
    pub fn step_arc_length(&self) -> Option<f64> {
        self.step_params().map(|s| s.arc)
    }

    /// Net yaw change (degrees) after traversing the whole segment.
    pub fn total_turn(&self) -> f64 {
        match *self {
            Self::Curve {
                length,
                turn_angle_per_step,
                step_arc_length,
                ..
            } => turn_angle_per_step * length / step_arc_length,
            _ => 0.0,
        }
    }

    pub(crate) fn step_params(&self) -> Option<StepParams> {
        match *self {
            Self::Straight { .. } => None,
            Self::Curve {
                turn_angle_per_step,
                step_arc_length,
                step_rise,
                ..
            } => Some(StepParams {
                turn: turn_angle_per_step,
                arc: step_arc_length,
                rise: step_rise,
            }),
            Self::GradeTransition {
                step_arc_length,
                step_rise,
                ..
            } => Some(StepParams {
                turn: 0.0,
                arc: step_arc_length,
                rise: step_rise,
            }),
        }
    }

    /// Check construction invariants; `index` is only used for error reporting.
    pub fn validate(&self, index: usize) -> Result<(), TrackError> {
        let length = self.length();
        if !length.is_finite() || length <= 0.0 {
            return Err(TrackError::invalid_segment(
                index,
                format!("length must be finite and > 0 (got {length})"),
            ));
        }
        if let Some(step) = self.step_params() {
            if !step.arc.is_finite() || step.arc <= 0.0 {
                return Err(TrackError::invalid_segment(
                    index,
                    format!("step_arc_length must be finite and > 0 (got {})", step.arc),
                ));
            }
            if !step.turn.is_finite() {
                return Err(TrackError::invalid_segment(
                    index,
                    "turn_angle_per_step must be finite",
                ));
            }
            if !step.rise.is_finite() {
                return Err(TrackError::invalid_segment(index, "step_rise must be finite"));
            }
        }
        Ok(())
    }
}
