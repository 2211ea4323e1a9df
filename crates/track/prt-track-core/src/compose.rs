//! Pose composition: replay the track from its start up to a progress value.
//!
//! Model:
//! - Every segment before the one containing `progress` contributes its full
//!   effect; the containing segment contributes up to the local offset.
//! - Straights translate along the current heading.
//! - Stepped segments (curves, grade transitions) apply `floor(d / step)`
//!   discrete steps, each one "rotate by the per-step angle, then move one step
//!   forward and one rise along the rise axis", followed by one partial step
//!   scaled by the leftover fraction.
//!
//! Because rotation is applied per step, the heading and position after N
//! steps depend on the order of operations, so the whole prefix is replayed
//! rather than evaluated in closed form.

use crate::error::TrackError;
use crate::pose::{rotate_y, Pose};
use crate::segment::{StepParams, TrackSegment};
use crate::track::{RiseAxis, Track};

/// Step counts this close below an integer are treated as that integer.
const STEP_SNAP_EPSILON: f64 = 1e-9;

/// Split `distance` into whole steps and the fractional remainder in `[0, 1)`.
#[inline]
pub(crate) fn split_steps(distance: f64, step: f64) -> (u64, f64) {
    let ratio = distance / step;
    let whole = (ratio + STEP_SNAP_EPSILON).floor().max(0.0);
    let fraction = (ratio - whole).max(0.0);
    (whole as u64, fraction)
}

/// Running transform state while replaying segments.
#[derive(Clone, Debug)]
struct Accumulator {
    translation: [f64; 3],
    yaw_deg: f64,
    rise_axis: RiseAxis,
}

impl Accumulator {
    fn new(rise_axis: RiseAxis) -> Self {
        Self {
            translation: [0.0; 3],
            yaw_deg: 0.0,
            rise_axis,
        }
    }

    #[inline]
    fn advance(&mut self, forward: f64, rise: f64) {
        let local = match self.rise_axis {
            RiseAxis::Lateral => [forward, 0.0, rise],
            RiseAxis::Vertical => [forward, 0.0, 0.0],
        };
        let moved = rotate_y(local, self.yaw_deg);
        self.translation[0] += moved[0];
        self.translation[1] += moved[1];
        self.translation[2] += moved[2];
        if self.rise_axis == RiseAxis::Vertical {
            self.translation[1] += rise;
        }
    }

    /// One (possibly partial) step: rotate first, then translate.
    #[inline]
    fn step(&mut self, params: &StepParams, scale: f64) {
        self.yaw_deg += params.turn * scale;
        self.advance(params.arc * scale, params.rise * scale);
    }

    /// Apply `segment` over the first `distance` units of its length.
    fn apply(&mut self, segment: &TrackSegment, distance: f64) {
        match segment.step_params() {
            None => self.advance(distance, 0.0),
            Some(params) => {
                let (whole, fraction) = split_steps(distance, params.arc);
                for _ in 0..whole {
                    self.step(&params, 1.0);
                }
                if fraction > 0.0 {
                    self.step(&params, fraction);
                }
            }
        }
    }

    fn finish(self) -> Pose {
        Pose {
            translation: self.translation,
            yaw_deg: self.yaw_deg,
        }
    }
}

/// Compose the pose of a vehicle `progress` units along `track`.
///
/// Fails with [`TrackError::OutOfRange`] when `progress` is negative, not
/// finite, or beyond [`Track::total_length`]; it is never clamped here.
pub fn compose_pose(track: &Track, progress: f64) -> Result<Pose, TrackError> {
    let (index, offset) = track.locate(progress)?;
    let segments = track.segments();
    let mut acc = Accumulator::new(track.rise_axis());
    for segment in &segments[..index] {
        acc.apply(segment, segment.length());
    }
    acc.apply(&segments[index], offset);
    Ok(acc.finish())
}

/// Pose at the very end of the track.
pub fn end_pose(track: &Track) -> Pose {
    let mut acc = Accumulator::new(track.rise_axis());
    for segment in track.segments() {
        acc.apply(segment, segment.length());
    }
    acc.finish()
}

impl Track {
    /// Method form of [`compose_pose`].
    #[inline]
    pub fn pose_at(&self, progress: f64) -> Result<Pose, TrackError> {
        compose_pose(self, progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_snaps_near_integers() {
        assert_eq!(split_steps(0.0, 0.153), (0, 0.0));
        // Offset recovered from cumulative starts: 35.99999999999999 steps.
        assert_eq!(split_steps(15.508 - 10.0, 0.153), (36, 0.0));
        let (whole, fraction) = split_steps(0.153 * 2.5, 0.153);
        assert_eq!(whole, 2);
        assert!((fraction - 0.5).abs() < 1e-12);
    }

    #[test]
    fn vertical_rise_goes_to_y() {
        let track = Track::builder()
            .grade(1.0, 0.25, 0.05)
            .rise_axis(RiseAxis::Vertical)
            .build()
            .unwrap();
        let pose = compose_pose(&track, 1.0).unwrap();
        assert!((pose.translation[0] - 1.0).abs() < 1e-12);
        assert!((pose.translation[1] - 0.2).abs() < 1e-12);
        assert_eq!(pose.translation[2], 0.0);
        assert_eq!(pose.yaw_deg, 0.0);
    }

    #[test]
    fn end_pose_matches_compose_at_total_length() {
        let track = Track::builder()
            .straight(3.0)
            .curve(1.1, 5.0, 0.3, 0.01)
            .straight(2.0)
            .build()
            .unwrap();
        assert_eq!(
            end_pose(&track),
            compose_pose(&track, track.total_length()).unwrap()
        );
        assert_eq!(track.pose_at(1.0).unwrap(), compose_pose(&track, 1.0).unwrap());
    }
}
