//! Built-in guideways from the scene viewer.
//!
//! Two curve flavours recur: a gentle left-hander (+2.5° every 0.306 units)
//! and a tight right-hander (-2.5° every 0.153 units). Both run exactly 36
//! steps, so every curve is a quarter turn. Constants are kept as authored,
//! including the asymmetric outbound/return layouts.

use crate::error::TrackError;
use crate::track::Track;

const WIDE_TURN: f64 = 2.5;
const WIDE_STEP: f64 = 0.306;
const WIDE_RISE: f64 = -0.005;
const WIDE_LENGTH: f64 = 11.016;

const TIGHT_TURN: f64 = -2.5;
const TIGHT_STEP: f64 = 0.153;
const TIGHT_RISE: f64 = -0.01;
const TIGHT_LENGTH: f64 = 5.508;

/// Outbound PRT guideway (113.04 units).
pub fn prt_outbound() -> Result<Track, TrackError> {
    Track::builder()
        .straight(33.0)
        .curve(WIDE_LENGTH, WIDE_TURN, WIDE_STEP, WIDE_RISE)
        .straight(5.75)
        .curve(TIGHT_LENGTH, TIGHT_TURN, TIGHT_STEP, TIGHT_RISE)
        .straight(12.25)
        .curve(WIDE_LENGTH, WIDE_TURN, WIDE_STEP, WIDE_RISE)
        .straight(34.5)
        .build()
}

/// Return PRT guideway (112.032 units).
pub fn prt_return() -> Result<Track, TrackError> {
    Track::builder()
        .straight(35.0)
        .curve(TIGHT_LENGTH, TIGHT_TURN, TIGHT_STEP, TIGHT_RISE)
        .straight(12.0)
        .curve(WIDE_LENGTH, WIDE_TURN, WIDE_STEP, WIDE_RISE)
        .straight(5.75)
        .curve(TIGHT_LENGTH, TIGHT_TURN, TIGHT_STEP, TIGHT_RISE)
        .straight(37.25)
        .build()
}

/// Short campus shuttle loop (36.024 units).
pub fn campus_shuttle() -> Result<Track, TrackError> {
    Track::builder()
        .straight(3.5)
        .curve(TIGHT_LENGTH, TIGHT_TURN, TIGHT_STEP, TIGHT_RISE)
        .straight(12.0)
        .curve(WIDE_LENGTH, WIDE_TURN, WIDE_STEP, WIDE_RISE)
        .straight(4.0)
        .build()
}

/// Look up a preset by name (`"prt-outbound"`, `"prt-return"`, `"campus-shuttle"`).
pub fn by_name(name: &str) -> Option<Result<Track, TrackError>> {
    match name {
        "prt-outbound" => Some(prt_outbound()),
        "prt-return" => Some(prt_return()),
        "campus-shuttle" => Some(campus_shuttle()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::compose_pose;
    use crate::segment::TrackSegment;

    #[test]
    fn preset_lengths() {
        assert_eq!(prt_outbound().unwrap().total_length(), 113.04);
        assert_eq!(prt_return().unwrap().total_length(), 112.032);
        assert_eq!(campus_shuttle().unwrap().total_length(), 36.024);
    }

    #[test]
    fn every_curve_is_a_quarter_turn() {
        for track in [prt_outbound(), prt_return(), campus_shuttle()] {
            let track = track.unwrap();
            for (i, segment) in track.segments().iter().enumerate() {
                let TrackSegment::Curve {
                    turn_angle_per_step,
                    ..
                } = *segment
                else {
                    continue;
                };
                let start = compose_pose(&track, track.starts()[i]).unwrap();
                let end_progress = track
                    .starts()
                    .get(i + 1)
                    .copied()
                    .unwrap_or(track.total_length());
                let end = compose_pose(&track, end_progress).unwrap();
                assert_eq!(
                    end.yaw_deg - start.yaw_deg,
                    90.0 * turn_angle_per_step.signum(),
                    "curve {i}"
                );
            }
        }
    }

    #[test]
    fn outbound_heading_after_each_curve() {
        let track = prt_outbound().unwrap();
        assert_eq!(compose_pose(&track, 44.016).unwrap().yaw_deg, 90.0);
        assert_eq!(compose_pose(&track, 55.274).unwrap().yaw_deg, 0.0);
        assert_eq!(end_yaw(&track), 90.0);
        assert_eq!(end_yaw(&prt_return().unwrap()), -90.0);
    }

    fn end_yaw(track: &Track) -> f64 {
        compose_pose(track, track.total_length()).unwrap().yaw_deg
    }

    #[test]
    fn lookup_by_name() {
        assert!(by_name("prt-return").unwrap().is_ok());
        assert!(by_name("monorail").is_none());
    }
}
