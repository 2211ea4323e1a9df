use approx::assert_abs_diff_eq;
use prt_track_core::{compose_pose, pose::rotate_y, Track, TrackError, TrackSegment};

fn quarter_turn() -> Track {
    Track::build(vec![
        TrackSegment::straight(10.0),
        TrackSegment::curve(5.508, -2.5, 0.153, -0.01),
    ])
    .expect("valid track")
}

/// it should move exactly `p` along x with zero yaw on a single straight
#[test]
fn straight_track_is_monotonic() {
    let track = Track::build(vec![TrackSegment::straight(7.5)]).unwrap();
    let mut p = 0.0;
    while p <= 7.5 {
        let pose = compose_pose(&track, p).unwrap();
        assert_eq!(pose.translation[0], p);
        assert_eq!(pose.translation[1], 0.0);
        assert_eq!(pose.translation[2], 0.0);
        assert_eq!(pose.yaw_deg, 0.0);
        p += 0.25;
    }
}

/// it should attribute a shared boundary to the later segment
#[test]
fn boundary_belongs_to_later_segment() {
    let track = Track::build(vec![TrackSegment::straight(4.0), TrackSegment::straight(6.0)]).unwrap();
    assert_eq!(track.locate(4.0).unwrap(), (1, 0.0));
    assert_eq!(track.locate(10.0).unwrap(), (1, 6.0));
}

/// it should land on exact multiples of the per-step turn at step boundaries
#[test]
fn whole_step_curve_is_deterministic() {
    let track = Track::build(vec![TrackSegment::curve(9.0, 2.5, 0.25, 0.0)]).unwrap();
    for k in 0..=36 {
        let pose = compose_pose(&track, k as f64 * 0.25).unwrap();
        assert_eq!(pose.yaw_deg, k as f64 * 2.5, "k={k}");
    }

    // Non-dyadic step length: still k whole steps with no residual turn.
    let track = Track::build(vec![TrackSegment::curve(5.508, -2.5, 0.153, -0.01)]).unwrap();
    for k in [1_u32, 7, 18, 35] {
        let pose = compose_pose(&track, k as f64 * 0.153).unwrap();
        assert_abs_diff_eq!(pose.normalized_yaw(), -2.5 * k as f64, epsilon = 1e-6);
    }
}

/// it should vary yaw and translation continuously inside and across curves
#[test]
fn partial_steps_are_continuous() {
    let track = Track::build(vec![
        TrackSegment::straight(1.0),
        TrackSegment::curve(2.0, 5.0, 0.2, 0.02),
        TrackSegment::grade(1.0, 0.3, 0.05),
    ])
    .unwrap();
    let dp = 1e-4;
    let max_yaw_step = 5.0 / 0.2 * dp * 1.01;
    let mut prev = compose_pose(&track, 0.0).unwrap();
    let mut i = 1;
    loop {
        let p = (i as f64 * dp).min(track.total_length());
        let pose = compose_pose(&track, p).unwrap();
        let dyaw = (pose.yaw_deg - prev.yaw_deg).abs();
        assert!(dyaw <= max_yaw_step, "yaw jump {dyaw} at p={p}");
        let dx: f64 = (0..3)
            .map(|c| (pose.translation[c] - prev.translation[c]).powi(2))
            .sum::<f64>()
            .sqrt();
        assert!(dx <= 2.0 * dp, "translation jump {dx} at p={p}");
        prev = pose;
        if p >= track.total_length() {
            break;
        }
        i += 1;
    }
}

/// it should reproduce the straight + quarter-turn scenario end to end
#[test]
fn quarter_turn_scenario() {
    let track = quarter_turn();
    assert_eq!(track.total_length(), 15.508);

    let at_curve = compose_pose(&track, 10.0).unwrap();
    assert_eq!(at_curve.translation, [10.0, 0.0, 0.0]);
    assert_eq!(at_curve.yaw_deg, 0.0);

    let end = compose_pose(&track, 15.508).unwrap();
    assert_eq!(end.yaw_deg, -90.0);

    // 36 whole steps of (0.153 forward, -0.01 lateral), no residual.
    let mut expected = [10.0, 0.0, 0.0];
    let mut yaw = 0.0;
    for _ in 0..36 {
        yaw += -2.5;
        let d = rotate_y([0.153, 0.0, -0.01], yaw);
        for c in 0..3 {
            expected[c] += d[c];
        }
    }
    for c in 0..3 {
        assert_abs_diff_eq!(end.translation[c], expected[c], epsilon = 1e-9);
    }
    // A right-hand quarter turn ends heading along +z.
    assert_abs_diff_eq!(end.forward()[2], 1.0, epsilon = 1e-12);
}

/// it should reject progress outside [0, total_length] without clamping
#[test]
fn out_of_range_is_rejected() {
    let track = quarter_turn();
    let total = track.total_length();
    match compose_pose(&track, -1.0) {
        Err(TrackError::OutOfRange {
            progress,
            total_length,
        }) => {
            assert_eq!(progress, -1.0);
            assert_eq!(total_length, total);
        }
        other => panic!("expected OutOfRange, got {other:?}"),
    }
    assert!(matches!(
        compose_pose(&track, total + 0.001),
        Err(TrackError::OutOfRange { .. })
    ));
    assert!(compose_pose(&track, f64::NAN).unwrap_err().is_recoverable());
}

/// it should return bit-identical poses for repeated calls
#[test]
fn composition_is_idempotent() {
    let track = quarter_turn();
    for p in [0.0, 3.3, 10.0, 12.3456, 15.508] {
        let a = compose_pose(&track, p).unwrap();
        let b = compose_pose(&track, p).unwrap();
        assert_eq!(a.yaw_deg.to_bits(), b.yaw_deg.to_bits());
        for c in 0..3 {
            assert_eq!(a.translation[c].to_bits(), b.translation[c].to_bits());
        }
    }
}

/// it should treat a segment that is an exact multiple of its step like whole steps only
#[test]
fn exact_multiple_has_no_partial_contribution() {
    let whole = Track::build(vec![TrackSegment::curve(1.0, 3.0, 0.25, 0.1)]).unwrap();
    let pose = compose_pose(&whole, 1.0).unwrap();
    assert_eq!(pose.yaw_deg, 12.0);

    // Progress just short of the end still interpolates the last step.
    let near = compose_pose(&whole, 0.875).unwrap();
    assert_abs_diff_eq!(near.yaw_deg, 10.5, epsilon = 1e-12);
}

/// Replays `steps` rotate-then-translate increments onto `(translation, yaw)`.
fn replay(
    translation: &mut [f64; 3],
    yaw: &mut f64,
    steps: &[f64],
    turn: f64,
    arc: f64,
    rise: f64,
) {
    for &f in steps {
        *yaw += turn * f;
        let d = rotate_y([arc * f, 0.0, rise * f], *yaw);
        for c in 0..3 {
            translation[c] += d[c];
        }
    }
}

/// it should rotate the partial step before translating it
#[test]
fn partial_step_translation_is_exact() {
    let track = Track::build(vec![TrackSegment::curve(1.0, 3.0, 0.25, 0.1)]).unwrap();
    let pose = compose_pose(&track, 0.625).unwrap();

    let mut expected = [0.0; 3];
    let mut yaw = 0.0;
    replay(&mut expected, &mut yaw, &[1.0, 1.0, 0.5], 3.0, 0.25, 0.1);
    assert_abs_diff_eq!(pose.yaw_deg, 7.5, epsilon = 1e-12);
    for c in 0..3 {
        assert_abs_diff_eq!(pose.translation[c], expected[c], epsilon = 1e-12);
    }

    // Translating the half step at the pre-rotation heading lands elsewhere.
    let mut wrong = [0.0; 3];
    let mut wrong_yaw = 0.0;
    replay(&mut wrong, &mut wrong_yaw, &[1.0, 1.0], 3.0, 0.25, 0.1);
    let d = rotate_y([0.125, 0.0, 0.05], wrong_yaw);
    assert!((pose.translation[2] - (wrong[2] + d[2])).abs() > 1e-4);
}

/// it should carry a prior segment's partial step into later segments
#[test]
fn prior_partial_segment_carries_forward() {
    let track = Track::build(vec![
        TrackSegment::curve(0.6, 4.0, 0.25, 0.02),
        TrackSegment::straight(1.0),
    ])
    .unwrap();
    let pose = compose_pose(&track, 1.1).unwrap();

    // 2.4 steps through the curve, then half a unit of straight.
    let mut expected = [0.0; 3];
    let mut yaw = 0.0;
    replay(&mut expected, &mut yaw, &[1.0, 1.0, 0.4], 4.0, 0.25, 0.02);
    let d = rotate_y([0.5, 0.0, 0.0], yaw);
    for c in 0..3 {
        expected[c] += d[c];
    }
    assert_abs_diff_eq!(pose.yaw_deg, 9.6, epsilon = 1e-12);
    for c in 0..3 {
        assert_abs_diff_eq!(pose.translation[c], expected[c], epsilon = 1e-12);
    }
}
