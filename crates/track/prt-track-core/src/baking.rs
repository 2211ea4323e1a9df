//! Baking API: sample poses along a track at uniform arc-length spacing.

use serde::{Deserialize, Serialize};

use crate::compose::compose_pose;
use crate::error::TrackError;
use crate::pose::Pose;
use crate::track::Track;

const DEFAULT_SPACING: f64 = 0.1;

/// Upper bound on samples produced by a single bake.
pub const MAX_BAKED_SAMPLES: usize = 1_000_000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BakingConfig {
    /// Arc-length distance between samples.
    pub spacing: f64,
    /// First sampled progress value.
    pub start: f64,
    /// Last sampled progress value; if None, uses the track's total length.
    pub end: Option<f64>,
}

impl Default for BakingConfig {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            start: 0.0,
            end: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BakedSample {
    pub progress: f64,
    pub pose: Pose,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BakedPath {
    pub spacing: f64,
    pub start: f64,
    pub end: f64,
    pub samples: Vec<BakedSample>,
}

/// Bake poses from `start` to `end` inclusive.
///
/// Out-of-range window bounds are clamped to the track and a non-positive
/// spacing falls back to the default. A spacing that would need more than
/// [`MAX_BAKED_SAMPLES`] samples is rejected as `InvalidConfig`.
pub fn bake_track(track: &Track, cfg: &BakingConfig) -> Result<BakedPath, TrackError> {
    let spacing = if cfg.spacing.is_finite() && cfg.spacing > 0.0 {
        cfg.spacing
    } else {
        DEFAULT_SPACING
    };
    let total = track.total_length();
    let start = if cfg.start.is_finite() {
        cfg.start.clamp(0.0, total)
    } else {
        0.0
    };
    let end = cfg
        .end
        .filter(|e| e.is_finite())
        .unwrap_or(total)
        .clamp(start, total);
    let span = end - start;
    let intervals = (span / spacing).ceil();
    if intervals >= MAX_BAKED_SAMPLES as f64 {
        return Err(TrackError::invalid_config(format!(
            "spacing {spacing} over {span} units exceeds {MAX_BAKED_SAMPLES} samples"
        )));
    }
    let sample_count = intervals as usize + 1; // inclusive of end

    let mut samples = Vec::with_capacity(sample_count);
    for i in 0..sample_count {
        let progress = (start + i as f64 * spacing).min(end);
        samples.push(BakedSample {
            progress,
            pose: compose_pose(track, progress)?,
        });
    }
    Ok(BakedPath {
        spacing,
        start,
        end,
        samples,
    })
}

/// Export baked data as serde_json::Value.
pub fn export_baked_json(baked: &BakedPath) -> serde_json::Value {
    serde_json::to_value(baked).unwrap_or(serde_json::Value::Null)
}
