//! JSON-loadable fleet setup: motion limits, guideways and vehicles.

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

use prt_track_core::{presets, MotionConfig, RiseAxis, Track, TrackPlacement, TrackSegment};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FleetSetup {
    #[serde(default)]
    pub motion: MotionConfig,
    pub tracks: Vec<TrackSetup>,
    #[serde(default)]
    pub vehicles: Vec<VehicleSetup>,
}

/// A guideway given either by preset name or by inline segments.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackSetup {
    pub name: String,
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub segments: Vec<TrackSegment>,
    /// Only used with inline segments; presets use the lateral axis.
    #[serde(default)]
    pub rise_axis: RiseAxis,
    #[serde(default)]
    pub placement: TrackPlacement,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VehicleSetup {
    pub name: String,
    /// Name of a track in the same setup.
    pub track: String,
    /// Initial progress along the track.
    #[serde(default)]
    pub start: f64,
}

impl TrackSetup {
    pub fn build(&self) -> Result<Track> {
        match (&self.preset, self.segments.is_empty()) {
            (Some(_), false) => bail!(
                "track '{}' sets both a preset and inline segments",
                self.name
            ),
            (Some(preset), true) => {
                let track = presets::by_name(preset)
                    .ok_or_else(|| anyhow!("track '{}': unknown preset '{preset}'", self.name))?;
                Ok(track?)
            }
            (None, _) => Track::build_with_rise_axis(self.segments.clone(), self.rise_axis)
                .with_context(|| format!("invalid segments for track '{}'", self.name)),
        }
    }
}

impl FleetSetup {
    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s).context("parse fleet setup")
    }
}
