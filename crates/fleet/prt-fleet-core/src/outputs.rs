//! Per-tick output: one pose per vehicle plus discrete events.

use serde::{Deserialize, Serialize};

use prt_track_core::Pose;

use crate::ids::{TrackId, VehicleId};

/// Pose of one vehicle this tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehiclePose {
    pub vehicle: VehicleId,
    pub track: TrackId,
    pub progress: f64,
    pub velocity: f64,
    /// Pose in the track's local frame.
    pub local: Pose,
    /// Pose after the track placement; this is what a renderer draws.
    pub world: Pose,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FleetEvent {
    /// Vehicle ran past the end of its track and restarted at rest.
    Looped { vehicle: VehicleId },
    AccelerationChanged { old: f64, new: f64 },
    Seeked { vehicle: VehicleId, from: f64, to: f64 },
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FleetFrame {
    pub epoch: u64,
    pub dt: f64,
    /// Vehicle poses in insertion order.
    pub poses: Vec<VehiclePose>,
    #[serde(default)]
    pub events: Vec<FleetEvent>,
}

impl FleetFrame {
    pub fn pose_of(&self, vehicle: VehicleId) -> Option<&VehiclePose> {
        self.poses.iter().find(|p| p.vehicle == vehicle)
    }
}
