//! PRT Track Core (renderer-agnostic)
//!
//! Converts a scalar "distance traveled" along a guideway into a rigid pose
//! (translation + yaw) for a vehicle. A guideway is an ordered list of
//! straight, curved and grade-transition segments; curves and grades rotate
//! and rise in fixed per-step increments, so a pose is obtained by replaying
//! the track from its start up to the requested progress.
//!
//! The crate also carries the bounded-acceleration integrator that drives
//! progress each frame, a JSON track document, pose baking and the built-in
//! guideway presets. Uploading poses to a renderer is left to the host.

pub mod baking;
pub mod compose;
pub mod config;
pub mod error;
pub mod pose;
pub mod presets;
pub mod progress;
pub mod segment;
pub mod stored_track;
pub mod track;

// Re-exports for consumers (drivers, adapters)
pub use baking::{
    bake_track, export_baked_json, BakedPath, BakedSample, BakingConfig, MAX_BAKED_SAMPLES,
};
pub use compose::{compose_pose, end_pose};
pub use config::MotionConfig;
pub use error::TrackError;
pub use pose::{Pose, TrackPlacement};
pub use progress::{advance, Advance, VehicleState};
pub use segment::{SegmentKind, TrackSegment};
pub use stored_track::{parse_stored_track_json, StoredTrack, StoredTrackDocument};
pub use track::{RiseAxis, Track, TrackBuilder};

/// Track core result type
pub type Result<T> = core::result::Result<T, TrackError>;
