//! prt-fleet
//!
//! Host-side driver for PRT vehicles. A [`Fleet`] registers guideways (shared
//! read-only), places vehicles on them and, once per tick, runs the progress
//! integrator followed by the pose composer for every vehicle. The resulting
//! [`FleetFrame`] carries the placed poses a renderer needs plus loop and
//! command events.

pub mod fleet;
pub mod ids;
pub mod inputs;
pub mod outputs;
pub mod setup;

pub use crate::fleet::{Fleet, RegisteredTrack, Vehicle};
pub use crate::ids::{TrackId, VehicleId};
pub use crate::inputs::FleetCommand;
pub use crate::outputs::{FleetEvent, FleetFrame, VehiclePose};
pub use crate::setup::{FleetSetup, TrackSetup, VehicleSetup};
