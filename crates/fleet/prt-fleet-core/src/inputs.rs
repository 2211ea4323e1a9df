//! Commands a host feeds into the fleet between ticks (typically from key presses).

use serde::{Deserialize, Serialize};

use crate::ids::VehicleId;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FleetCommand {
    /// Flip the sign of the shared acceleration (start/stop all vehicles).
    ToggleAcceleration,
    SetAcceleration {
        acceleration: f64,
    },
    /// Teleport a vehicle to `progress`, keeping its velocity.
    Seek {
        vehicle: VehicleId,
        progress: f64,
    },
    /// Zero a vehicle's velocity.
    Stop {
        vehicle: VehicleId,
    },
}
