//! Identifiers for fleet entities.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TrackId(pub u32);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct VehicleId(pub u32);

/// Hands out track and vehicle ids in increasing order, never reusing one.
///
/// Once a counter has issued `u32::MAX` it is exhausted and further calls
/// return `None`.
#[derive(Debug)]
pub struct IdAllocator {
    next_track: Option<u32>,
    next_vehicle: Option<u32>,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::starting_at(0, 0)
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocator whose next ids are `track` and `vehicle`.
    pub fn starting_at(track: u32, vehicle: u32) -> Self {
        Self {
            next_track: Some(track),
            next_vehicle: Some(vehicle),
        }
    }

    #[inline]
    pub fn alloc_track(&mut self) -> Option<TrackId> {
        bump(&mut self.next_track).map(TrackId)
    }

    #[inline]
    pub fn alloc_vehicle(&mut self) -> Option<VehicleId> {
        bump(&mut self.next_vehicle).map(VehicleId)
    }
}

fn bump(next: &mut Option<u32>) -> Option<u32> {
    let id = (*next)?;
    *next = id.checked_add(1);
    Some(id)
}
