//! Fleet: owns guideways and vehicles, advances them once per tick.
//!
//! Methods:
//! - new, from_setup, add_track, add_vehicle, apply (commands), step (integrate -> compose)

use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use indexmap::IndexMap;

use prt_track_core::{
    advance, compose_pose, Advance, MotionConfig, Pose, Track, TrackPlacement, VehicleState,
};

use crate::ids::{IdAllocator, TrackId, VehicleId};
use crate::inputs::FleetCommand;
use crate::outputs::{FleetEvent, FleetFrame, VehiclePose};
use crate::setup::FleetSetup;

/// A guideway registered with the fleet.
#[derive(Debug, Clone)]
pub struct RegisteredTrack {
    pub id: TrackId,
    pub name: String,
    pub track: Arc<Track>,
    pub placement: TrackPlacement,
}

#[derive(Debug, Clone)]
pub struct Vehicle {
    pub id: VehicleId,
    pub name: String,
    pub track: TrackId,
    pub state: VehicleState,
}

#[derive(Debug)]
pub struct Fleet {
    motion: MotionConfig,
    /// Shared signed acceleration, starts at `motion.acceleration`.
    acceleration: f64,
    ids: IdAllocator,
    tracks: Vec<RegisteredTrack>,
    vehicles: IndexMap<VehicleId, Vehicle>,
    epoch: u64,
    // Events raised by commands, flushed into the next frame.
    pending: Vec<FleetEvent>,
}

impl Fleet {
    pub fn new(motion: MotionConfig) -> Result<Self> {
        motion.validate().context("invalid motion config")?;
        Ok(Self {
            acceleration: motion.acceleration,
            motion,
            ids: IdAllocator::new(),
            tracks: Vec::new(),
            vehicles: IndexMap::new(),
            epoch: 0,
            pending: Vec::new(),
        })
    }

    /// Build a fleet from a setup document.
    pub fn from_setup(setup: FleetSetup) -> Result<Self> {
        let mut fleet = Self::new(setup.motion)?;
        for ts in &setup.tracks {
            if fleet.track_by_name(&ts.name).is_some() {
                bail!("duplicate track name '{}'", ts.name);
            }
            let track = ts.build()?;
            fleet.add_track(&ts.name, track, ts.placement)?;
        }
        for vs in &setup.vehicles {
            let track = fleet
                .track_by_name(&vs.track)
                .map(|t| t.id)
                .ok_or_else(|| {
                    anyhow!(
                        "vehicle '{}' references unknown track '{}'",
                        vs.name,
                        vs.track
                    )
                })?;
            fleet.add_vehicle(&vs.name, track, vs.start)?;
        }
        Ok(fleet)
    }

    pub fn from_setup_json(s: &str) -> Result<Self> {
        Self::from_setup(FleetSetup::from_json(s)?)
    }

    #[inline]
    pub fn motion(&self) -> &MotionConfig {
        &self.motion
    }

    #[inline]
    pub fn acceleration(&self) -> f64 {
        self.acceleration
    }

    #[inline]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Register a guideway; the track is shared read-only by its vehicles.
    pub fn add_track(
        &mut self,
        name: &str,
        track: impl Into<Arc<Track>>,
        placement: TrackPlacement,
    ) -> Result<TrackId> {
        let id = self
            .ids
            .alloc_track()
            .ok_or_else(|| anyhow!("track ids exhausted, cannot add '{name}'"))?;
        self.tracks.push(RegisteredTrack {
            id,
            name: name.to_string(),
            track: track.into(),
            placement,
        });
        Ok(id)
    }

    pub fn track(&self, id: TrackId) -> Option<&RegisteredTrack> {
        self.tracks.iter().find(|t| t.id == id)
    }

    pub fn track_by_name(&self, name: &str) -> Option<&RegisteredTrack> {
        self.tracks.iter().find(|t| t.name == name)
    }

    /// Place a vehicle at rest at `start` on `track`.
    pub fn add_vehicle(&mut self, name: &str, track: TrackId, start: f64) -> Result<VehicleId> {
        let registered = self
            .track(track)
            .ok_or_else(|| anyhow!("unknown track {:?}", track))?;
        registered
            .track
            .check_progress(start)
            .with_context(|| format!("start position of vehicle '{name}'"))?;
        let id = self
            .ids
            .alloc_vehicle()
            .ok_or_else(|| anyhow!("vehicle ids exhausted, cannot add '{name}'"))?;
        self.vehicles.insert(
            id,
            Vehicle {
                id,
                name: name.to_string(),
                track,
                state: VehicleState::at(start),
            },
        );
        Ok(id)
    }

    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(&id)
    }

    pub fn vehicle_by_name(&self, name: &str) -> Option<&Vehicle> {
        self.vehicles.values().find(|v| v.name == name)
    }

    /// Vehicles in insertion order.
    pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.values()
    }

    /// Apply a host command. Commands naming an unknown vehicle are ignored.
    pub fn apply(&mut self, cmd: FleetCommand) -> Result<()> {
        match cmd {
            FleetCommand::ToggleAcceleration => {
                self.set_acceleration(-self.acceleration);
            }
            FleetCommand::SetAcceleration { acceleration } => {
                if !acceleration.is_finite() {
                    bail!("acceleration must be finite (got {acceleration})");
                }
                self.set_acceleration(acceleration);
            }
            FleetCommand::Seek { vehicle, progress } => {
                let Some(v) = self.vehicles.get_mut(&vehicle) else {
                    log::warn!("seek for unknown vehicle {:?}", vehicle);
                    return Ok(());
                };
                let track = self
                    .tracks
                    .iter()
                    .find(|t| t.id == v.track)
                    .ok_or_else(|| anyhow!("vehicle '{}' lost its track", v.name))?;
                track.track.check_progress(progress)?;
                let from = v.state.progress;
                v.state.progress = progress;
                self.pending.push(FleetEvent::Seeked {
                    vehicle,
                    from,
                    to: progress,
                });
            }
            FleetCommand::Stop { vehicle } => match self.vehicles.get_mut(&vehicle) {
                Some(v) => v.state.velocity = 0.0,
                None => log::warn!("stop for unknown vehicle {:?}", vehicle),
            },
        }
        Ok(())
    }

    fn set_acceleration(&mut self, new: f64) {
        let old = self.acceleration;
        self.acceleration = new;
        log::debug!("fleet acceleration {old} -> {new}");
        self.pending.push(FleetEvent::AccelerationChanged { old, new });
    }

    /// Advance every vehicle by `dt` seconds and compose its pose.
    ///
    /// The tick is all-or-nothing: if any vehicle fails, no state, epoch or
    /// pending event changes.
    pub fn step(&mut self, dt: f64) -> Result<FleetFrame> {
        let mut states = Vec::with_capacity(self.vehicles.len());
        let mut poses = Vec::with_capacity(self.vehicles.len());
        let mut looped = Vec::new();

        for vehicle in self.vehicles.values() {
            let registered = self
                .track(vehicle.track)
                .ok_or_else(|| anyhow!("vehicle '{}' lost its track", vehicle.name))?;
            let mut state = vehicle.state;
            let outcome = advance(
                &mut state,
                &self.motion,
                self.acceleration,
                dt,
                registered.track.total_length(),
            );
            if outcome == Advance::Wrapped {
                log::debug!("vehicle '{}' looped on '{}'", vehicle.name, registered.name);
                looped.push(FleetEvent::Looped {
                    vehicle: vehicle.id,
                });
            }
            poses.push(vehicle_pose(vehicle, state, registered)?);
            states.push(state);
        }

        for (vehicle, state) in self.vehicles.values_mut().zip(states) {
            vehicle.state = state;
        }
        self.epoch = self.epoch.wrapping_add(1);
        let mut events = std::mem::take(&mut self.pending);
        events.extend(looped);

        Ok(FleetFrame {
            epoch: self.epoch,
            dt,
            poses,
            events,
        })
    }

    /// Current poses without advancing time.
    pub fn snapshot(&self) -> Result<Vec<VehiclePose>> {
        self.vehicles
            .values()
            .map(|vehicle| {
                let registered = self
                    .track(vehicle.track)
                    .ok_or_else(|| anyhow!("vehicle '{}' lost its track", vehicle.name))?;
                vehicle_pose(vehicle, vehicle.state, registered)
            })
            .collect()
    }
}

fn vehicle_pose(
    vehicle: &Vehicle,
    state: VehicleState,
    registered: &RegisteredTrack,
) -> Result<VehiclePose> {
    let local: Pose = compose_pose(&registered.track, state.progress)
        .with_context(|| format!("compose pose for vehicle '{}'", vehicle.name))?;
    Ok(VehiclePose {
        vehicle: vehicle.id,
        track: registered.id,
        progress: state.progress,
        velocity: state.velocity,
        local,
        world: registered.placement.apply(&local),
    })
}
