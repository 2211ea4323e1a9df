use prt_fleet::{Fleet, FleetCommand, FleetEvent};
use prt_track_core::{presets, MotionConfig, TrackPlacement};
use serde_json::to_string_pretty;

fn main() -> anyhow::Result<()> {
    let mut fleet = Fleet::new(MotionConfig::default())?;
    let outbound = fleet.add_track(
        "outbound",
        presets::prt_outbound()?,
        TrackPlacement::new([0.0, 0.5, 1.25], 90.0, 2.0),
    )?;
    let inbound = fleet.add_track(
        "return",
        presets::prt_return()?,
        TrackPlacement::new([-58.0, 0.5, -59.6], 270.0, 2.0),
    )?;
    fleet.add_vehicle("car-1", outbound, 0.0)?;
    fleet.add_vehicle("car-2", inbound, 3.0)?;

    // Run 40 simulated seconds at 60 Hz, braking halfway through.
    let dt = 1.0 / 60.0;
    for tick in 0..(60 * 40) {
        if tick == 60 * 20 {
            fleet.apply(FleetCommand::ToggleAcceleration)?;
        }
        let frame = fleet.step(dt)?;
        for event in &frame.events {
            if let FleetEvent::Looped { vehicle } = event {
                println!("epoch {}: {:?} looped", frame.epoch, vehicle);
            }
        }
        if tick % 600 == 0 {
            println!("{}", to_string_pretty(&frame.poses)?);
        }
    }
    Ok(())
}
