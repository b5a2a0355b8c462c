use std::path::PathBuf;
use std::time::Duration;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use flyer_bridge::{
    bridge::FlightBridge, driver::DriverState, BridgeConfig, BridgeFault, BridgeSet,
    FlightBridgePlugin,
};

const FLIGHT_SECONDS: f64 = 60.0;

/// Pilot script for a short departure, keyed on simulated time.
#[derive(Resource, Debug, Default)]
struct Departure {
    next_log: u64,
    flaps_set: bool,
    flaps_retracted: bool,
}

fn main() -> AppExit {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()));

    let path = std::env::args().nth(1).map(PathBuf::from);
    let config = match BridgeConfig::load_or_default(path.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            error!("Could not load bridge configuration: {}", err);
            return AppExit::error();
        }
    };

    // Advance host time by exactly one physics step per frame
    let step = Duration::from_secs_f64(1.0 / config.fixed_rate_hz);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(step))
        .add_plugins(FlightBridgePlugin::new(config))
        .init_resource::<Departure>()
        .add_systems(Update, (fly_departure, report_faults).after(BridgeSet::Frame));

    info!("Flying a {:.0} s departure", FLIGHT_SECONDS);
    app.run()
}

fn fly_departure(
    mut bridge: ResMut<FlightBridge>,
    mut departure: ResMut<Departure>,
    mut exit: EventWriter<AppExit>,
) {
    if !matches!(bridge.state(), DriverState::Ready | DriverState::Stepping) {
        return;
    }
    let t = bridge.simulation_time();

    if !departure.flaps_set {
        bridge.increase_flaps();
        bridge.set_triggers(0.0, 1.0);
        departure.flaps_set = true;
    }
    match t {
        t if t < 20.0 => bridge.set_trim_up_held(true),
        t if t < 40.0 => {
            bridge.set_trim_up_held(false);
            bridge.set_rudder(0.3);
        }
        _ => {
            bridge.set_rudder(0.0);
            if !departure.flaps_retracted {
                bridge.decrease_flaps();
                departure.flaps_retracted = true;
            }
        }
    }

    let second = t.floor() as u64;
    if bridge.ticks() > 0 && second >= departure.next_log {
        departure.next_log = second + 1;
        info!(
            "t={:>3}s  ias {:>6.1}  vs {:>7.0}  alt {:>6.0}  hdg {:>5.1}  rpm {:>5.0}  thr {:.2}  trim {:+.2}  flaps {:.2}",
            second,
            bridge.airspeed(),
            bridge.vertical_speed(),
            bridge.altitude(),
            bridge.heading(),
            bridge.propeller_rpm(),
            bridge.throttle(),
            bridge.elevator_trim(),
            bridge.flaps(),
        );
    }

    if t >= FLIGHT_SECONDS {
        bridge.shutdown();
        exit.send(AppExit::Success);
    }
}

fn report_faults(mut faults: EventReader<BridgeFault>, mut exit: EventWriter<AppExit>) {
    for fault in faults.read() {
        error!("Departure aborted at tick {}: {}", fault.tick, fault.error);
        exit.send(AppExit::error());
    }
}
