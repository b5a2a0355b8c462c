use bevy::prelude::*;

use crate::bridge::{BridgeError, FlightBridge, FlightLifecycle};
use crate::plugins::BridgeFault;

/// Brings the flight model up. The app cannot fly without it, so a failure
/// asks the host to exit.
pub fn bridge_ready_system(mut bridge: ResMut<FlightBridge>, mut exit: EventWriter<AppExit>) {
    if let Err(err) = bridge.on_ready() {
        error!("Flight bridge failed to start: {}", err);
        exit.send(AppExit::error());
    }
}

pub fn bridge_frame_system(time: Res<Time>, mut bridge: ResMut<FlightBridge>) {
    bridge.on_frame(time.delta_secs_f64());
}

/// Advances the flight model by one step per host fixed tick.
///
/// A tick the bridge refuses is reported once with a `BridgeFault`, until a
/// tick succeeds again. Ticks after an explicit `shutdown` are expected and
/// stay quiet.
pub fn bridge_physics_system(
    time: Res<Time<Fixed>>,
    mut bridge: ResMut<FlightBridge>,
    mut faults: EventWriter<BridgeFault>,
    mut reported: Local<Option<BridgeError>>,
) {
    let tick = bridge.ticks();
    let err = match bridge.on_physics_tick(time.delta_secs_f64()) {
        Ok(()) => {
            *reported = None;
            return;
        }
        Err(err) => err,
    };

    if reported.as_ref() == Some(&err) {
        trace!("Skipping physics tick: {}", err);
        return;
    }
    match &err {
        BridgeError::Engine(_) => {
            error!("Flight model stopped at tick {}: {}", tick, err);
            // The driver is terminated now; that was this report
            *reported = Some(BridgeError::Terminated);
        }
        BridgeError::Terminated if bridge.is_shut_down() => {
            debug!("Flight bridge shut down, physics ticks are ignored");
            *reported = Some(err.clone());
            return;
        }
        _ => {
            error!("Flight bridge refused physics tick {}: {}", tick, err);
            *reported = Some(err.clone());
        }
    }
    faults.send(BridgeFault { tick, error: err });
}
