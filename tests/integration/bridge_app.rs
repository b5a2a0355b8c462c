use approx::assert_relative_eq;
use bevy::prelude::*;
use flyer_bridge::driver::DriverState;
use flyer_bridge::fdm::properties;
use flyer_bridge::{BridgeConfig, BridgeError, FlightBridge, FlightLifecycle};
use pretty_assertions::assert_eq;

use crate::common::{assert_controls_in_range, assert_display_finite, RecordingLoader, TestAppBuilder};

#[test]
fn test_bridge_starts_ready() {
    let loader = RecordingLoader::new();
    let app = TestAppBuilder::new().with_loader(loader.clone()).build();

    assert_eq!(app.bridge().state(), DriverState::Ready);
    assert_eq!(app.bridge().ticks(), 0);
    assert_eq!(app.should_exit(), None);

    let log = loader.log.lock().unwrap();
    assert_eq!(log.loads, 1);
    assert_eq!(log.initialized, 1);
}

#[test]
fn test_one_step_per_fixed_tick() {
    let loader = RecordingLoader::new();
    let mut app = TestAppBuilder::new().with_loader(loader.clone()).build();

    app.run_frames(4);
    assert_eq!(app.bridge().ticks(), 4);

    // Slow frames carry several fixed ticks each
    app.set_ticks_per_frame(3);
    app.run_frames(2);
    assert_eq!(app.bridge().ticks(), 10);
    assert_eq!(loader.log.lock().unwrap().runs.len(), 10);
    assert_eq!(app.bridge().clock().frames(), 7);
    // The first frame carries no host time
    assert_relative_eq!(app.bridge().clock().elapsed(), 10.0 / 120.0, epsilon = 1e-6);
}

#[test]
fn test_outputs_reach_the_host() {
    let mut app = TestAppBuilder::new()
        .with_loader(RecordingLoader::new())
        .build();
    app.run_frames(2);

    let bridge = app.bridge();
    assert_relative_eq!(bridge.airspeed(), 92.0);
    assert_relative_eq!(bridge.vertical_speed(), 300.0);
    assert_relative_eq!(bridge.altitude(), 2002.0);
    assert_relative_eq!(bridge.heading(), 180.0);
    assert_relative_eq!(bridge.host_yaw(), std::f64::consts::PI, epsilon = 1e-12);
    assert_display_finite(bridge.display());
}

#[test]
fn test_controls_written_before_each_step() {
    let loader = RecordingLoader::new();
    let mut app = TestAppBuilder::new().with_loader(loader.clone()).build();

    {
        let mut bridge = app.bridge_mut();
        bridge.set_elevator(0.5);
        bridge.set_trim_up_held(true);
    }
    app.run_frames(10);

    let bridge = app.bridge();
    assert_relative_eq!(bridge.elevator_trim(), 0.10, epsilon = 1e-9);
    assert_relative_eq!(bridge.effective_controls().elevator(), 0.60, epsilon = 1e-9);

    let log = loader.log.lock().unwrap();
    assert_relative_eq!(
        log.last_run(properties::ELEVATOR_CMD).unwrap(),
        0.60,
        epsilon = 1e-9
    );
}

#[test]
fn test_initialization_failure_requests_exit() {
    let loader = RecordingLoader::new().failing_load();
    let mut app = TestAppBuilder::new().with_loader(loader.clone()).build();

    assert!(matches!(app.should_exit(), Some(AppExit::Error(_))));
    assert_eq!(app.bridge().state(), DriverState::Uninitialized);

    // Ticks are refused without reaching a model, reported once
    app.run_frames(1);
    let faults = app.faults();
    assert_eq!(faults.len(), 1);
    assert_eq!(faults[0].error, BridgeError::NotInitialized);

    app.run_frames(2);
    assert!(app.faults().is_empty());
    assert_eq!(app.bridge().ticks(), 0);
    assert!(loader.log.lock().unwrap().runs.is_empty());
}

#[test]
fn test_bridge_ticked_without_startup_is_reported() {
    let loader = RecordingLoader::new();
    let mut app = TestAppBuilder::new().with_loader(loader.clone()).build();

    // A bridge inserted after startup never sees `on_ready`
    let fresh = FlightBridge::with_loader(&BridgeConfig::default(), Box::new(loader.clone())).unwrap();
    app.app.insert_resource(fresh);

    app.run_frames(1);
    let faults = app.faults();
    assert_eq!(faults.len(), 1);
    assert_eq!(faults[0].tick, 0);
    assert_eq!(faults[0].error, BridgeError::NotInitialized);

    app.run_frames(3);
    assert!(app.faults().is_empty());

    // Reported again only after the bridge has run in between
    app.bridge_mut().on_ready().unwrap();
    app.run_frames(2);
    assert_eq!(app.bridge().ticks(), 2);
    app.bridge_mut().reset().unwrap();
    assert!(app.faults().is_empty());
}

#[test]
fn test_engine_failure_terminates_and_reports() {
    let loader = RecordingLoader::new().failing_on_run(2);
    let mut app = TestAppBuilder::new().with_loader(loader.clone()).build();

    app.run_frames(3);

    assert_eq!(app.bridge().state(), DriverState::Terminated);
    let faults = app.faults();
    assert_eq!(faults.len(), 1);
    assert_eq!(faults[0].tick, 2);
    assert!(matches!(faults[0].error, BridgeError::Engine(_)));
    assert!(loader.log.lock().unwrap().released);

    // No further faults once terminated
    app.run_frames(2);
    assert!(app.faults().is_empty());
    assert_eq!(app.bridge().ticks(), 2);
}

#[test]
fn test_scripted_mode_writes_no_controls() {
    let loader = RecordingLoader::new();
    let config = BridgeConfig {
        scripted: true,
        ..Default::default()
    };
    let mut app = TestAppBuilder::new()
        .with_config(config)
        .with_loader(loader.clone())
        .build();

    app.bridge_mut().set_throttle(1.0);
    app.run_frames(5);

    let log = loader.log.lock().unwrap();
    assert_eq!(log.writes, 0);
    assert_eq!(log.runs.len(), 5);
}

#[test]
fn test_point_mass_departure() {
    let mut app = TestAppBuilder::new().build();
    app.run_frames(1);
    let start_altitude = app.bridge().altitude();

    {
        let mut bridge = app.bridge_mut();
        bridge.set_throttle(1.0);
        bridge.set_elevator(0.4);
    }
    app.run_frames(599);

    let bridge = app.bridge();
    assert_eq!(bridge.ticks(), 600);
    assert_relative_eq!(bridge.simulation_time(), 5.0, epsilon = 1e-9);
    assert!(bridge.altitude() > start_altitude);
    assert!(bridge.vertical_speed() > 0.0);
    assert_controls_in_range(bridge.controls());
    assert_display_finite(bridge.display());
}

#[test]
fn test_reset_and_shutdown() {
    let loader = RecordingLoader::new();
    let mut app = TestAppBuilder::new().with_loader(loader.clone()).build();
    app.run_frames(3);

    app.bridge_mut().reset().unwrap();
    assert_eq!(app.bridge().ticks(), 0);
    assert_eq!(app.bridge().state(), DriverState::Ready);

    app.bridge_mut().shutdown();
    app.run_frames(2);
    assert_eq!(app.bridge().state(), DriverState::Terminated);
    assert!(app.faults().is_empty());
    assert!(loader.log.lock().unwrap().released);
    assert_eq!(loader.log.lock().unwrap().initialized, 2);
}
