use std::io::Write;
use std::time::Duration;

use approx::assert_relative_eq;
use bevy::prelude::*;
use flyer_bridge::conversion::{AltitudeUnit, SpeedUnit};
use flyer_bridge::{bridge::FlightBridge, BridgeConfig, FlightBridgePlugin};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

use crate::common::{RecordingLoader, TestAppBuilder};

const METRIC_CONFIG: &str = r#"
fixed_rate_hz: 60.0
heading_offset_deg: 90.0
display:
  airspeed: meters_per_second
  vertical_speed: meters_per_second
  altitude: meters
controls:
  trim_step: 0.02
"#;

#[test]
fn test_config_file_drives_the_app() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(METRIC_CONFIG.as_bytes()).unwrap();

    let config = BridgeConfig::from_file(file.path()).unwrap();
    assert_eq!(config.display.airspeed, SpeedUnit::MetersPerSecond);
    assert_eq!(config.display.altitude, AltitudeUnit::Meters);

    let loader = RecordingLoader::new().with_delta_t(1.0 / 60.0);
    let mut app = TestAppBuilder::new()
        .with_config(config)
        .with_loader(loader)
        .build();

    let fixed = app.app.world().resource::<Time<Fixed>>();
    assert_eq!(fixed.timestep(), Duration::from_secs_f64(1.0 / 60.0));

    app.bridge_mut().set_trim_up_held(true);
    app.run_frames(5);

    let bridge = app.bridge();
    assert_eq!(bridge.ticks(), 5);
    assert_relative_eq!(bridge.elevator_trim(), 0.10, epsilon = 1e-9);
    // Recording model: 95 kts, 5 ft/s, 2005 ft, heading 180
    assert_relative_eq!(bridge.airspeed(), 95.0 * 1852.0 / 3600.0, epsilon = 1e-9);
    assert_relative_eq!(bridge.vertical_speed(), 1.524, epsilon = 1e-9);
    assert_relative_eq!(bridge.altitude(), 2005.0 * 0.3048, epsilon = 1e-9);
    assert_relative_eq!(bridge.heading(), 270.0);
}

#[test]
fn test_rate_mismatch_still_steps_per_tick() {
    // Host at 60 Hz, model at 120 Hz: one model step per host tick regardless
    let config = BridgeConfig {
        fixed_rate_hz: 60.0,
        ..Default::default()
    };
    let mut app = TestAppBuilder::new()
        .with_config(config)
        .with_loader(RecordingLoader::new())
        .build();

    app.run_frames(6);
    assert_eq!(app.bridge().ticks(), 6);
    assert_relative_eq!(app.bridge().simulation_time(), 0.05, epsilon = 1e-12);
}

#[test]
fn test_invalid_config_requests_exit() {
    let loader = RecordingLoader::new();
    let config = BridgeConfig {
        fixed_rate_hz: 0.0,
        ..Default::default()
    };

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(FlightBridgePlugin::with_loader(config, loader.clone()));
    app.update();

    assert!(matches!(app.should_exit(), Some(AppExit::Error(_))));
    assert!(app.world().get_resource::<FlightBridge>().is_none());
    assert_eq!(loader.log.lock().unwrap().loads, 0);
}
