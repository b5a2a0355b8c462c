use std::sync::Mutex;

use bevy::input::gamepad::{
    GamepadAxisChangedEvent, GamepadButtonChangedEvent, GamepadButtonStateChangedEvent,
};
use bevy::input::keyboard::KeyboardInput;
use bevy::input::InputSystem;
use bevy::prelude::*;

use crate::bridge::{BridgeError, FlightBridge};
use crate::fdm::FdmLoader;
use crate::input::{ControlEvent, InputBindings};
use crate::resources::{BridgeConfig, ConfigError};
use crate::systems::{
    apply_control_events_system, bridge_frame_system, bridge_physics_system, bridge_ready_system,
    gamepad_axis_system, gamepad_button_system, keyboard_input_system,
};

/// Ordering of the bridge systems within a frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum BridgeSet {
    /// Device events to control events to the working vector (`PreUpdate`).
    Input,
    /// Host frame bookkeeping (`Update`).
    Frame,
    /// One model step per fixed tick (`FixedUpdate`).
    Physics,
}

/// Sent when a physics tick cannot step the flight model: the model failed
/// mid-flight, or the host ticks a bridge that is not running.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct BridgeFault {
    /// Completed ticks before the failure.
    pub tick: u64,
    pub error: BridgeError,
}

/// Plugin wiring a `FlightBridge` into the host schedules.
///
/// Input is applied in `PreUpdate`, so every event received in a frame is seen
/// by that frame's fixed ticks.
pub struct FlightBridgePlugin {
    config: BridgeConfig,
    // Taken once in `build`; plugins are shared by reference
    loader: Mutex<Option<Box<dyn FdmLoader>>>,
}

impl FlightBridgePlugin {
    /// Bridge driving the built-in point-mass model.
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            config,
            loader: Mutex::new(None),
        }
    }

    /// Bridge driving the model produced by `loader`.
    pub fn with_loader(config: BridgeConfig, loader: impl FdmLoader + 'static) -> Self {
        let loader: Box<dyn FdmLoader> = Box::new(loader);
        Self {
            config,
            loader: Mutex::new(Some(loader)),
        }
    }

    fn build_bridge(&self) -> Result<FlightBridge, ConfigError> {
        let loader = self
            .loader
            .lock()
            .ok()
            .and_then(|mut loader| loader.take());
        match loader {
            Some(loader) => FlightBridge::with_loader(&self.config, loader),
            None => FlightBridge::new(&self.config),
        }
    }
}

impl Plugin for FlightBridgePlugin {
    fn build(&self, app: &mut App) {
        // Registered here as well so the plugin runs without `InputPlugin`
        app.add_event::<GamepadAxisChangedEvent>()
            .add_event::<GamepadButtonChangedEvent>()
            .add_event::<GamepadButtonStateChangedEvent>()
            .add_event::<KeyboardInput>()
            .add_event::<ControlEvent>()
            .add_event::<BridgeFault>();

        let bridge = match self.build_bridge() {
            Ok(bridge) => bridge,
            Err(err) => {
                // No bridge systems are added; the app exits on its first update
                error!("Flight bridge configuration rejected: {}", err);
                app.add_systems(Startup, |mut exit: EventWriter<AppExit>| {
                    exit.send(AppExit::error());
                });
                return;
            }
        };

        app.insert_resource(bridge)
            .insert_resource(self.config.clone())
            .init_resource::<InputBindings>()
            .insert_resource(Time::<Fixed>::from_seconds(1.0 / self.config.fixed_rate_hz));

        app.configure_sets(PreUpdate, BridgeSet::Input.after(InputSystem))
            .add_systems(Startup, bridge_ready_system)
            .add_systems(
                PreUpdate,
                (
                    (
                        gamepad_axis_system,
                        gamepad_button_system,
                        keyboard_input_system,
                    ),
                    apply_control_events_system,
                )
                    .chain()
                    .in_set(BridgeSet::Input),
            )
            .add_systems(Update, bridge_frame_system.in_set(BridgeSet::Frame))
            .add_systems(FixedUpdate, bridge_physics_system.in_set(BridgeSet::Physics));

        info!(
            "Flight bridge plugin registered at {:.1} Hz",
            self.config.fixed_rate_hz
        );
    }
}
