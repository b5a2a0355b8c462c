use bevy::input::gamepad::{
    GamepadAxisChangedEvent, GamepadButtonChangedEvent, GamepadButtonStateChangedEvent,
};
use bevy::input::keyboard::KeyboardInput;
use bevy::input::ButtonState;
use bevy::prelude::*;

use crate::bridge::{FlightBridge, FlightLifecycle};
use crate::input::{ControlEvent, InputBindings};

/// Translates gamepad stick movement into control events.
pub fn gamepad_axis_system(
    mut axis_events: EventReader<GamepadAxisChangedEvent>,
    bindings: Res<InputBindings>,
    mut controls: EventWriter<ControlEvent>,
) {
    for event in axis_events.read() {
        match bindings.map_axis(event.axis, event.value) {
            Some(control) => {
                controls.send(control);
            }
            None => trace!("Unbound gamepad axis {:?}", event.axis),
        }
    }
}

/// Translates gamepad buttons into control events.
///
/// Analog buttons (the triggers) report their deflection; everything else
/// reports press and release edges.
pub fn gamepad_button_system(
    mut analog_events: EventReader<GamepadButtonChangedEvent>,
    mut state_events: EventReader<GamepadButtonStateChangedEvent>,
    bindings: Res<InputBindings>,
    mut controls: EventWriter<ControlEvent>,
) {
    for event in analog_events.read() {
        if let Some(control) = bindings.map_analog_button(event.button, event.value) {
            controls.send(control);
        }
    }

    for event in state_events.read() {
        let pressed = event.state == ButtonState::Pressed;
        match bindings.map_button(event.button, pressed) {
            Some(control) => {
                controls.send(control);
            }
            None if !bindings.analog_buttons.contains_key(&event.button) => {
                trace!("Unbound gamepad button {:?}", event.button)
            }
            None => {}
        }
    }
}

/// Translates keyboard presses into control events. Key repeats are dropped so
/// a held key produces one press edge.
pub fn keyboard_input_system(
    mut key_events: EventReader<KeyboardInput>,
    bindings: Res<InputBindings>,
    mut controls: EventWriter<ControlEvent>,
) {
    for event in key_events.read() {
        if event.repeat {
            continue;
        }
        let pressed = event.state == ButtonState::Pressed;
        if let Some(control) = bindings.map_key(event.key_code, pressed) {
            controls.send(control);
        }
    }
}

/// Feeds this frame's control events to the bridge, in arrival order.
pub fn apply_control_events_system(
    mut events: EventReader<ControlEvent>,
    mut bridge: ResMut<FlightBridge>,
) {
    for event in events.read() {
        bridge.on_input_event(event);
    }
}
