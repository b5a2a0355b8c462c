use std::collections::HashMap;

use bevy::input::gamepad::{GamepadAxis, GamepadButton};
use bevy::prelude::*;

use crate::input::{ControlEvent, InputAxis, InputButton};

/// What a keyboard key drives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyBinding {
    Button(InputButton),
    /// Press writes `value` to the axis, release writes zero.
    Axis(InputAxis, f64),
}

/// Maps physical device inputs to logical control identifiers.
///
/// Anything not bound here produces no `ControlEvent` at all.
#[derive(Resource, Debug, Clone)]
pub struct InputBindings {
    pub axes: HashMap<GamepadAxis, InputAxis>,
    /// Analog buttons (triggers) reported as axes.
    pub analog_buttons: HashMap<GamepadButton, InputAxis>,
    pub buttons: HashMap<GamepadButton, InputButton>,
    pub keys: HashMap<KeyCode, KeyBinding>,
    /// Stick Y axes report up as positive; pulling back should raise the nose.
    pub invert_elevator: bool,
}

impl Default for InputBindings {
    fn default() -> Self {
        let axes = HashMap::from([
            (GamepadAxis::LeftStickX, InputAxis::Aileron),
            (GamepadAxis::LeftStickY, InputAxis::Elevator),
            (GamepadAxis::RightStickX, InputAxis::Rudder),
        ]);
        let analog_buttons = HashMap::from([
            (GamepadButton::LeftTrigger2, InputAxis::TriggerDecrease),
            (GamepadButton::RightTrigger2, InputAxis::TriggerIncrease),
        ]);
        let buttons = HashMap::from([
            (GamepadButton::North, InputButton::TrimUp),
            (GamepadButton::West, InputButton::TrimDown),
            (GamepadButton::RightTrigger, InputButton::FlapsIncrease),
            (GamepadButton::LeftTrigger, InputButton::FlapsDecrease),
            (GamepadButton::South, InputButton::Brake),
        ]);
        let keys = HashMap::from([
            (KeyCode::ArrowUp, KeyBinding::Axis(InputAxis::Elevator, -1.0)),
            (KeyCode::ArrowDown, KeyBinding::Axis(InputAxis::Elevator, 1.0)),
            (KeyCode::ArrowLeft, KeyBinding::Axis(InputAxis::Aileron, -1.0)),
            (KeyCode::ArrowRight, KeyBinding::Axis(InputAxis::Aileron, 1.0)),
            (KeyCode::KeyQ, KeyBinding::Axis(InputAxis::Rudder, -1.0)),
            (KeyCode::KeyE, KeyBinding::Axis(InputAxis::Rudder, 1.0)),
            (KeyCode::PageUp, KeyBinding::Axis(InputAxis::TriggerIncrease, 1.0)),
            (KeyCode::PageDown, KeyBinding::Axis(InputAxis::TriggerDecrease, 1.0)),
            (KeyCode::Home, KeyBinding::Button(InputButton::TrimUp)),
            (KeyCode::End, KeyBinding::Button(InputButton::TrimDown)),
            (KeyCode::KeyF, KeyBinding::Button(InputButton::FlapsIncrease)),
            (KeyCode::KeyV, KeyBinding::Button(InputButton::FlapsDecrease)),
            (KeyCode::KeyB, KeyBinding::Button(InputButton::Brake)),
        ]);

        Self {
            axes,
            analog_buttons,
            buttons,
            keys,
            invert_elevator: true,
        }
    }
}

impl InputBindings {
    /// Bindings with nothing mapped.
    pub fn empty() -> Self {
        Self {
            axes: HashMap::new(),
            analog_buttons: HashMap::new(),
            buttons: HashMap::new(),
            keys: HashMap::new(),
            invert_elevator: false,
        }
    }

    pub fn map_axis(&self, axis: GamepadAxis, value: f32) -> Option<ControlEvent> {
        let target = *self.axes.get(&axis)?;
        let mut value = value as f64;
        if self.invert_elevator && target == InputAxis::Elevator {
            value = -value;
        }
        Some(ControlEvent::axis(target, value))
    }

    pub fn map_analog_button(&self, button: GamepadButton, value: f32) -> Option<ControlEvent> {
        let target = *self.analog_buttons.get(&button)?;
        Some(ControlEvent::axis(target, value as f64))
    }

    pub fn map_button(&self, button: GamepadButton, pressed: bool) -> Option<ControlEvent> {
        let target = *self.buttons.get(&button)?;
        Some(ControlEvent::Button {
            button: target,
            pressed,
        })
    }

    pub fn map_key(&self, key: KeyCode, pressed: bool) -> Option<ControlEvent> {
        match *self.keys.get(&key)? {
            KeyBinding::Button(button) => Some(ControlEvent::Button { button, pressed }),
            KeyBinding::Axis(axis, value) => {
                Some(ControlEvent::axis(axis, if pressed { value } else { 0.0 }))
            }
        }
    }
}
