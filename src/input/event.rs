use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Logical axis identifiers understood by the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputAxis {
    Pitch,
    Roll,
    Rudder,
    Aileron,
    Elevator,
    Throttle,
    Brake,
    /// Analog trigger closing the throttle, in [0.0, 1.0].
    TriggerDecrease,
    /// Analog trigger opening the throttle, in [0.0, 1.0].
    TriggerIncrease,
    /// Any axis without a control mapping.
    Other(u16),
}

/// Logical button identifiers understood by the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputButton {
    TrimUp,
    TrimDown,
    FlapsIncrease,
    FlapsDecrease,
    Brake,
    /// Any button without a control mapping.
    Other(u16),
}

/// A decoded input event, already scaled by the input layer.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    Axis { axis: InputAxis, value: f64 },
    Button { button: InputButton, pressed: bool },
}

impl ControlEvent {
    pub fn axis(axis: InputAxis, value: f64) -> Self {
        ControlEvent::Axis { axis, value }
    }

    pub fn pressed(button: InputButton) -> Self {
        ControlEvent::Button {
            button,
            pressed: true,
        }
    }

    pub fn released(button: InputButton) -> Self {
        ControlEvent::Button {
            button,
            pressed: false,
        }
    }
}
