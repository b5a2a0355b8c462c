use serde::{Deserialize, Serialize};

use crate::utils::{saturate, BIPOLAR_RANGE, UNIPOLAR_RANGE};

/// A single channel of the control input vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlChannel {
    Pitch,
    Roll,
    Rudder,
    Aileron,
    Elevator,
    Throttle,
    Flaps,
    Brake,
}

impl ControlChannel {
    pub const ALL: [ControlChannel; 8] = [
        ControlChannel::Pitch,
        ControlChannel::Roll,
        ControlChannel::Rudder,
        ControlChannel::Aileron,
        ControlChannel::Elevator,
        ControlChannel::Throttle,
        ControlChannel::Flaps,
        ControlChannel::Brake,
    ];

    /// Closed range of valid values for this channel.
    pub fn range(self) -> (f64, f64) {
        match self {
            ControlChannel::Pitch
            | ControlChannel::Roll
            | ControlChannel::Rudder
            | ControlChannel::Aileron
            | ControlChannel::Elevator => BIPOLAR_RANGE,
            ControlChannel::Throttle | ControlChannel::Flaps | ControlChannel::Brake => {
                UNIPOLAR_RANGE
            }
        }
    }
}

/// Normalised pilot control inputs.
///
/// Every channel always lies inside its `ControlChannel::range`: writes are
/// saturated at the bounds and NaN writes leave the channel untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlInputVector {
    pitch: f64,
    roll: f64,
    rudder: f64,
    aileron: f64,
    elevator: f64,
    throttle: f64,
    flaps: f64,
    brake: f64,
}

impl ControlInputVector {
    /// All channels neutral: surfaces centred, throttle idle, flaps up, brakes off.
    pub fn neutral() -> Self {
        Self::default()
    }

    pub fn get(&self, channel: ControlChannel) -> f64 {
        match channel {
            ControlChannel::Pitch => self.pitch,
            ControlChannel::Roll => self.roll,
            ControlChannel::Rudder => self.rudder,
            ControlChannel::Aileron => self.aileron,
            ControlChannel::Elevator => self.elevator,
            ControlChannel::Throttle => self.throttle,
            ControlChannel::Flaps => self.flaps,
            ControlChannel::Brake => self.brake,
        }
    }

    /// Write a channel, clamped to its range. Returns the stored value.
    pub fn set(&mut self, channel: ControlChannel, value: f64) -> f64 {
        let slot = match channel {
            ControlChannel::Pitch => &mut self.pitch,
            ControlChannel::Roll => &mut self.roll,
            ControlChannel::Rudder => &mut self.rudder,
            ControlChannel::Aileron => &mut self.aileron,
            ControlChannel::Elevator => &mut self.elevator,
            ControlChannel::Throttle => &mut self.throttle,
            ControlChannel::Flaps => &mut self.flaps,
            ControlChannel::Brake => &mut self.brake,
        };
        if let Some(value) = saturate(value, channel.range()) {
            *slot = value;
        }
        *slot
    }

    pub fn with(mut self, channel: ControlChannel, value: f64) -> Self {
        self.set(channel, value);
        self
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    pub fn roll(&self) -> f64 {
        self.roll
    }

    pub fn rudder(&self) -> f64 {
        self.rudder
    }

    pub fn aileron(&self) -> f64 {
        self.aileron
    }

    pub fn elevator(&self) -> f64 {
        self.elevator
    }

    pub fn throttle(&self) -> f64 {
        self.throttle
    }

    pub fn flaps(&self) -> f64 {
        self.flaps
    }

    pub fn brake(&self) -> f64 {
        self.brake
    }

    /// True when every channel is inside its declared range.
    pub fn in_range(&self) -> bool {
        ControlChannel::ALL.iter().all(|&channel| {
            let (min, max) = channel.range();
            let value = self.get(channel);
            value >= min && value <= max
        })
    }
}
