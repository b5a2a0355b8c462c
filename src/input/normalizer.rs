use bevy::prelude::*;

use crate::controls::{ControlAccumulator, ControlChannel, ControlInputVector};
use crate::input::{ControlEvent, InputAxis, InputButton};

/// Routes decoded input events onto exactly one control channel.
///
/// The normalizer only assigns: values are expected to be pre-scaled by the
/// input layer. Magnitudes inside the dead zone snap to zero and clamping is
/// left to the channel setters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlNormalizer {
    dead_zone: f64,
}

impl Default for ControlNormalizer {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl ControlNormalizer {
    pub fn new(dead_zone: f64) -> Self {
        Self {
            dead_zone: if dead_zone.is_finite() {
                dead_zone.clamp(0.0, 1.0)
            } else {
                0.0
            },
        }
    }

    pub fn apply(
        &self,
        event: &ControlEvent,
        working: &mut ControlInputVector,
        accumulator: &mut ControlAccumulator,
    ) {
        match *event {
            ControlEvent::Axis { axis, value } => {
                if value.is_nan() {
                    trace!("Ignoring NaN value on {:?}", axis);
                    return;
                }
                let value = self.filter(value);
                match axis {
                    InputAxis::Pitch => {
                        working.set(ControlChannel::Pitch, value);
                    }
                    InputAxis::Roll => {
                        working.set(ControlChannel::Roll, value);
                    }
                    InputAxis::Rudder => {
                        working.set(ControlChannel::Rudder, value);
                    }
                    InputAxis::Aileron => {
                        working.set(ControlChannel::Aileron, value);
                    }
                    InputAxis::Elevator => {
                        working.set(ControlChannel::Elevator, value);
                    }
                    InputAxis::Throttle => {
                        working.set(ControlChannel::Throttle, value);
                    }
                    InputAxis::Brake => {
                        working.set(ControlChannel::Brake, value);
                    }
                    InputAxis::TriggerDecrease => accumulator.set_decrease_trigger(value),
                    InputAxis::TriggerIncrease => accumulator.set_increase_trigger(value),
                    InputAxis::Other(id) => trace!("Ignoring unmapped axis {}", id),
                }
            }
            ControlEvent::Button { button, pressed } => match button {
                InputButton::TrimUp => accumulator.set_trim_up_held(pressed),
                InputButton::TrimDown => accumulator.set_trim_down_held(pressed),
                InputButton::FlapsIncrease if pressed => accumulator.increase_flaps(),
                InputButton::FlapsDecrease if pressed => accumulator.decrease_flaps(),
                InputButton::FlapsIncrease | InputButton::FlapsDecrease => {}
                InputButton::Brake => {
                    working.set(ControlChannel::Brake, if pressed { 1.0 } else { 0.0 });
                }
                InputButton::Other(id) => trace!("Ignoring unmapped button {}", id),
            },
        }
    }

    fn filter(&self, value: f64) -> f64 {
        if value.abs() < self.dead_zone {
            0.0
        } else {
            value
        }
    }
}
