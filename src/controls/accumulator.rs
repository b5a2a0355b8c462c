use bevy::prelude::*;

use crate::controls::{ControlChannel, ControlInputVector, ControlSettings};
use crate::utils::{saturate, BIPOLAR_RANGE, UNIPOLAR_RANGE};

/// Persistent elevator trim. Not spring-centred: it holds its value while no
/// trim signal is held.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrimState {
    elevator_trim: f64,
    up_held: bool,
    down_held: bool,
}

impl TrimState {
    pub fn elevator_trim(&self) -> f64 {
        self.elevator_trim
    }

    pub fn up_held(&self) -> bool {
        self.up_held
    }

    pub fn down_held(&self) -> bool {
        self.down_held
    }

    /// Apply one tick of trim. Up is applied before down, so holding both
    /// signals nets to zero away from the bounds and backs off the bound
    /// when the trim is saturated at +1.0.
    fn tick(&mut self, step: f64) {
        if self.up_held {
            self.elevator_trim = clamp_or_keep(self.elevator_trim + step, self.elevator_trim, BIPOLAR_RANGE);
        }
        if self.down_held {
            self.elevator_trim = clamp_or_keep(self.elevator_trim - step, self.elevator_trim, BIPOLAR_RANGE);
        }
    }
}

/// Detented flap lever.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlapState {
    detent: u32,
    detents: u32,
}

impl FlapState {
    pub fn new(detents: u32) -> Self {
        Self {
            detent: 0,
            detents: detents.max(1),
        }
    }

    /// Flap position in [0.0, 1.0].
    pub fn flaps(&self) -> f64 {
        self.detent as f64 / self.detents as f64
    }

    fn increase(&mut self) {
        self.detent = (self.detent + 1).min(self.detents);
    }

    fn decrease(&mut self) {
        self.detent = self.detent.saturating_sub(1);
    }
}

/// Trigger positions driving the throttle rate.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThrottleState {
    decrease_trigger: f64,
    increase_trigger: f64,
    last_delta: f64,
}

impl ThrottleState {
    pub fn decrease_trigger(&self) -> f64 {
        self.decrease_trigger
    }

    pub fn increase_trigger(&self) -> f64 {
        self.increase_trigger
    }

    /// Throttle change applied on the most recent tick.
    pub fn last_delta(&self) -> f64 {
        self.last_delta
    }
}

/// Owns the control channels that integrate over ticks or step on discrete
/// commands, and merges them with the instantaneous pilot inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlAccumulator {
    settings: ControlSettings,
    trim: TrimState,
    flaps: FlapState,
    throttle: ThrottleState,
}

impl Default for ControlAccumulator {
    fn default() -> Self {
        Self::new(ControlSettings::default())
    }
}

impl ControlAccumulator {
    pub fn new(settings: ControlSettings) -> Self {
        let flaps = FlapState::new(settings.flap_detents);
        Self {
            settings,
            trim: TrimState::default(),
            flaps,
            throttle: ThrottleState::default(),
        }
    }

    pub fn trim(&self) -> &TrimState {
        &self.trim
    }

    pub fn throttle_state(&self) -> &ThrottleState {
        &self.throttle
    }

    pub fn elevator_trim(&self) -> f64 {
        self.trim.elevator_trim
    }

    pub fn flaps(&self) -> f64 {
        self.flaps.flaps()
    }

    pub fn set_trim_up_held(&mut self, held: bool) {
        self.trim.up_held = held;
    }

    pub fn set_trim_down_held(&mut self, held: bool) {
        self.trim.down_held = held;
    }

    /// Set the trim directly, clamped to [-1.0, 1.0].
    pub fn set_elevator_trim(&mut self, value: f64) {
        self.trim.elevator_trim = clamp_or_keep(value, self.trim.elevator_trim, BIPOLAR_RANGE);
    }

    pub fn set_decrease_trigger(&mut self, value: f64) {
        self.throttle.decrease_trigger =
            clamp_or_keep(value, self.throttle.decrease_trigger, UNIPOLAR_RANGE);
    }

    pub fn set_increase_trigger(&mut self, value: f64) {
        self.throttle.increase_trigger =
            clamp_or_keep(value, self.throttle.increase_trigger, UNIPOLAR_RANGE);
    }

    /// Move the flaps down one detent. No-op when fully down.
    pub fn increase_flaps(&mut self) {
        self.flaps.increase();
        debug!("Flaps {:.2}", self.flaps.flaps());
    }

    /// Move the flaps up one detent. No-op when fully up.
    pub fn decrease_flaps(&mut self) {
        self.flaps.decrease();
        debug!("Flaps {:.2}", self.flaps.flaps());
    }

    /// Back to neutral: trim centred, flaps up, triggers released.
    pub fn reset(&mut self) {
        self.trim = TrimState::default();
        self.flaps = FlapState::new(self.settings.flap_detents);
        self.throttle = ThrottleState::default();
    }

    /// Advance the stateful channels by one physics tick.
    ///
    /// Updates the held throttle and flap position in `working` and returns the
    /// effective vector handed to the flight model, where the elevator carries
    /// pitch input and trim and the aileron carries roll input.
    pub fn tick(&mut self, working: &mut ControlInputVector) -> ControlInputVector {
        self.trim.tick(self.settings.trim_step);

        let delta = (self.throttle.increase_trigger - self.throttle.decrease_trigger)
            * self.settings.throttle_rate;
        self.throttle.last_delta = delta;
        if delta != 0.0 {
            working.set(ControlChannel::Throttle, working.throttle() + delta);
        }

        working.set(ControlChannel::Flaps, self.flaps.flaps());

        self.effective(working)
    }

    /// The vector the flight model sees for the given working inputs, without
    /// advancing any state.
    pub fn effective(&self, working: &ControlInputVector) -> ControlInputVector {
        let mut effective = *working;
        effective.set(
            ControlChannel::Elevator,
            working.elevator() + working.pitch() + self.trim.elevator_trim,
        );
        effective.set(ControlChannel::Aileron, working.aileron() + working.roll());
        effective.set(ControlChannel::Flaps, self.flaps.flaps());
        effective
    }
}

fn clamp_or_keep(value: f64, previous: f64, range: (f64, f64)) -> f64 {
    saturate(value, range).unwrap_or(previous)
}
