use bevy::prelude::*;

use crate::bridge::{BridgeError, FlightLifecycle, FrameClock};
use crate::controls::{ControlAccumulator, ControlChannel, ControlInputVector};
use crate::conversion::{FlightDisplay, UnitConverter};
use crate::driver::{DriverState, SimulationDriver, SimulationSnapshot};
use crate::fdm::FdmLoader;
use crate::input::{ControlEvent, ControlNormalizer};
use crate::resources::{BridgeConfig, ConfigError};

/// Synchronizes one flight model with the host.
///
/// Inputs accumulate in the working vector between physics ticks; each tick
/// advances the stateful channels, steps the model once and converts the
/// outputs for the host. All getters report the state after the last tick.
#[derive(Resource, Debug)]
pub struct FlightBridge {
    working: ControlInputVector,
    accumulator: ControlAccumulator,
    normalizer: ControlNormalizer,
    driver: SimulationDriver,
    converter: UnitConverter,
    rate_checked: bool,
    shut_down: bool,
    effective: ControlInputVector,
    snapshot: SimulationSnapshot,
    display: FlightDisplay,
    clock: FrameClock,
}

impl FlightBridge {
    /// Bridge driving the built-in point-mass model described by `config`.
    pub fn new(config: &BridgeConfig) -> Result<Self, ConfigError> {
        Self::with_loader(config, Box::new(config.aircraft.clone()))
    }

    /// Fails when `config` does not validate: a bad rate or step would break
    /// the direction and bounds of the accumulated channels.
    pub fn with_loader(
        config: &BridgeConfig,
        loader: Box<dyn FdmLoader>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            working: ControlInputVector::neutral(),
            accumulator: ControlAccumulator::new(config.controls.clone()),
            normalizer: ControlNormalizer::new(config.controls.axis_dead_zone),
            driver: SimulationDriver::new(loader).scripted(config.scripted),
            converter: UnitConverter::new(config.display, config.heading_offset_deg),
            rate_checked: false,
            shut_down: false,
            effective: ControlInputVector::neutral(),
            snapshot: SimulationSnapshot::default(),
            display: FlightDisplay::default(),
            clock: FrameClock::default(),
        })
    }

    // Converted outputs

    pub fn airspeed(&self) -> f64 {
        self.display.airspeed
    }

    pub fn vertical_speed(&self) -> f64 {
        self.display.vertical_speed
    }

    pub fn altitude(&self) -> f64 {
        self.display.altitude
    }

    pub fn heading(&self) -> f64 {
        self.display.heading_deg
    }

    pub fn host_yaw(&self) -> f64 {
        self.display.host_yaw
    }

    pub fn propeller_rpm(&self) -> f64 {
        self.display.propeller_rpm
    }

    pub fn display(&self) -> &FlightDisplay {
        &self.display
    }

    pub fn snapshot(&self) -> &SimulationSnapshot {
        &self.snapshot
    }

    // Working inputs

    pub fn pitch(&self) -> f64 {
        self.working.pitch()
    }

    pub fn roll(&self) -> f64 {
        self.working.roll()
    }

    pub fn rudder(&self) -> f64 {
        self.working.rudder()
    }

    pub fn aileron(&self) -> f64 {
        self.working.aileron()
    }

    pub fn elevator(&self) -> f64 {
        self.working.elevator()
    }

    pub fn throttle(&self) -> f64 {
        self.working.throttle()
    }

    pub fn brake(&self) -> f64 {
        self.working.brake()
    }

    pub fn flaps(&self) -> f64 {
        self.accumulator.flaps()
    }

    pub fn elevator_trim(&self) -> f64 {
        self.accumulator.elevator_trim()
    }

    pub fn controls(&self) -> &ControlInputVector {
        &self.working
    }

    /// The vector handed to the model on the last tick.
    pub fn effective_controls(&self) -> &ControlInputVector {
        &self.effective
    }

    pub fn accumulator(&self) -> &ControlAccumulator {
        &self.accumulator
    }

    pub fn set_pitch(&mut self, value: f64) {
        self.working.set(ControlChannel::Pitch, value);
    }

    pub fn set_roll(&mut self, value: f64) {
        self.working.set(ControlChannel::Roll, value);
    }

    pub fn set_rudder(&mut self, value: f64) {
        self.working.set(ControlChannel::Rudder, value);
    }

    pub fn set_aileron(&mut self, value: f64) {
        self.working.set(ControlChannel::Aileron, value);
    }

    pub fn set_elevator(&mut self, value: f64) {
        self.working.set(ControlChannel::Elevator, value);
    }

    pub fn set_throttle(&mut self, value: f64) {
        self.working.set(ControlChannel::Throttle, value);
    }

    pub fn set_brake(&mut self, value: f64) {
        self.working.set(ControlChannel::Brake, value);
    }

    pub fn set_elevator_trim(&mut self, value: f64) {
        self.accumulator.set_elevator_trim(value);
    }

    pub fn set_trim_up_held(&mut self, held: bool) {
        self.accumulator.set_trim_up_held(held);
    }

    pub fn set_trim_down_held(&mut self, held: bool) {
        self.accumulator.set_trim_down_held(held);
    }

    pub fn set_triggers(&mut self, decrease: f64, increase: f64) {
        self.accumulator.set_decrease_trigger(decrease);
        self.accumulator.set_increase_trigger(increase);
    }

    pub fn increase_flaps(&mut self) {
        self.accumulator.increase_flaps();
    }

    pub fn decrease_flaps(&mut self) {
        self.accumulator.decrease_flaps();
    }

    // Driver

    pub fn state(&self) -> DriverState {
        self.driver.state()
    }

    pub fn ticks(&self) -> u64 {
        self.driver.ticks()
    }

    pub fn simulation_time(&self) -> f64 {
        self.driver.simulation_time()
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn is_scripted(&self) -> bool {
        self.driver.is_scripted()
    }

    /// Whether `shutdown` was called, as opposed to a model failure.
    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Neutral controls and the model's initial conditions.
    pub fn reset(&mut self) -> Result<(), BridgeError> {
        self.driver.reset()?;
        self.reset_controls();
        Ok(())
    }

    /// Release the model. The bridge rejects further ticks.
    pub fn shutdown(&mut self) {
        self.shut_down = true;
        self.driver.terminate();
    }

    /// Warn once when host ticks and model steps run at different rates.
    fn check_rate(&mut self, fixed_delta: f64) {
        if self.rate_checked {
            return;
        }
        self.rate_checked = true;
        let Some(dt) = self.driver.delta_t() else {
            return;
        };
        if (fixed_delta - dt).abs() > 1e-9 {
            warn!(
                "Host physics rate {:.1} Hz differs from flight model rate {:.1} Hz; \
                 simulated time will drift from host time",
                1.0 / fixed_delta,
                1.0 / dt
            );
        }
    }

    fn reset_controls(&mut self) {
        self.working = ControlInputVector::neutral();
        self.accumulator.reset();
        self.effective = self.accumulator.effective(&self.working);
    }
}

impl FlightLifecycle for FlightBridge {
    fn on_ready(&mut self) -> Result<(), BridgeError> {
        self.driver.initialize()?;
        self.reset_controls();
        Ok(())
    }

    fn on_frame(&mut self, delta: f64) {
        self.clock.record_frame(delta);
    }

    fn on_physics_tick(&mut self, fixed_delta: f64) -> Result<(), BridgeError> {
        // Nothing accumulates while the model cannot step
        match self.driver.state() {
            DriverState::Uninitialized => return Err(BridgeError::NotInitialized),
            DriverState::Terminated => return Err(BridgeError::Terminated),
            DriverState::Ready | DriverState::Stepping => {}
        }
        self.check_rate(fixed_delta);

        // Restored if the model rejects the step, so no tick is lost
        let saved = (self.accumulator.clone(), self.working);
        let effective = self.accumulator.tick(&mut self.working);
        match self.driver.step(&effective) {
            Ok(snapshot) => self.snapshot = snapshot,
            Err(err) => {
                (self.accumulator, self.working) = saved;
                return Err(err);
            }
        }
        self.effective = effective;
        self.display = self.converter.convert(&self.snapshot);
        trace!(
            "Tick {}: {:.1} kts, {:.0} ft, {:.1} deg, trim {:+.2}, throttle {:+.3}",
            self.driver.ticks(),
            self.snapshot.airspeed_kts,
            self.snapshot.altitude_ft,
            self.snapshot.heading_deg,
            self.accumulator.trim().elevator_trim(),
            self.accumulator.throttle_state().last_delta()
        );
        Ok(())
    }

    fn on_input_event(&mut self, event: &ControlEvent) {
        self.normalizer
            .apply(event, &mut self.working, &mut self.accumulator);
    }
}
