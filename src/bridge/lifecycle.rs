use crate::bridge::BridgeError;
use crate::input::ControlEvent;

/// Entry points the host invokes on the bridge.
///
/// `on_frame` is variable-rate host bookkeeping and never advances the model.
/// `on_physics_tick` runs at the host's fixed rate and advances it by exactly
/// one step. Input events are applied before the next physics tick.
pub trait FlightLifecycle {
    fn on_ready(&mut self) -> Result<(), BridgeError>;

    fn on_frame(&mut self, delta: f64);

    fn on_physics_tick(&mut self, fixed_delta: f64) -> Result<(), BridgeError>;

    fn on_input_event(&mut self, event: &ControlEvent);
}
