use crate::fdm::FdmError;

/// Opaque flight dynamics model driven by the bridge.
///
/// The bridge only ever talks to the model through named properties and a
/// fixed-step `run`. The model owns its own clock: every call to `run`
/// advances it by exactly `delta_t` seconds.
pub trait FlightDynamicsModel: Send + Sync {
    /// Apply initial conditions. Called once after loading and again on reset.
    fn initialize(&mut self) -> Result<(), FdmError>;

    /// The model's fixed integration step in seconds.
    fn delta_t(&self) -> f64;

    fn set_property(&mut self, name: &str, value: f64) -> Result<(), FdmError>;

    fn get_property(&self, name: &str) -> Result<f64, FdmError>;

    /// Advance the model by one internal step.
    fn run(&mut self) -> Result<(), FdmError>;

    /// Release any resources held by the model. Called exactly once when the
    /// owning handle is dropped.
    fn release(&mut self) {}
}

/// Constructs a flight dynamics model. Called once per bridge initialisation.
pub trait FdmLoader: Send + Sync {
    fn load(&self) -> Result<Box<dyn FlightDynamicsModel>, FdmError>;
}

impl<F> FdmLoader for F
where
    F: Fn() -> Result<Box<dyn FlightDynamicsModel>, FdmError> + Send + Sync,
{
    fn load(&self) -> Result<Box<dyn FlightDynamicsModel>, FdmError> {
        self()
    }
}
