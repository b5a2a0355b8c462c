mod handle;
mod snapshot;
mod stepping;

pub use handle::FdmHandle;
pub use snapshot::SimulationSnapshot;
pub use stepping::{DriverState, SimulationDriver};
