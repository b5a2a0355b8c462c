pub mod error;
pub mod point_mass;
pub mod properties;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;

pub use error::FdmError;
pub use point_mass::{InitialConditions, PointMassConfig, PointMassFdm};
pub use traits::{FdmLoader, FlightDynamicsModel};
