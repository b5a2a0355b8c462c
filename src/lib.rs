pub mod bridge;
pub mod controls;
pub mod conversion;
pub mod driver;
pub mod fdm;
pub mod input;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

pub use bridge::{BridgeError, FlightBridge, FlightLifecycle};
pub use plugins::{BridgeFault, BridgeSet, FlightBridgePlugin};
pub use resources::{BridgeConfig, ConfigError};
