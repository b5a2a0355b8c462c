mod bridge;

pub use bridge::{BridgeFault, BridgeSet, FlightBridgePlugin};
