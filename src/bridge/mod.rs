mod clock;
mod error;
mod flight;
mod lifecycle;

pub use clock::FrameClock;
pub use error::BridgeError;
pub use flight::FlightBridge;
pub use lifecycle::FlightLifecycle;
