pub mod accumulator;
pub mod settings;
pub mod vector;

pub use accumulator::{ControlAccumulator, FlapState, ThrottleState, TrimState};
pub use settings::ControlSettings;
pub use vector::{ControlChannel, ControlInputVector};
