use serde::{Deserialize, Serialize};

/// Tuning of the stateful control channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlSettings {
    /// Elevator trim change per physics tick while a trim signal is held.
    pub trim_step: f64,
    /// Number of flap detents between fully up and fully down.
    pub flap_detents: u32,
    /// Throttle change per physics tick at full trigger deflection.
    pub throttle_rate: f64,
    /// Axis magnitudes below this value are treated as zero.
    pub axis_dead_zone: f64,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            trim_step: 0.01,
            flap_detents: 3,
            throttle_rate: 0.01,
            axis_dead_zone: 0.05,
        }
    }
}
