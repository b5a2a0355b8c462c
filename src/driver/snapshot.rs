use serde::{Deserialize, Serialize};

/// Raw outputs read back from the flight model after a step, in the model's
/// native units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    /// Calibrated airspeed (kts).
    pub airspeed_kts: f64,
    /// Rate of climb (ft/s).
    pub vertical_speed_fps: f64,
    /// Altitude above sea level (ft).
    pub altitude_ft: f64,
    /// True heading, clockwise from north (deg).
    pub heading_deg: f64,
    pub propeller_rpm: f64,
}
