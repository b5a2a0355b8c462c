//! Property names of the flight dynamics model contract.
//!
//! Names follow the JSBSim property tree. Control commands are normalised
//! values, outputs are in the model's native units.

// Control commands
pub const ELEVATOR_CMD: &str = "fcs/elevator-cmd-norm";
pub const AILERON_CMD: &str = "fcs/aileron-cmd-norm";
pub const RUDDER_CMD: &str = "fcs/rudder-cmd-norm";
pub const THROTTLE_CMD: &str = "fcs/throttle-cmd-norm";
pub const FLAP_CMD: &str = "fcs/flap-cmd-norm";
pub const LEFT_BRAKE_CMD: &str = "fcs/left-brake-cmd-norm";
pub const RIGHT_BRAKE_CMD: &str = "fcs/right-brake-cmd-norm";

// Outputs
pub const CALIBRATED_AIRSPEED_KTS: &str = "velocities/vc-kts";
pub const VERTICAL_SPEED_FPS: &str = "velocities/h-dot-fps";
pub const ALTITUDE_SL_FT: &str = "position/h-sl-ft";
pub const HEADING_DEG: &str = "attitude/psi-deg";
pub const PROPELLER_RPM: &str = "propulsion/engine/propeller-rpm";

pub const CONTROL_PROPERTIES: [&str; 7] = [
    ELEVATOR_CMD,
    AILERON_CMD,
    RUDDER_CMD,
    THROTTLE_CMD,
    FLAP_CMD,
    LEFT_BRAKE_CMD,
    RIGHT_BRAKE_CMD,
];

pub const OUTPUT_PROPERTIES: [&str; 5] = [
    CALIBRATED_AIRSPEED_KTS,
    VERTICAL_SPEED_FPS,
    ALTITUDE_SL_FT,
    HEADING_DEG,
    PROPELLER_RPM,
];

// Simulation clock
pub const SIM_TIME_SEC: &str = "simulation/sim-time-sec";
