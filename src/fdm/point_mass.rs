use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::fdm::{properties, FdmError, FdmLoader, FlightDynamicsModel};
use crate::utils::{deg_to_rad, first_order_lag, rad_to_deg, wrap_degrees, GRAVITY, KNOTS_TO_METERS_PER_SECOND};

/// Minimum airspeed for which a bank angle produces a turn (kts).
const MIN_TURN_AIRSPEED_KTS: f64 = 1.0;
/// Time constant of the vertical speed response (s).
const VERTICAL_RESPONSE_TIME: f64 = 1.0;

/// Starting state of the point-mass model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialConditions {
    pub airspeed_kts: f64,
    pub altitude_ft: f64,
    pub heading_deg: f64,
    pub propeller_rpm: f64,
}

impl Default for InitialConditions {
    fn default() -> Self {
        Self {
            airspeed_kts: 100.0,
            altitude_ft: 3000.0,
            heading_deg: 0.0,
            propeller_rpm: 2300.0,
        }
    }
}

/// Configuration of the built-in point-mass flight model.
///
/// Default values approximate a Cessna 172 in cruise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointMassConfig {
    pub name: String,
    /// Fixed integration step (s).
    pub delta_t: f64,
    pub idle_rpm: f64,
    pub max_rpm: f64,
    /// Engine spool time constant (s).
    pub spool_time: f64,
    /// Longitudinal acceleration at full power (kts/s).
    pub max_thrust_accel: f64,
    /// Drag deceleration per knot squared (kts/s / kt^2).
    pub drag_coefficient: f64,
    /// Additional drag fraction at full flaps.
    pub flap_drag_factor: f64,
    pub stall_speed_kts: f64,
    /// Stall speed reduction at full flaps (kts).
    pub flap_stall_reduction_kts: f64,
    /// Climb rate at full elevator (ft/s).
    pub max_climb_rate_fps: f64,
    /// Sink rate below the stall speed (ft/s).
    pub stall_sink_rate_fps: f64,
    /// Airspeed exchanged per unit of climb rate (kts/s per ft/s).
    pub climb_speed_penalty: f64,
    pub max_bank_deg: f64,
    /// Bank response time constant (s).
    pub roll_time: f64,
    /// Yaw rate at full rudder (deg/s).
    pub rudder_yaw_rate_dps: f64,
    /// Deceleration at full brakes on the ground (kts/s).
    pub brake_decel_kts: f64,
    pub ground_elevation_ft: f64,
    pub initial: InitialConditions,
}

impl Default for PointMassConfig {
    fn default() -> Self {
        Self {
            name: "Cessna 172".to_string(),
            delta_t: 1.0 / 120.0,
            idle_rpm: 600.0,
            max_rpm: 2700.0,
            spool_time: 1.0,
            max_thrust_accel: 6.0,
            drag_coefficient: 4.2e-4,
            flap_drag_factor: 0.6,
            stall_speed_kts: 48.0,
            flap_stall_reduction_kts: 8.0,
            max_climb_rate_fps: 12.0,
            stall_sink_rate_fps: 15.0,
            climb_speed_penalty: 0.05,
            max_bank_deg: 45.0,
            roll_time: 0.5,
            rudder_yaw_rate_dps: 3.0,
            brake_decel_kts: 8.0,
            ground_elevation_ft: 0.0,
            initial: InitialConditions::default(),
        }
    }
}

impl PointMassConfig {
    pub fn validate(&self) -> Result<(), FdmError> {
        if !self.delta_t.is_finite() || self.delta_t <= 0.0 {
            return Err(FdmError::InvalidTimestep(self.delta_t));
        }
        if self.idle_rpm < 0.0 || self.max_rpm <= self.idle_rpm {
            return Err(FdmError::ConfigError(format!(
                "max_rpm ({}) must exceed idle_rpm ({})",
                self.max_rpm, self.idle_rpm
            )));
        }
        if self.stall_speed_kts <= self.flap_stall_reduction_kts {
            return Err(FdmError::ConfigError(format!(
                "stall_speed_kts ({}) must exceed flap_stall_reduction_kts ({})",
                self.stall_speed_kts, self.flap_stall_reduction_kts
            )));
        }
        let non_negative = [
            ("spool_time", self.spool_time),
            ("max_thrust_accel", self.max_thrust_accel),
            ("drag_coefficient", self.drag_coefficient),
            ("flap_drag_factor", self.flap_drag_factor),
            ("max_climb_rate_fps", self.max_climb_rate_fps),
            ("stall_sink_rate_fps", self.stall_sink_rate_fps),
            ("roll_time", self.roll_time),
            ("brake_decel_kts", self.brake_decel_kts),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(FdmError::ConfigError(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        if !(0.0..90.0).contains(&self.max_bank_deg) {
            return Err(FdmError::ConfigError(format!(
                "max_bank_deg must be in [0, 90), got {}",
                self.max_bank_deg
            )));
        }
        if self.initial.altitude_ft < self.ground_elevation_ft {
            return Err(FdmError::InitialConditions(format!(
                "initial altitude {} ft is below ground elevation {} ft",
                self.initial.altitude_ft, self.ground_elevation_ft
            )));
        }
        Ok(())
    }
}

impl FdmLoader for PointMassConfig {
    fn load(&self) -> Result<Box<dyn FlightDynamicsModel>, FdmError> {
        Ok(Box::new(PointMassFdm::new(self.clone())?))
    }
}

/// Normalised commands as last written through the property interface.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Commands {
    elevator: f64,
    aileron: f64,
    rudder: f64,
    throttle: f64,
    flaps: f64,
    left_brake: f64,
    right_brake: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct PointMassState {
    airspeed_kts: f64,
    altitude_ft: f64,
    vertical_speed_fps: f64,
    heading_deg: f64,
    bank_deg: f64,
    rpm: f64,
    sim_time: f64,
}

/// Kinematic point-mass aircraft in JSBSim-style native units.
///
/// Positive elevator commands a climb, positive aileron a right bank. The
/// model is deterministic: the same command sequence always produces the
/// same state sequence.
#[derive(Debug, Clone)]
pub struct PointMassFdm {
    config: PointMassConfig,
    commands: Commands,
    state: PointMassState,
}

impl PointMassFdm {
    pub fn new(config: PointMassConfig) -> Result<Self, FdmError> {
        config.validate()?;
        info!("Loaded point-mass flight model '{}'", config.name);
        Ok(Self {
            config,
            commands: Commands::default(),
            state: PointMassState::default(),
        })
    }

    fn on_ground(&self) -> bool {
        self.state.altitude_ft <= self.config.ground_elevation_ft
    }

    fn update_propulsion(&mut self, dt: f64) -> f64 {
        let cfg = &self.config;
        let target_rpm = cfg.idle_rpm + self.commands.throttle * (cfg.max_rpm - cfg.idle_rpm);
        self.state.rpm = first_order_lag(self.state.rpm, target_rpm, cfg.spool_time, dt);

        let power = ((self.state.rpm - cfg.idle_rpm) / (cfg.max_rpm - cfg.idle_rpm)).clamp(0.0, 1.0);
        cfg.max_thrust_accel * power
    }

    fn update_airspeed(&mut self, thrust: f64, dt: f64) {
        let cfg = &self.config;
        let v = self.state.airspeed_kts;
        let drag = cfg.drag_coefficient * v * v * (1.0 + cfg.flap_drag_factor * self.commands.flaps);
        let brake = if self.on_ground() {
            cfg.brake_decel_kts * 0.5 * (self.commands.left_brake + self.commands.right_brake)
        } else {
            0.0
        };
        let climb = cfg.climb_speed_penalty * self.state.vertical_speed_fps;

        self.state.airspeed_kts = (v + (thrust - drag - brake - climb) * dt).max(0.0);
    }

    fn update_vertical(&mut self, dt: f64) {
        let cfg = &self.config;
        let stall = cfg.stall_speed_kts - cfg.flap_stall_reduction_kts * self.commands.flaps;
        let v = self.state.airspeed_kts;

        let target_vs = if v < stall {
            -cfg.stall_sink_rate_fps
        } else {
            let authority = ((v - stall) / stall).min(1.0);
            cfg.max_climb_rate_fps * self.commands.elevator * authority
        };

        self.state.vertical_speed_fps = first_order_lag(
            self.state.vertical_speed_fps,
            target_vs,
            VERTICAL_RESPONSE_TIME,
            dt,
        );
        self.state.altitude_ft += self.state.vertical_speed_fps * dt;

        if self.state.altitude_ft <= cfg.ground_elevation_ft {
            self.state.altitude_ft = cfg.ground_elevation_ft;
            self.state.vertical_speed_fps = self.state.vertical_speed_fps.max(0.0);
        }
    }

    fn update_lateral(&mut self, dt: f64) {
        let cfg = &self.config;
        let target_bank = if self.on_ground() {
            0.0
        } else {
            self.commands.aileron * cfg.max_bank_deg
        };
        self.state.bank_deg = first_order_lag(self.state.bank_deg, target_bank, cfg.roll_time, dt);

        // Coordinated turn: omega = g * tan(phi) / V
        let bank_turn_rate = if self.state.airspeed_kts > MIN_TURN_AIRSPEED_KTS {
            let v_mps = self.state.airspeed_kts * KNOTS_TO_METERS_PER_SECOND;
            rad_to_deg(GRAVITY * deg_to_rad(self.state.bank_deg).tan() / v_mps)
        } else {
            0.0
        };
        let turn_rate = bank_turn_rate + self.commands.rudder * cfg.rudder_yaw_rate_dps;

        self.state.heading_deg = wrap_degrees(self.state.heading_deg + turn_rate * dt);
    }
}

impl FlightDynamicsModel for PointMassFdm {
    fn initialize(&mut self) -> Result<(), FdmError> {
        let initial = self.config.initial;
        let values = [
            initial.airspeed_kts,
            initial.altitude_ft,
            initial.heading_deg,
            initial.propeller_rpm,
        ];
        if values.iter().any(|v| !v.is_finite()) || initial.airspeed_kts < 0.0 {
            return Err(FdmError::InitialConditions(format!("{:?}", initial)));
        }

        self.commands = Commands::default();
        self.state = PointMassState {
            airspeed_kts: initial.airspeed_kts,
            altitude_ft: initial.altitude_ft,
            vertical_speed_fps: 0.0,
            heading_deg: wrap_degrees(initial.heading_deg),
            bank_deg: 0.0,
            rpm: initial.propeller_rpm.max(0.0),
            sim_time: 0.0,
        };
        debug!("Point-mass model initialised: {:?}", self.state);
        Ok(())
    }

    fn delta_t(&self) -> f64 {
        self.config.delta_t
    }

    fn set_property(&mut self, name: &str, value: f64) -> Result<(), FdmError> {
        if !value.is_finite() {
            return Err(FdmError::InvalidValue {
                name: name.to_string(),
                value,
            });
        }
        let slot = match name {
            properties::ELEVATOR_CMD => &mut self.commands.elevator,
            properties::AILERON_CMD => &mut self.commands.aileron,
            properties::RUDDER_CMD => &mut self.commands.rudder,
            properties::THROTTLE_CMD => &mut self.commands.throttle,
            properties::FLAP_CMD => &mut self.commands.flaps,
            properties::LEFT_BRAKE_CMD => &mut self.commands.left_brake,
            properties::RIGHT_BRAKE_CMD => &mut self.commands.right_brake,
            _ => return Err(FdmError::UnknownProperty(name.to_string())),
        };
        *slot = value;
        Ok(())
    }

    fn get_property(&self, name: &str) -> Result<f64, FdmError> {
        let value = match name {
            properties::CALIBRATED_AIRSPEED_KTS => self.state.airspeed_kts,
            properties::VERTICAL_SPEED_FPS => self.state.vertical_speed_fps,
            properties::ALTITUDE_SL_FT => self.state.altitude_ft,
            properties::HEADING_DEG => self.state.heading_deg,
            properties::PROPELLER_RPM => self.state.rpm,
            properties::SIM_TIME_SEC => self.state.sim_time,
            properties::ELEVATOR_CMD => self.commands.elevator,
            properties::AILERON_CMD => self.commands.aileron,
            properties::RUDDER_CMD => self.commands.rudder,
            properties::THROTTLE_CMD => self.commands.throttle,
            properties::FLAP_CMD => self.commands.flaps,
            properties::LEFT_BRAKE_CMD => self.commands.left_brake,
            properties::RIGHT_BRAKE_CMD => self.commands.right_brake,
            _ => return Err(FdmError::UnknownProperty(name.to_string())),
        };
        Ok(value)
    }

    fn run(&mut self) -> Result<(), FdmError> {
        let dt = self.config.delta_t;

        let thrust = self.update_propulsion(dt);
        self.update_airspeed(thrust, dt);
        self.update_vertical(dt);
        self.update_lateral(dt);
        self.state.sim_time += dt;

        let finite = [
            self.state.airspeed_kts,
            self.state.altitude_ft,
            self.state.vertical_speed_fps,
            self.state.heading_deg,
            self.state.rpm,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(FdmError::StepFailed(format!(
                "non-finite state after step: {:?}",
                self.state
            )));
        }
        Ok(())
    }

    fn release(&mut self) {
        debug!(
            "Releasing point-mass model '{}' at t = {:.3} s",
            self.config.name, self.state.sim_time
        );
    }
}
