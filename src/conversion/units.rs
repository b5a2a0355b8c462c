use serde::{Deserialize, Serialize};

use crate::driver::SimulationSnapshot;
use crate::utils::{
    deg_to_rad, wrap_degrees, wrap_radians, FEET_TO_METERS, KNOTS_TO_KILOMETERS_PER_HOUR,
    KNOTS_TO_METERS_PER_SECOND, KNOTS_TO_MILES_PER_HOUR, SECONDS_PER_MINUTE,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedUnit {
    #[default]
    Knots,
    MetersPerSecond,
    KilometersPerHour,
    MilesPerHour,
}

impl SpeedUnit {
    fn from_knots(self, knots: f64) -> f64 {
        match self {
            SpeedUnit::Knots => knots,
            SpeedUnit::MetersPerSecond => knots * KNOTS_TO_METERS_PER_SECOND,
            SpeedUnit::KilometersPerHour => knots * KNOTS_TO_KILOMETERS_PER_HOUR,
            SpeedUnit::MilesPerHour => knots * KNOTS_TO_MILES_PER_HOUR,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalSpeedUnit {
    #[default]
    FeetPerMinute,
    FeetPerSecond,
    MetersPerSecond,
}

impl VerticalSpeedUnit {
    fn from_feet_per_second(self, fps: f64) -> f64 {
        match self {
            VerticalSpeedUnit::FeetPerMinute => fps * SECONDS_PER_MINUTE,
            VerticalSpeedUnit::FeetPerSecond => fps,
            VerticalSpeedUnit::MetersPerSecond => fps * FEET_TO_METERS,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AltitudeUnit {
    #[default]
    Feet,
    Meters,
}

impl AltitudeUnit {
    fn from_feet(self, feet: f64) -> f64 {
        match self {
            AltitudeUnit::Feet => feet,
            AltitudeUnit::Meters => feet * FEET_TO_METERS,
        }
    }
}

/// Units the host displays and reasons in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayUnits {
    pub airspeed: SpeedUnit,
    pub vertical_speed: VerticalSpeedUnit,
    pub altitude: AltitudeUnit,
}

/// Flight outputs in host units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightDisplay {
    pub airspeed: f64,
    pub vertical_speed: f64,
    pub altitude: f64,
    /// Heading in [0, 360), clockwise from north.
    pub heading_deg: f64,
    /// Rotation about the host's +Y axis (rad) in (-PI, PI]. The host frame is
    /// Y-up with north along -Z and east along +X.
    pub host_yaw: f64,
    pub propeller_rpm: f64,
}

/// Stateless mapping from model-native outputs to host units and axes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UnitConverter {
    units: DisplayUnits,
    heading_offset_deg: f64,
}

impl UnitConverter {
    pub fn new(units: DisplayUnits, heading_offset_deg: f64) -> Self {
        Self {
            units,
            heading_offset_deg: if heading_offset_deg.is_finite() {
                heading_offset_deg
            } else {
                0.0
            },
        }
    }

    pub fn convert(&self, snapshot: &SimulationSnapshot) -> FlightDisplay {
        let heading_deg = wrap_degrees(snapshot.heading_deg + self.heading_offset_deg);
        FlightDisplay {
            airspeed: self.units.airspeed.from_knots(snapshot.airspeed_kts),
            vertical_speed: self
                .units
                .vertical_speed
                .from_feet_per_second(snapshot.vertical_speed_fps),
            altitude: self.units.altitude.from_feet(snapshot.altitude_ft),
            heading_deg,
            host_yaw: wrap_radians(-deg_to_rad(heading_deg)),
            propeller_rpm: snapshot.propeller_rpm,
        }
    }
}
