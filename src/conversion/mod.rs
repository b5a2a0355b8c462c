mod units;

pub use units::{AltitudeUnit, DisplayUnits, FlightDisplay, SpeedUnit, UnitConverter, VerticalSpeedUnit};
