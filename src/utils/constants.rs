pub const GRAVITY: f64 = 9.80665; // m/s^2

pub const FEET_TO_METERS: f64 = 0.3048;
pub const KNOTS_TO_METERS_PER_SECOND: f64 = 1852.0 / 3600.0;
pub const KNOTS_TO_KILOMETERS_PER_HOUR: f64 = 1.852;
pub const KNOTS_TO_MILES_PER_HOUR: f64 = 1852.0 / 1609.344;
pub const SECONDS_PER_MINUTE: f64 = 60.0;

pub const DEFAULT_FIXED_RATE_HZ: f64 = 120.0; // Matches the physics schedule
pub const MAX_FIXED_RATE_HZ: f64 = 1000.0;

// Control surface travel
pub const BIPOLAR_RANGE: (f64, f64) = (-1.0, 1.0);
pub const UNIPOLAR_RANGE: (f64, f64) = (0.0, 1.0);
