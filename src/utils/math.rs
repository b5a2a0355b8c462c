use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Wrap an angle in degrees into [0, 360).
#[inline]
pub fn wrap_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Wrap an angle in radians into (-PI, PI].
#[inline]
pub fn wrap_radians(rad: f64) -> f64 {
    let wrapped = (rad + PI).rem_euclid(2.0 * PI) - PI;
    if wrapped <= -PI {
        wrapped + 2.0 * PI
    } else {
        wrapped
    }
}

/// Clamp a value to a closed range, saturating at the bounds.
///
/// Returns `None` for NaN so callers can keep their previous value instead of
/// storing a poisoned one.
#[inline]
pub fn saturate(value: f64, (min, max): (f64, f64)) -> Option<f64> {
    if value.is_nan() {
        None
    } else {
        Some(value.clamp(min, max))
    }
}

/// First-order lag towards `target` with time constant `tau` (s).
#[inline]
pub fn first_order_lag(current: f64, target: f64, tau: f64, dt: f64) -> f64 {
    if tau <= 0.0 {
        return target;
    }
    let alpha = (dt / tau).min(1.0);
    current + (target - current) * alpha
}
