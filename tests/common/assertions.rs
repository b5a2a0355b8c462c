use flyer_bridge::controls::{ControlChannel, ControlInputVector};
use flyer_bridge::conversion::FlightDisplay;

/// Assert every channel lies within its range
#[track_caller]
pub fn assert_controls_in_range(controls: &ControlInputVector) {
    for channel in ControlChannel::ALL {
        let (min, max) = channel.range();
        let value = controls.get(channel);
        assert!(
            (min..=max).contains(&value),
            "{:?} = {} outside [{}, {}]",
            channel,
            value,
            min,
            max
        );
    }
}

#[track_caller]
pub fn assert_display_finite(display: &FlightDisplay) {
    assert!(display.airspeed.is_finite(), "Airspeed is not finite");
    assert!(display.vertical_speed.is_finite(), "Vertical speed is not finite");
    assert!(display.altitude.is_finite(), "Altitude is not finite");
    assert!(
        (0.0..360.0).contains(&display.heading_deg),
        "Heading {} outside [0, 360)",
        display.heading_deg
    );
    assert!(display.host_yaw.is_finite(), "Host yaw is not finite");
}
