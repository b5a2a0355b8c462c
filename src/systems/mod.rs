mod input;
mod lifecycle;

pub use input::{
    apply_control_events_system, gamepad_axis_system, gamepad_button_system, keyboard_input_system,
};
pub use lifecycle::{bridge_frame_system, bridge_physics_system, bridge_ready_system};
