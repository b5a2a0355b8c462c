mod assertions;
mod fixtures;
mod test_app;

pub use assertions::{assert_controls_in_range, assert_display_finite};
pub use fixtures::{Recording, RecordingLoader};
pub use test_app::{TestApp, TestAppBuilder};
