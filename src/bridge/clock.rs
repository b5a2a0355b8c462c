/// Host-side timing, kept apart from simulated time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    frames: u64,
    elapsed: f64,
}

impl FrameClock {
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Host time accumulated over all frames (s).
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub(crate) fn record_frame(&mut self, delta: f64) {
        self.frames += 1;
        if delta.is_finite() && delta > 0.0 {
            self.elapsed += delta;
        }
    }
}
