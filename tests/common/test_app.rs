use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use flyer_bridge::{
    bridge::FlightBridge, input::ControlEvent, BridgeConfig, BridgeFault, FlightBridgePlugin,
};

use super::RecordingLoader;

/// Builder for a headless app running the flight bridge
pub struct TestAppBuilder {
    config: BridgeConfig,
    loader: Option<RecordingLoader>,
    ticks_per_frame: u32,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: BridgeConfig::default(),
            loader: None,
            ticks_per_frame: 1,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: BridgeConfig) -> Self {
        self.config = config;
        self
    }

    /// Drive a recording model instead of the point-mass model
    pub fn with_loader(mut self, loader: RecordingLoader) -> Self {
        self.loader = Some(loader);
        self
    }

    pub fn with_ticks_per_frame(mut self, ticks: u32) -> Self {
        self.ticks_per_frame = ticks;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();
        let step = 1.0 / self.config.fixed_rate_hz;

        let plugin = match self.loader {
            Some(loader) => FlightBridgePlugin::with_loader(self.config, loader),
            None => FlightBridgePlugin::new(self.config),
        };
        app.add_plugins(MinimalPlugins).add_plugins(plugin);

        let mut test_app = TestApp { app, step };
        test_app.set_ticks_per_frame(self.ticks_per_frame);

        // Startup runs here; the first frame has no elapsed time
        test_app.app.update();
        test_app
    }
}

/// Test application wrapper
pub struct TestApp {
    pub app: App,
    step: f64,
}

impl TestApp {
    /// Every following frame advances host time by `ticks` fixed steps
    pub fn set_ticks_per_frame(&mut self, ticks: u32) {
        let duration = Duration::from_secs_f64(self.step) * ticks;
        self.app
            .insert_resource(TimeUpdateStrategy::ManualDuration(duration));
    }

    pub fn run_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.app.update();
        }
    }

    pub fn send(&mut self, event: ControlEvent) {
        self.app.world_mut().send_event(event);
    }

    pub fn bridge(&self) -> &FlightBridge {
        self.app.world().resource::<FlightBridge>()
    }

    pub fn bridge_mut(&mut self) -> Mut<FlightBridge> {
        self.app.world_mut().resource_mut::<FlightBridge>()
    }

    /// Faults sent during the last frame
    pub fn faults(&self) -> Vec<BridgeFault> {
        self.app
            .world()
            .resource::<Events<BridgeFault>>()
            .iter_current_update_events()
            .cloned()
            .collect()
    }

    pub fn should_exit(&self) -> Option<AppExit> {
        self.app.should_exit()
    }
}
