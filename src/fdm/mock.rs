use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::fdm::{properties, FdmError, FlightDynamicsModel};

/// Everything the bridge did to a `MockFdm`, shared with the test body.
#[derive(Debug, Default)]
pub(crate) struct MockLog {
    pub initialized: u32,
    pub writes: Vec<(String, f64)>,
    /// Control values seen by each call to `run`.
    pub runs: Vec<HashMap<String, f64>>,
    pub released: bool,
}

/// Scriptable engine: outputs are a function of the number of steps taken.
pub(crate) struct MockFdm {
    pub log: Arc<Mutex<MockLog>>,
    pub delta_t: f64,
    pub fail_on_run: Option<usize>,
    controls: HashMap<String, f64>,
    steps: usize,
}

impl MockFdm {
    pub fn new(log: Arc<Mutex<MockLog>>) -> Self {
        Self {
            log,
            delta_t: 1.0 / 120.0,
            fail_on_run: None,
            controls: HashMap::new(),
            steps: 0,
        }
    }
}

impl FlightDynamicsModel for MockFdm {
    fn initialize(&mut self) -> Result<(), FdmError> {
        self.steps = 0;
        self.controls.clear();
        self.log.lock().unwrap().initialized += 1;
        Ok(())
    }

    fn delta_t(&self) -> f64 {
        self.delta_t
    }

    fn set_property(&mut self, name: &str, value: f64) -> Result<(), FdmError> {
        self.controls.insert(name.to_string(), value);
        self.log.lock().unwrap().writes.push((name.to_string(), value));
        Ok(())
    }

    fn get_property(&self, name: &str) -> Result<f64, FdmError> {
        let n = self.steps as f64;
        match name {
            properties::CALIBRATED_AIRSPEED_KTS => Ok(100.0 + n),
            properties::VERTICAL_SPEED_FPS => Ok(10.0),
            properties::ALTITUDE_SL_FT => Ok(1000.0 + n),
            properties::HEADING_DEG => Ok(-90.0),
            properties::PROPELLER_RPM => Ok(2400.0),
            other => self
                .controls
                .get(other)
                .copied()
                .ok_or_else(|| FdmError::UnknownProperty(other.to_string())),
        }
    }

    fn run(&mut self) -> Result<(), FdmError> {
        if self.fail_on_run == Some(self.steps) {
            return Err(FdmError::StepFailed("scripted failure".to_string()));
        }
        self.steps += 1;
        self.log.lock().unwrap().runs.push(self.controls.clone());
        Ok(())
    }

    fn release(&mut self) {
        self.log.lock().unwrap().released = true;
    }
}
