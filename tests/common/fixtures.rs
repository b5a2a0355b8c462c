use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use flyer_bridge::fdm::{properties, FdmError, FdmLoader, FlightDynamicsModel};

/// What the bridge did to the recording model.
#[derive(Debug, Default)]
pub struct Recording {
    pub loads: u32,
    pub initialized: u32,
    pub writes: usize,
    /// Control properties as seen by each `run`.
    pub runs: Vec<HashMap<String, f64>>,
    pub released: bool,
}

impl Recording {
    pub fn last_run(&self, property: &str) -> Option<f64> {
        self.runs.last().and_then(|run| run.get(property).copied())
    }
}

/// Loader producing a model whose outputs count its steps.
#[derive(Clone)]
pub struct RecordingLoader {
    pub log: Arc<Mutex<Recording>>,
    pub delta_t: f64,
    pub fail_load: bool,
    pub fail_on_run: Option<usize>,
}

impl RecordingLoader {
    pub fn new() -> Self {
        Self {
            log: Arc::new(Mutex::new(Recording::default())),
            delta_t: 1.0 / 120.0,
            fail_load: false,
            fail_on_run: None,
        }
    }

    pub fn failing_load(mut self) -> Self {
        self.fail_load = true;
        self
    }

    pub fn failing_on_run(mut self, run: usize) -> Self {
        self.fail_on_run = Some(run);
        self
    }

    pub fn with_delta_t(mut self, delta_t: f64) -> Self {
        self.delta_t = delta_t;
        self
    }
}

impl FdmLoader for RecordingLoader {
    fn load(&self) -> Result<Box<dyn FlightDynamicsModel>, FdmError> {
        self.log.lock().unwrap().loads += 1;
        if self.fail_load {
            return Err(FdmError::LoadError("aircraft files missing".to_string()));
        }
        Ok(Box::new(RecordingFdm {
            log: self.log.clone(),
            delta_t: self.delta_t,
            fail_on_run: self.fail_on_run,
            controls: HashMap::new(),
            steps: 0,
        }))
    }
}

struct RecordingFdm {
    log: Arc<Mutex<Recording>>,
    delta_t: f64,
    fail_on_run: Option<usize>,
    controls: HashMap<String, f64>,
    steps: usize,
}

impl FlightDynamicsModel for RecordingFdm {
    fn initialize(&mut self) -> Result<(), FdmError> {
        self.steps = 0;
        self.log.lock().unwrap().initialized += 1;
        Ok(())
    }

    fn delta_t(&self) -> f64 {
        self.delta_t
    }

    fn set_property(&mut self, name: &str, value: f64) -> Result<(), FdmError> {
        self.controls.insert(name.to_string(), value);
        self.log.lock().unwrap().writes += 1;
        Ok(())
    }

    fn get_property(&self, name: &str) -> Result<f64, FdmError> {
        let n = self.steps as f64;
        match name {
            properties::CALIBRATED_AIRSPEED_KTS => Ok(90.0 + n),
            properties::VERTICAL_SPEED_FPS => Ok(5.0),
            properties::ALTITUDE_SL_FT => Ok(2000.0 + n),
            properties::HEADING_DEG => Ok(180.0),
            properties::PROPELLER_RPM => Ok(2300.0),
            other => Err(FdmError::UnknownProperty(other.to_string())),
        }
    }

    fn run(&mut self) -> Result<(), FdmError> {
        if self.fail_on_run == Some(self.steps) {
            return Err(FdmError::StepFailed("solver diverged".to_string()));
        }
        self.steps += 1;
        self.log.lock().unwrap().runs.push(self.controls.clone());
        Ok(())
    }

    fn release(&mut self) {
        self.log.lock().unwrap().released = true;
    }
}
