use bevy::prelude::*;

use crate::bridge::BridgeError;
use crate::controls::ControlInputVector;
use crate::driver::{FdmHandle, SimulationSnapshot};
use crate::fdm::{properties, FdmError, FdmLoader};

/// Lifecycle of the stepping driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriverState {
    Uninitialized,
    Ready,
    Stepping,
    Terminated,
}

/// The engine only exists inside the states that may use it.
#[derive(Debug)]
enum EngineSlot {
    Uninitialized,
    Ready(FdmHandle),
    Stepping(FdmHandle),
    Terminated,
}

/// Drives the flight model at its own fixed step.
///
/// One call to `step` writes the control vector, advances the model by exactly
/// one internal step and reads the outputs back. Host frame timing never
/// reaches the model.
pub struct SimulationDriver {
    loader: Box<dyn FdmLoader>,
    slot: EngineSlot,
    scripted: bool,
    ticks: u64,
}

impl SimulationDriver {
    pub fn new(loader: Box<dyn FdmLoader>) -> Self {
        Self {
            loader,
            slot: EngineSlot::Uninitialized,
            scripted: false,
            ticks: 0,
        }
    }

    /// In scripted mode the model drives its own controls and the driver only
    /// advances it and reads outputs.
    pub fn scripted(mut self, scripted: bool) -> Self {
        self.scripted = scripted;
        self
    }

    pub fn is_scripted(&self) -> bool {
        self.scripted
    }

    pub fn state(&self) -> DriverState {
        match self.slot {
            EngineSlot::Uninitialized => DriverState::Uninitialized,
            EngineSlot::Ready(_) => DriverState::Ready,
            EngineSlot::Stepping(_) => DriverState::Stepping,
            EngineSlot::Terminated => DriverState::Terminated,
        }
    }

    /// Number of completed steps since the last (re)initialisation.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The model's fixed step, if a model is loaded.
    pub fn delta_t(&self) -> Option<f64> {
        match &self.slot {
            EngineSlot::Ready(handle) | EngineSlot::Stepping(handle) => Some(handle.delta_t()),
            EngineSlot::Uninitialized | EngineSlot::Terminated => None,
        }
    }

    /// Simulated time since the last (re)initialisation (s).
    pub fn simulation_time(&self) -> f64 {
        self.delta_t()
            .map(|dt| dt * self.ticks as f64)
            .unwrap_or(0.0)
    }

    /// Load the model, apply initial conditions and neutral controls.
    pub fn initialize(&mut self) -> Result<(), BridgeError> {
        match self.slot {
            EngineSlot::Uninitialized => {}
            EngineSlot::Ready(_) | EngineSlot::Stepping(_) => {
                return Err(BridgeError::AlreadyInitialized)
            }
            EngineSlot::Terminated => return Err(BridgeError::Terminated),
        }

        let model = self.loader.load()?;
        let mut handle = FdmHandle::acquire(model)?;
        if !self.scripted {
            write_controls(&mut handle, &ControlInputVector::neutral())?;
        }

        info!(
            "Flight model ready at {:.1} Hz{}",
            1.0 / handle.delta_t(),
            if self.scripted { " (scripted)" } else { "" }
        );
        self.ticks = 0;
        self.slot = EngineSlot::Ready(handle);
        Ok(())
    }

    /// Re-apply the model's initial conditions and neutral controls.
    pub fn reset(&mut self) -> Result<(), BridgeError> {
        self.ensure_live()?;
        let slot = std::mem::replace(&mut self.slot, EngineSlot::Terminated);
        let mut handle = match slot {
            EngineSlot::Ready(handle) | EngineSlot::Stepping(handle) => handle,
            other => {
                self.slot = other;
                return Err(BridgeError::NotInitialized);
            }
        };

        // On failure the handle is dropped and the driver stays terminated
        handle.model_mut().initialize()?;
        if !self.scripted {
            write_controls(&mut handle, &ControlInputVector::neutral())?;
        }

        info!("Flight model reset to initial conditions");
        self.ticks = 0;
        self.slot = EngineSlot::Ready(handle);
        Ok(())
    }

    /// Write `controls`, advance exactly one model step and read the outputs.
    ///
    /// A model failure mid-step terminates the driver: the flight state is no
    /// longer meaningful.
    pub fn step(&mut self, controls: &ControlInputVector) -> Result<SimulationSnapshot, BridgeError> {
        self.ensure_live()?;
        if matches!(self.slot, EngineSlot::Ready(_)) {
            if let EngineSlot::Ready(handle) = std::mem::replace(&mut self.slot, EngineSlot::Terminated) {
                self.slot = EngineSlot::Stepping(handle);
            }
        }

        let EngineSlot::Stepping(handle) = &mut self.slot else {
            return Err(BridgeError::NotInitialized);
        };

        let result = advance(handle, controls, self.scripted);
        match result {
            Ok(snapshot) => {
                self.ticks += 1;
                Ok(snapshot)
            }
            Err(err) => {
                error!("Flight model failed at tick {}: {}", self.ticks, err);
                self.slot = EngineSlot::Terminated;
                Err(BridgeError::Engine(err))
            }
        }
    }

    /// Release the model. Further steps are rejected.
    pub fn terminate(&mut self) {
        if self.state() != DriverState::Terminated {
            info!("Terminating flight model after {} ticks", self.ticks);
        }
        self.slot = EngineSlot::Terminated;
    }

    fn ensure_live(&self) -> Result<(), BridgeError> {
        match self.slot {
            EngineSlot::Ready(_) | EngineSlot::Stepping(_) => Ok(()),
            EngineSlot::Uninitialized => Err(BridgeError::NotInitialized),
            EngineSlot::Terminated => Err(BridgeError::Terminated),
        }
    }
}

impl std::fmt::Debug for SimulationDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationDriver")
            .field("state", &self.state())
            .field("scripted", &self.scripted)
            .field("ticks", &self.ticks)
            .finish_non_exhaustive()
    }
}

fn advance(
    handle: &mut FdmHandle,
    controls: &ControlInputVector,
    scripted: bool,
) -> Result<SimulationSnapshot, FdmError> {
    if !scripted {
        write_controls(handle, controls)?;
    }
    handle.model_mut().run()?;
    read_snapshot(handle)
}

fn write_controls(handle: &mut FdmHandle, controls: &ControlInputVector) -> Result<(), FdmError> {
    let model = handle.model_mut();
    model.set_property(properties::ELEVATOR_CMD, controls.elevator())?;
    model.set_property(properties::AILERON_CMD, controls.aileron())?;
    model.set_property(properties::RUDDER_CMD, controls.rudder())?;
    model.set_property(properties::THROTTLE_CMD, controls.throttle())?;
    model.set_property(properties::FLAP_CMD, controls.flaps())?;
    model.set_property(properties::LEFT_BRAKE_CMD, controls.brake())?;
    model.set_property(properties::RIGHT_BRAKE_CMD, controls.brake())?;
    Ok(())
}

fn read_snapshot(handle: &FdmHandle) -> Result<SimulationSnapshot, FdmError> {
    let model = handle.model();
    Ok(SimulationSnapshot {
        airspeed_kts: model.get_property(properties::CALIBRATED_AIRSPEED_KTS)?,
        vertical_speed_fps: model.get_property(properties::VERTICAL_SPEED_FPS)?,
        altitude_ft: model.get_property(properties::ALTITUDE_SL_FT)?,
        heading_deg: model.get_property(properties::HEADING_DEG)?,
        propeller_rpm: model.get_property(properties::PROPELLER_RPM)?,
    })
}
