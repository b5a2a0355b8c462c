use bevy::prelude::*;

use crate::fdm::{FdmError, FlightDynamicsModel};

/// Exclusive owner of a loaded flight dynamics model.
///
/// The model is released exactly once, when the handle is dropped. The handle
/// is neither `Clone` nor does it hand out the model outside this crate.
pub struct FdmHandle {
    model: Box<dyn FlightDynamicsModel>,
    delta_t: f64,
}

impl FdmHandle {
    /// Take ownership of a freshly loaded model and apply its initial
    /// conditions.
    pub(crate) fn acquire(model: Box<dyn FlightDynamicsModel>) -> Result<Self, FdmError> {
        // From here on any early return releases the model through Drop
        let mut handle = Self {
            model,
            delta_t: 0.0,
        };
        handle.model.initialize()?;
        handle.delta_t = handle.model.delta_t();
        if !handle.delta_t.is_finite() || handle.delta_t <= 0.0 {
            return Err(FdmError::InvalidTimestep(handle.delta_t));
        }
        Ok(handle)
    }

    pub fn delta_t(&self) -> f64 {
        self.delta_t
    }

    pub(crate) fn model(&self) -> &dyn FlightDynamicsModel {
        self.model.as_ref()
    }

    pub(crate) fn model_mut(&mut self) -> &mut dyn FlightDynamicsModel {
        self.model.as_mut()
    }
}

impl Drop for FdmHandle {
    fn drop(&mut self) {
        debug!("Releasing flight dynamics model");
        self.model.release();
    }
}

impl std::fmt::Debug for FdmHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FdmHandle")
            .field("delta_t", &self.delta_t)
            .finish_non_exhaustive()
    }
}
