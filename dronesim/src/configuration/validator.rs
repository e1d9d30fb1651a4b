//! Up-front checks on a run request
//!
//! Validation runs before the driver is built so the user gets a
//! descriptive message. The runtime `Scenario` repeats the same checks, so
//! skipping the validator cannot corrupt a run

use log::info;

use crate::configuration::config::{ControllerConfig, ScenarioConfig};
use crate::simulation::error::{check_dimension, check_step_count, check_time_step, SimError};

/// Strategy for checking a configuration before it is simulated
pub trait InputValidator {
    fn validate(&self, cfg: &ScenarioConfig) -> Result<(), SimError>;
}

/// Checks gains, times, vector lengths and mass, in that order
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultValidator;

impl InputValidator for DefaultValidator {
    fn validate(&self, cfg: &ScenarioConfig) -> Result<(), SimError> {
        info!("Running input validation...");
        validate_gains(&cfg.controller)?;
        validate_time(cfg)?;
        validate_lengths(cfg)?;
        validate_mass(cfg.drone.mass)?;
        info!("Input validation successful.");
        Ok(())
    }
}

fn validate_gains(controller: &ControllerConfig) -> Result<(), SimError> {
    for (axis, gains) in controller.gain_sets() {
        gains.validate(axis)?;
    }
    Ok(())
}

fn validate_time(cfg: &ScenarioConfig) -> Result<(), SimError> {
    check_time_step(cfg.parameters.time_step)?;
    let total = cfg.parameters.total_time;
    if !(total > 0.0) || !total.is_finite() {
        return Err(SimError::InvalidTotalTime(total));
    }
    check_step_count(total, cfg.parameters.time_step)
}

pub(crate) fn validate_lengths(cfg: &ScenarioConfig) -> Result<(), SimError> {
    let dim = cfg.dimension();
    if dim == 0 {
        return Err(SimError::EmptyDimension);
    }
    check_dimension("desired_position", dim, cfg.target.desired_position.len())?;
    if let Some(f) = &cfg.external_force {
        check_dimension("external_force", dim, f.len())?;
    }
    if let ControllerConfig::PerAxis { per_axis } = &cfg.controller {
        check_dimension("controller.per_axis", dim, per_axis.len())?;
    }
    Ok(())
}

fn validate_mass(mass: f64) -> Result<(), SimError> {
    if !(mass > 0.0) || !mass.is_finite() {
        return Err(SimError::InvalidMass(mass));
    }
    Ok(())
}
