//! Build a fully-checked simulation scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! the driver consumes:
//! - numerical parameters (`Parameters`)
//! - drone mass and initial position
//! - desired position and one gain set per axis
//! - active disturbance set (`ForceSet`)
//!
//! A `Scenario` is immutable; each run builds its own drone and controllers
//! from it, so one scenario can be simulated any number of times

use crate::configuration::config::{ControllerConfig, ScenarioConfig};
use crate::configuration::validator::validate_lengths;
use crate::simulation::error::SimError;
use crate::simulation::forces::{ConstantForce, Disturbance, ForceSet};
use crate::simulation::params::Parameters;
use crate::simulation::pid::Gains;
use crate::simulation::states::NVec;

/// Runtime description of one run request
pub struct Scenario {
    parameters: Parameters,
    mass: f64,
    initial_position: NVec,
    desired_position: NVec,
    gains: Vec<Gains>, // one entry per axis
    forces: ForceSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Shape checks first: nothing else is meaningful with mismatched vectors
        validate_lengths(&cfg)?;
        let dim = cfg.dimension();

        let parameters = Parameters {
            time_step: cfg.parameters.time_step,
            total_time: cfg.parameters.total_time,
        };
        parameters.validate()?;

        if !(cfg.drone.mass > 0.0) || !cfg.drone.mass.is_finite() {
            return Err(SimError::InvalidMass(cfg.drone.mass));
        }

        // Gains: broadcast shared gains, keep per-axis gains as given
        let gains: Vec<Gains> = match cfg.controller {
            ControllerConfig::Shared(g) => vec![g; dim],
            ControllerConfig::PerAxis { per_axis } => per_axis,
        };
        for (axis, g) in gains.iter().enumerate() {
            g.validate(axis)?;
        }

        // Forces: a constant disturbance when one is configured
        let mut forces = ForceSet::new();
        if let Some(f) = cfg.external_force {
            forces = forces.with(ConstantForce(NVec::from_vec(f)));
        }

        Ok(Self {
            parameters,
            mass: cfg.drone.mass,
            initial_position: NVec::from_vec(cfg.drone.initial_position),
            desired_position: NVec::from_vec(cfg.target.desired_position),
            gains,
            forces,
        })
    }

    /// Add another disturbance term on top of the configured one
    pub fn with_disturbance<T>(mut self, term: T) -> Self
    where
        T: Disturbance + Send + Sync + 'static,
    {
        self.forces = self.forces.with(term);
        self
    }

    pub fn dimension(&self) -> usize {
        self.initial_position.len()
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn initial_position(&self) -> &NVec {
        &self.initial_position
    }

    pub fn desired_position(&self) -> &NVec {
        &self.desired_position
    }

    pub fn gains(&self) -> &[Gains] {
        &self.gains
    }

    pub fn forces(&self) -> &ForceSet {
        &self.forces
    }
}
