//! Configuration types for loading drone scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! run request. A scenario consists of:
//!
//! - [`ParametersConfig`] – step size and total simulated time
//! - [`DroneConfig`]      – mass and starting position
//! - [`TargetConfig`]     – position the controllers regulate toward
//! - [`ControllerConfig`] – PID gains, shared by every axis or given per axis
//! - `external_force`     – optional constant disturbance
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example 3D scenario matching these types:
//!
//! ```yaml
//! parameters:
//!   time_step: 0.1          # dt, seconds
//!   total_time: 30.0        # run length, seconds
//!
//! drone:
//!   mass: 1.0
//!   initial_position: [0.0, 0.0, 0.0]
//!
//! target:
//!   desired_position: [10.0, 5.0, 8.0]
//!
//! controller:               # shared gains...
//!   kp: 0.6
//!   ki: 0.02
//!   kd: 1.0
//! # controller:             # ...or one set per axis
//! #   per_axis:
//! #     - { kp: 0.6, ki: 0.0, kd: 1.0 }
//! #     - { kp: 0.6, ki: 0.0, kd: 1.0 }
//! #     - { kp: 1.2, ki: 0.1, kd: 1.5 }
//!
//! external_force: [0.0, 0.0, -2.0]   # optional, defaults to zero
//! ```
//!
//! The engine maps this configuration into its runtime `Scenario`, which
//! re-checks every invariant independently of the validator.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::simulation::pid::Gains;

/// Global numerical parameters for a run
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ParametersConfig {
    pub time_step: f64,  // fixed step size
    pub total_time: f64, // time end (exclusive)
}

/// The drone's physical properties and initial state
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct DroneConfig {
    pub mass: f64,                 // must be positive
    pub initial_position: Vec<f64>, // one component per axis; its length sets the dimension
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TargetConfig {
    pub desired_position: Vec<f64>,
}

/// PID gains, either one set for all axes or one set per axis
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ControllerConfig {
    PerAxis { per_axis: Vec<Gains> },
    Shared(Gains),
}

impl ControllerConfig {
    /// Replace individual gains on every axis (used by CLI overrides)
    pub fn override_gains(&mut self, kp: Option<f64>, ki: Option<f64>, kd: Option<f64>) {
        let apply = |g: &mut Gains| {
            if let Some(kp) = kp { g.kp = kp; }
            if let Some(ki) = ki { g.ki = ki; }
            if let Some(kd) = kd { g.kd = kd; }
        };
        match self {
            ControllerConfig::Shared(g) => apply(g),
            ControllerConfig::PerAxis { per_axis } => per_axis.iter_mut().for_each(apply),
        }
    }

    /// Every gain set with the axis it applies to (shared gains report axis 0)
    pub fn gain_sets(&self) -> Vec<(usize, Gains)> {
        match self {
            ControllerConfig::Shared(g) => vec![(0, *g)],
            ControllerConfig::PerAxis { per_axis } => per_axis.iter().copied().enumerate().collect(),
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    pub drone: DroneConfig,
    pub target: TargetConfig,
    pub controller: ControllerConfig,
    #[serde(default)]
    pub external_force: Option<Vec<f64>>, // absent -> zero vector
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let cfg = serde_yaml::from_str(yaml).context("failed to parse scenario YAML")?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("failed to open scenario {}", path.display()))?;
        let reader = BufReader::new(file);
        let cfg = serde_yaml::from_reader(reader)
            .with_context(|| format!("failed to parse scenario {}", path.display()))?;
        Ok(cfg)
    }

    /// Number of axes, taken from `initial_position`
    pub fn dimension(&self) -> usize {
        self.drone.initial_position.len()
    }
}

impl Default for ScenarioConfig {
    /// 3D hover-to-target run with gains in the middle of the tuning ranges
    fn default() -> Self {
        Self {
            parameters: ParametersConfig {
                time_step: 0.1,
                total_time: 30.0,
            },
            drone: DroneConfig {
                mass: 1.0,
                initial_position: vec![0.0, 0.0, 0.0],
            },
            target: TargetConfig {
                desired_position: vec![10.0, 5.0, 8.0],
            },
            controller: ControllerConfig::Shared(Gains::new(0.6, 0.02, 1.0)),
            external_force: None,
        }
    }
}
