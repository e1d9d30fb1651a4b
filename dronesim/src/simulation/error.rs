//! Error conditions raised while configuring or running a simulation
//!
//! A failure at any point discards the run, so a run either produces a
//! complete history or nothing at all

use thiserror::Error;

/// Errors produced by the controller, the drone body, and the driver
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// A vector does not have the same number of components as `initial_position`
    #[error("shape mismatch: {field} has {found} components, expected {expected}")]
    DimensionMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    /// `initial_position` has no components
    #[error("initial position must have at least one component")]
    EmptyDimension,

    /// Mass is zero, negative or NaN
    #[error("drone mass must be a positive value, got {0}")]
    InvalidMass(f64),

    /// Time step is zero, negative or not finite
    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),

    /// Total simulation time is zero, negative or not finite
    #[error("total simulation time must be positive and finite, got {0}")]
    InvalidTotalTime(f64),

    /// `total_time / time_step` asks for more steps than one run may hold
    #[error("{steps} steps requested (total_time / time_step), at most {max} are allowed")]
    TooManySteps { steps: f64, max: usize },

    /// A PID gain is negative or NaN
    #[error("PID gain {name} on axis {axis} must be non-negative, got {value}")]
    InvalidGain {
        name: &'static str,
        axis: usize,
        value: f64,
    },
}

/// Fail with `InvalidTimeStep` unless `dt` is strictly positive and finite
pub fn check_time_step(dt: f64) -> Result<(), SimError> {
    if dt > 0.0 && dt.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidTimeStep(dt))
    }
}

/// Upper bound on the steps of one run
pub const MAX_STEPS: usize = 50_000_000;

/// Fail with `TooManySteps` unless `ceil(total / dt)` fits under `MAX_STEPS`
///
/// Both values must already be positive and finite
pub fn check_step_count(total: f64, dt: f64) -> Result<(), SimError> {
    let steps = (total / dt).ceil();
    if steps.is_finite() && steps <= MAX_STEPS as f64 {
        Ok(())
    } else {
        Err(SimError::TooManySteps { steps, max: MAX_STEPS })
    }
}

/// Fail with `DimensionMismatch` unless `found == expected`
pub fn check_dimension(field: &'static str, expected: usize, found: usize) -> Result<(), SimError> {
    if found == expected {
        Ok(())
    } else {
        Err(SimError::DimensionMismatch { field, expected, found })
    }
}
