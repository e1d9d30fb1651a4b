//! Numerical parameters for the simulation
//!
//! `Parameters` holds the fixed step size and the run length. Time points
//! are `0, dt, 2dt, ...` strictly below `total_time`

use super::error::{check_step_count, check_time_step, SimError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub time_step: f64,  // dt
    pub total_time: f64, // run length
}

impl Parameters {
    pub fn validate(&self) -> Result<(), SimError> {
        check_time_step(self.time_step)?;
        if !(self.total_time > 0.0) || !self.total_time.is_finite() {
            return Err(SimError::InvalidTotalTime(self.total_time));
        }
        check_step_count(self.total_time, self.time_step)
    }

    /// Number of steps in the half-open range [0, total_time)
    ///
    /// Only meaningful once `validate` has passed
    pub fn step_count(&self) -> usize {
        (self.total_time / self.time_step).ceil() as usize
    }

    /// Time stamp of step `k`
    pub fn time_at(&self, k: usize) -> f64 {
        k as f64 * self.time_step
    }
}
