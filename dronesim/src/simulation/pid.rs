//! Single-axis PID controller
//!
//! Converts a position error into a force. One controller is created per
//! spatial axis and the axes never interact

use serde::{Deserialize, Serialize};

use super::error::{check_time_step, SimError};

/// Proportional, integral and derivative gains for one axis
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Gains {
    pub kp: f64, // proportional
    pub ki: f64, // integral
    pub kd: f64, // derivative
}

impl Gains {
    pub fn new(kp: f64, ki: f64, kd: f64) -> Self {
        Self { kp, ki, kd }
    }

    /// Reject negative (or NaN) gains, reporting which axis they belong to
    pub fn validate(&self, axis: usize) -> Result<(), SimError> {
        for (name, value) in [("kp", self.kp), ("ki", self.ki), ("kd", self.kd)] {
            if !(value >= 0.0) {
                return Err(SimError::InvalidGain { name, axis, value });
            }
        }
        Ok(())
    }
}

/// PID state for a single scalar axis
///
/// The integral is a plain running sum of `error * dt` (left rectangle rule)
/// with no anti-windup clamp, and the previous error starts at zero, so the
/// first derivative term sees the jump from zero error
#[derive(Debug, Clone)]
pub struct PidController {
    gains: Gains,
    desired_position: f64,

    // Running state
    integral: f64,
    prev_error: f64,

    // Last computed components, kept for diagnostics
    p: f64,
    i: f64,
    d: f64,
}

impl PidController {
    /// Build a controller targeting `desired_position`; gains are checked as axis 0
    pub fn new(gains: Gains, desired_position: f64) -> Result<Self, SimError> {
        Self::for_axis(gains, desired_position, 0)
    }

    /// Build the controller for `axis`, so a bad gain reports its axis
    pub fn for_axis(gains: Gains, desired_position: f64, axis: usize) -> Result<Self, SimError> {
        gains.validate(axis)?;
        Ok(Self {
            gains,
            desired_position,
            integral: 0.0,
            prev_error: 0.0,
            p: 0.0,
            i: 0.0,
            d: 0.0,
        })
    }

    /// Compute the control force for the current position
    ///
    /// The derivative must be taken before `prev_error` is overwritten.
    /// Fails with `InvalidTimeStep` without touching state if `dt` is not
    /// strictly positive
    pub fn compute_force(&mut self, current_position: f64, dt: f64) -> Result<f64, SimError> {
        check_time_step(dt)?;

        let error = self.desired_position - current_position;

        self.p = self.gains.kp * error;

        self.integral += error * dt;
        self.i = self.gains.ki * self.integral;

        let derivative = (error - self.prev_error) / dt;
        self.d = self.gains.kd * derivative;

        self.prev_error = error;

        Ok(self.p + self.i + self.d)
    }

    pub fn p(&self) -> f64 {
        self.p
    }

    pub fn i(&self) -> f64 {
        self.i
    }

    pub fn d(&self) -> f64 {
        self.d
    }

    pub fn integral(&self) -> f64 {
        self.integral
    }

    pub fn previous_error(&self) -> f64 {
        self.prev_error
    }

    pub fn desired_position(&self) -> f64 {
        self.desired_position
    }

    pub fn gains(&self) -> Gains {
        self.gains
    }
}
