//! External (disturbance) force contributors
//!
//! The controllers produce the PID force; anything else that pushes on the
//! drone (wind, a gravity offset) is a `Disturbance`. A `ForceSet` sums them
//! into the external force vector the driver adds each step

use super::error::{check_dimension, SimError};
use super::states::NVec;

/// Disturbance terms applied to one drone, summed per step
pub struct ForceSet {
    terms: Vec<Box<dyn Disturbance + Send + Sync>>,
}

impl ForceSet {
    /// No disturbance: the external force is the zero vector
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Push another disturbance onto the drone
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Disturbance + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// External force at time `t`, written into `out`
    ///
    /// `out` is zeroed first and its length is the drone's dimension; a term
    /// that does not match it fails with `DimensionMismatch` on `external_force`
    pub fn accumulate(&self, t: f64, out: &mut NVec) -> Result<(), SimError> {
        let dim = out.len();
        out.fill(0.0);
        for term in &self.terms {
            term.force(t, out)?;
            check_dimension("external_force", dim, out.len())?;
        }
        Ok(())
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Something that pushes on the drone besides its controllers
///
/// Implementations add their force into `out`, leaving its length unchanged,
/// and return `DimensionMismatch` instead of adding a vector of another length
pub trait Disturbance {
    fn force(&self, t: f64, out: &mut NVec) -> Result<(), SimError>;
}

/// Steady push, the same at every step (e.g. a crosswind)
#[derive(Debug, Clone)]
pub struct ConstantForce(pub NVec);

impl Disturbance for ConstantForce {
    fn force(&self, _t: f64, out: &mut NVec) -> Result<(), SimError> {
        check_dimension("external_force", out.len(), self.0.len())?;
        *out += &self.0;
        Ok(())
    }
}
