//! Core state type for the point-mass drone
//!
//! Position and velocity are `NVec` (dynamic length) so the same body
//! works in any number of dimensions; the length is fixed at construction

use nalgebra::DVector;

use super::error::SimError;
use super::integrator::semi_implicit_euler;

pub type NVec = DVector<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Drone {
    pub(crate) m: f64,         // mass
    pub(crate) x: NVec,        // position
    pub(crate) v: NVec,        // velocity
}

impl Drone {
    /// Place a drone at rest at `initial_position`
    pub fn new(mass: f64, initial_position: NVec) -> Result<Self, SimError> {
        if !(mass > 0.0) || !mass.is_finite() {
            return Err(SimError::InvalidMass(mass));
        }
        let v = NVec::zeros(initial_position.len());
        Ok(Self { m: mass, x: initial_position, v })
    }

    /// Integrate `force` over `dt` in place (semi-implicit Euler)
    pub fn apply_force(&mut self, force: &NVec, dt: f64) -> Result<(), SimError> {
        semi_implicit_euler(self, force, dt)
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn position(&self) -> &NVec {
        &self.x
    }

    pub fn velocity(&self) -> &NVec {
        &self.v
    }

    pub fn dimension(&self) -> usize {
        self.x.len()
    }
}
