//! Fixed-step time integrator for the drone body

use super::error::{check_dimension, check_time_step, SimError};
use super::states::{Drone, NVec};

/// Advance the drone by one step using semi-implicit (symplectic) Euler
///
/// a   = F / m
/// v_n+1 = v_n + dt * a
/// x_n+1 = x_n + dt * v_n+1
///
/// Velocity must be updated first; the position step uses the new velocity.
/// Nothing is mutated if `force` has the wrong length or `dt` is invalid
pub fn semi_implicit_euler(drone: &mut Drone, force: &NVec, dt: f64) -> Result<(), SimError> {
    check_dimension("force", drone.dimension(), force.len())?;
    check_time_step(dt)?;

    let a = force / drone.m;

    // Kick
    drone.v += &a * dt;

    // Drift with the updated velocity
    drone.x += &drone.v * dt;

    Ok(())
}
