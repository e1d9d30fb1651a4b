use std::time::Instant;

use crate::configuration::config::{ControllerConfig, DroneConfig, ParametersConfig, ScenarioConfig, TargetConfig};
use crate::simulation::engine::Simulator;
use crate::simulation::pid::Gains;
use crate::simulation::scenario::Scenario;

/// Helper to build a bench scenario with `dim` axes and `steps` steps
fn make_config(dim: usize, steps: usize) -> ScenarioConfig {
    let dt = 0.01;
    ScenarioConfig {
        parameters: ParametersConfig {
            time_step: dt,
            total_time: dt * steps as f64,
        },
        drone: DroneConfig {
            mass: 1.0,
            initial_position: vec![0.0; dim],
        },
        target: TargetConfig {
            // deterministic targets, no rand needed
            desired_position: (0..dim).map(|k| ((k as f64) * 0.37).sin() * 10.0).collect(),
        },
        controller: ControllerConfig::Shared(Gains::new(0.6, 0.02, 1.0)),
        external_force: Some(vec![0.5; dim]),
    }
}

/// Average wall time of one run in ms; silent (no observers)
fn time_run(cfg: ScenarioConfig, repeats: usize) -> Option<f64> {
    let scenario = match Scenario::build_scenario(cfg) {
        Ok(s) => s,
        Err(e) => {
            log::error!("bench scenario rejected: {e}");
            return None;
        }
    };
    let sim = Simulator::without_observers(scenario);

    // Warm up
    sim.run().ok()?;

    let t0 = Instant::now();
    for _ in 0..repeats {
        sim.run().ok()?;
    }
    Some(t0.elapsed().as_secs_f64() * 1000.0 / repeats as f64)
}

/// Run time against step count for a 3-axis drone
/// Paste output directly into excel to graph
pub fn bench_run_curve() {
    println!("steps,ms");

    for steps in (1_000..=50_000).step_by(1_000) {
        // Short runs: average a few repeats to smooth noise
        let repeats = if steps <= 10_000 { 5 } else { 1 };

        if let Some(ms) = time_run(make_config(3, steps), repeats) {
            println!("{},{:.6}", steps, ms);
        }
    }
}

/// Run time against number of axes at a fixed step count
pub fn bench_dimensions() {
    let steps = 10_000;

    for dim in 1..=8 {
        if let Some(ms) = time_run(make_config(dim, steps), 3) {
            println!("D = {dim}, steps = {steps}, run = {:8.3} ms", ms);
        }
    }
}
