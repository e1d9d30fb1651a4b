//! Simulation driver
//!
//! Owns a `Scenario` and turns it into a `History`. Every call to `run`
//! builds a fresh drone and a fresh controller per axis, so runs never share
//! state and repeating a run reproduces the same history bit for bit

use log::{debug, info};

use crate::configuration::config::ScenarioConfig;
use crate::simulation::error::{check_dimension, SimError};
use crate::simulation::history::{History, HistoryRecord};
use crate::simulation::pid::PidController;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Drone, NVec};

/// Hook called before and after a run; never alters the result
pub trait RunObserver {
    fn on_start(&self, _scenario: &Scenario) {}
    fn on_complete(&self, _history: &History) {}
}

/// Reports run start and completion through the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl RunObserver for LogObserver {
    fn on_start(&self, scenario: &Scenario) {
        info!(
            "Running simulation... (dimensions = {}, steps = {}, dt = {})",
            scenario.dimension(),
            scenario.parameters().step_count(),
            scenario.parameters().time_step,
        );
    }

    fn on_complete(&self, history: &History) {
        match history.final_error() {
            Some(err) => info!(
                "Simulation completed. ({} steps, final error norm = {:.6})",
                history.len(),
                err.norm()
            ),
            None => info!("Simulation completed. (no steps)"),
        }
    }
}

pub struct Simulator {
    scenario: Scenario,
    observers: Vec<Box<dyn RunObserver + Send + Sync>>,
}

impl Simulator {
    /// Driver with the default `LogObserver` attached
    pub fn new(scenario: Scenario) -> Self {
        Self::without_observers(scenario).with_observer(LogObserver)
    }

    pub fn without_observers(scenario: Scenario) -> Self {
        Self {
            scenario,
            observers: Vec::new(),
        }
    }

    pub fn with_observer<O>(mut self, observer: O) -> Self
    where
        O: RunObserver + Send + Sync + 'static,
    {
        self.observers.push(Box::new(observer));
        self
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// Simulate the scenario from t = 0 and return the full history
    ///
    /// Per step, in order: one PID force per axis, add the disturbance,
    /// integrate the drone, record copies of everything
    pub fn run(&self) -> Result<History, SimError> {
        let sc = &self.scenario;
        let params = sc.parameters();
        let dim = sc.dimension();
        let dt = params.time_step;

        // Re-check what the scenario promises before anything is stepped
        params.validate()?;
        if dim == 0 {
            return Err(SimError::EmptyDimension);
        }
        check_dimension("desired_position", dim, sc.desired_position().len())?;
        check_dimension("gains", dim, sc.gains().len())?;

        let mut drone = Drone::new(sc.mass(), sc.initial_position().clone())?;

        // One independent controller per axis
        let mut controllers = sc
            .gains()
            .iter()
            .zip(sc.desired_position().iter())
            .enumerate()
            .map(|(axis, (gains, &target))| PidController::for_axis(*gains, target, axis))
            .collect::<Result<Vec<_>, _>>()?;

        for observer in &self.observers {
            observer.on_start(sc);
        }

        let steps = params.step_count();
        let mut history = History::with_capacity(sc.desired_position().clone(), steps);
        let mut pid_force = NVec::zeros(dim);
        let mut external = NVec::zeros(dim);

        for k in 0..steps {
            let t = params.time_at(k);

            let mut p = NVec::zeros(dim);
            let mut i = NVec::zeros(dim);
            let mut d = NVec::zeros(dim);

            for (axis, pid) in controllers.iter_mut().enumerate() {
                pid_force[axis] = pid.compute_force(drone.position()[axis], dt)?;
                p[axis] = pid.p();
                i[axis] = pid.i();
                d[axis] = pid.d();
            }

            sc.forces().accumulate(t, &mut external)?;
            let net_force = &pid_force + &external;

            drone.apply_force(&net_force, dt)?;

            debug!("t = {t:.4}, position = {:?}", drone.position().as_slice());

            history.push(HistoryRecord {
                t,
                position: drone.position().clone(),
                net_force,
                p,
                i,
                d,
            });
        }

        for observer in &self.observers {
            observer.on_complete(&history);
        }

        Ok(history)
    }
}

/// Build the scenario and run it with the default observer
pub fn run(cfg: ScenarioConfig) -> Result<History, SimError> {
    let scenario = Scenario::build_scenario(cfg)?;
    Simulator::new(scenario).run()
}
