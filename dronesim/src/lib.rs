pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Drone, NVec};
pub use simulation::error::{SimError, MAX_STEPS};
pub use simulation::pid::{Gains, PidController};
pub use simulation::forces::{ConstantForce, Disturbance, ForceSet};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::params::Parameters;
pub use simulation::history::{History, HistoryRecord, Series};
pub use simulation::scenario::Scenario;
pub use simulation::engine::{run, LogObserver, RunObserver, Simulator};

pub use configuration::config::{ControllerConfig, DroneConfig, ParametersConfig, ScenarioConfig, TargetConfig};
pub use configuration::validator::{DefaultValidator, InputValidator};

pub use visualization::charts::generate_history_chart;
pub use visualization::viewer::run_viewer;

pub use benchmark::benchmark::{bench_dimensions, bench_run_curve};
