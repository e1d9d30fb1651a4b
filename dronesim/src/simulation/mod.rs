pub mod error;
pub mod states;
pub mod params;
pub mod pid;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod history;
pub mod scenario;
