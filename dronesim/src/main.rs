use dronesim::{ScenarioConfig, Scenario, Simulator, Series};
use dronesim::{DefaultValidator, InputValidator};
use dronesim::{generate_history_chart, run_viewer};
use dronesim::{bench_dimensions, bench_run_curve};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Point-mass drone regulated toward a target by per-axis PID controllers")]
struct Args {
    /// Scenario file under `scenarios/`; the built-in scenario is used when omitted
    #[arg(short, long)]
    file_name: Option<String>,

    /// Override the proportional gain on every axis
    #[arg(long)]
    kp: Option<f64>,

    /// Override the integral gain on every axis
    #[arg(long)]
    ki: Option<f64>,

    /// Override the derivative gain on every axis
    #[arg(long)]
    kd: Option<f64>,

    /// Write the recorded history to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write position and force charts of the run to this PNG file
    #[arg(long)]
    plot: Option<PathBuf>,

    /// Replay the run in a 3D window
    #[arg(long)]
    view: bool,

    /// Run the timing benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    let Some(file_name) = &args.file_name else {
        info!("no scenario file given, using built-in scenario");
        return Ok(ScenarioConfig::default());
    };

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    ScenarioConfig::load(&config_path)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_run_curve();
        bench_dimensions();
        return Ok(());
    }

    let mut scenario_cfg = load_scenario(&args)?;
    scenario_cfg.controller.override_gains(args.kp, args.ki, args.kd);

    DefaultValidator.validate(&scenario_cfg).context("invalid scenario")?;

    let scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;
    let history = Simulator::new(scenario).run().context("simulation failed")?;

    if let (Some(last), Some(err)) = (history.records().last(), history.final_error()) {
        info!("final position: {:?}", last.position.as_slice());
        info!("final error:    {:?}", err.as_slice());
        for axis in 0..history.dimension() {
            let x = history.axis_series(axis, Series::Position);
            let peak = x.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            info!("axis {axis}: peak position {peak:.4}, target {:.4}", history.desired_position()[axis]);
        }
    }

    if let Some(path) = &args.csv {
        history
            .to_csv_path(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("history exported to {}", path.display());
    }

    if let Some(path) = &args.plot {
        generate_history_chart(&history, path)
            .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display()))?;
        info!("charts written to {}", path.display());
    }

    if args.view {
        run_viewer(&history);
    }

    Ok(())
}
