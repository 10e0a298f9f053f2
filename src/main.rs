use ballsim::{run_2d, Scenario, ScenarioConfig};
use ballsim::{bench_step, bench_step_curve};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Elastic balls bouncing inside a circular container")]
struct Args {
    /// Scenario file: a path, or a name under `scenarios/`. Defaults built in when omitted.
    #[arg(short, long)]
    file: Option<String>,

    /// Run without a window and print energy/momentum
    #[arg(long)]
    headless: bool,

    /// Ticks to run in headless mode
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Run the step benchmark and exit
    #[arg(long)]
    bench: bool,

    /// With --bench, print the CSV sweep instead of the summary
    #[arg(long)]
    curve: bool,
}

// load here to keep main clean
fn load_scenario(file: Option<&str>) -> Result<ScenarioConfig> {
    let Some(name) = file else {
        return Ok(ScenarioConfig::default());
    };

    let direct = PathBuf::from(name);
    let path = if direct.is_file() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(name)
    };

    ScenarioConfig::from_path(&path)
}

fn run_headless(mut scenario: Scenario, ticks: u64) {
    // Headless runs with no bodies in the file get one from the default panel
    if scenario.world.is_empty() {
        scenario.spawn_from_controls();
    }

    let e0 = scenario.world.total_kinetic_energy();
    let mut impulses = 0;
    let mut wall_bounces = 0;
    for _ in 0..ticks {
        let report = scenario.step();
        impulses += report.impulses.len();
        wall_bounces += report.wall_bounces;
    }

    let world = &scenario.world;
    let p = world.total_momentum();
    println!("ticks        {}", world.tick);
    println!("bodies       {}", world.len());
    println!("impulses     {impulses}");
    println!("wall bounces {wall_bounces}");
    println!("energy       {:.4} -> {:.4}", e0, world.total_kinetic_energy());
    println!("momentum     ({:.4}, {:.4})", p.x, p.y);
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        if args.curve {
            bench_step_curve();
        } else {
            bench_step();
        }
        return Ok(());
    }

    let scenario_cfg = load_scenario(args.file.as_deref()).context("failed to load scenario")?;

    if args.headless {
        // The windowed viewer installs its own subscriber through Bevy's LogPlugin
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .init();

        let scenario = Scenario::build_scenario(scenario_cfg);
        run_headless(scenario, args.ticks);
    } else {
        let scenario = Scenario::build_scenario(scenario_cfg);
        run_2d(scenario);
    }

    Ok(())
}
