use orbitsim::{bench_tick, Scenario, ScenarioConfig, Space};

use anyhow::Result;
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML under scenarios/; omit to run the built-in solar system
    #[arg(short)]
    file_name: Option<String>,

    /// Number of ticks to simulate
    #[arg(short, default_value_t = 24 * 365)]
    ticks: u64,

    /// Run the tick scaling benchmark instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.bench {
        bench_tick();
        return Ok(());
    }

    let mut space = match &args.file_name {
        Some(name) => {
            let cfg = load_scenario_from_yaml(name)?;
            Scenario::build_scenario(cfg).space
        }
        None => Space::new(),
    };

    info!(
        "starting: {} bodies ({} stars, {} planets), dt = {} s",
        space.bodies().len(),
        space.star_count(),
        space.planet_count(),
        space.dt
    );

    for _ in 0..args.ticks {
        space.tick();
    }

    println!("simulated date: {}", space.elapsed_date());
    println!(
        "{} bodies remaining ({} stars, {} planets)",
        space.bodies().len(),
        space.star_count(),
        space.planet_count()
    );
    for body in space.bodies() {
        println!(
            "{:10} m = {:10.4e} kg  x = ({:12.5e}, {:12.5e})  v = ({:10.3e}, {:10.3e})",
            body.name, body.mass, body.position.x, body.position.y, body.speed.x, body.speed.y
        );
    }

    Ok(())
}
