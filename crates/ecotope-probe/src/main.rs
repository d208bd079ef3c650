//! Probe binary: samples the four environmental signals at one world point and
//! reports every built-in biome's score, range check and color.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p ecotope-probe -- --seed 7 --x 120 --y -45`.

mod report;

use clap::Parser;
use ecotope_config::{CliArgs, Config, default_config_dir};
use ecotope_terrain::{BiomeCatalog, EnvironmentSampler};
use tracing::{info, warn};

fn main() {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    ecotope_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let world = &config.world;
    info!(
        seed = world.seed,
        depth = world.depth,
        frequency = world.frequency,
        "Probing ({}, {})",
        config.probe.x,
        config.probe.y
    );
    if world.depth == 0 {
        warn!("depth is 0: every signal samples as 0");
    }

    let sampler = EnvironmentSampler::new(world.seed, world.depth, world.frequency);
    let catalog = BiomeCatalog::standard();

    let sample = sampler.sample(config.probe.x, config.probe.y);
    info!("Sample: {}", report::describe_sample(&sample));

    let reports = report::build_reports(&catalog, &sample);
    for line in &reports {
        println!("{line}");
    }

    let out_of_range = reports.iter().filter(|r| !r.range.is_in_range()).count();
    info!(
        "Scored {} biomes, {} out of range",
        reports.len(),
        out_of_range
    );
}
