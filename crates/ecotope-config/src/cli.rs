//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Probe command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "ecotope-probe", about = "Score every biome at one world point")]
pub struct CliArgs {
    /// World seed.
    #[arg(long)]
    pub seed: Option<u32>,

    /// Octaves per noise field.
    #[arg(long)]
    pub depth: Option<u32>,

    /// Coordinate frequency.
    #[arg(long)]
    pub frequency: Option<f64>,

    /// X coordinate of the probed point.
    #[arg(long, allow_negative_numbers = true)]
    pub x: Option<f64>,

    /// Y coordinate of the probed point.
    #[arg(long, allow_negative_numbers = true)]
    pub y: Option<f64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.world.seed = seed;
        }
        if let Some(depth) = args.depth {
            self.world.depth = depth;
        }
        if let Some(frequency) = args.frequency {
            self.world.frequency = frequency;
        }
        if let Some(x) = args.x {
            self.probe.x = x;
        }
        if let Some(y) = args.y {
            self.probe.y = y;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
