//! Configuration for the ecotope tools.
//!
//! Settings persist to disk as RON files, can be overridden from the command
//! line via clap, and tolerate missing or unknown fields.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE, Config, DebugConfig, ProbeConfig, WorldConfig, default_config_dir,
};
pub use error::ConfigError;
