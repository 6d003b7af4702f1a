//! Command-line overrides for configuration values.

use std::path::PathBuf;

use clap::Args;

use crate::Config;

/// Configuration overrides accepted on the command line.
///
/// CLI values override settings loaded from `config.ron`. Binaries flatten
/// this into their own parser.
#[derive(Args, Debug, Clone, Default)]
pub struct CliArgs {
    /// Lowest camera pitch in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub pitch_min: Option<f32>,

    /// Highest camera pitch in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub pitch_max: Option<f32>,

    /// Spring arm length in world units.
    #[arg(long)]
    pub arm_length: Option<f32>,

    /// Simulation ticks per second.
    #[arg(long)]
    pub tick_rate: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    ///
    /// The result is not re-validated here; call [`Config::validate`] afterwards.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(min) = args.pitch_min {
            self.controller.pitch_min = min;
        }
        if let Some(max) = args.pitch_max {
            self.controller.pitch_max = max;
        }
        if let Some(len) = args.arm_length {
            self.controller.arm_length = len;
        }
        if let Some(rate) = args.tick_rate {
            self.simulation.tick_rate = rate;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
