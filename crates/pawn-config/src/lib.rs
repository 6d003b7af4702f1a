//! Configuration system for the pawn controller workspace.
//!
//! Settings persist to disk as a RON file, are validated on load, and can be
//! overridden from the command line via clap. Unknown or missing fields fall
//! back to defaults so older and newer config files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    Config, ControllerConfig, DebugConfig, InputConfig, MovementConfig, SimulationConfig,
};
pub use error::ConfigError;
