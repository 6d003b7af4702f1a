//! Headless demo for the third-person locomotion controller.
//!
//! Replays an input script against one pawn and logs where it ends up.
//!
//! Run with: `cargo run -p pawn-demo -- --script crates/pawn-demo/scripts/scenario.ron`

mod script;
mod systems;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use bevy_ecs::world::World;
use clap::Parser;
use pawn_config::{CliArgs, Config, ConfigError};
use tracing::{error, info, warn};

use script::{InputScript, ScriptError};
use systems::ScriptPlayback;

/// CLI arguments for the demo binary.
#[derive(Parser, Debug)]
#[command(name = "pawn-demo", about = "Third-person pawn controller demo")]
struct DemoArgs {
    #[command(flatten)]
    overrides: CliArgs,

    /// RON input script to replay instead of the built-in one.
    #[arg(long)]
    script: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Script(#[from] ScriptError),
}

/// `--config` if given, otherwise the platform config directory.
fn config_dir(args: &CliArgs) -> Option<PathBuf> {
    args.config
        .clone()
        .or_else(|| dirs::config_dir().map(|d| d.join("pawn")))
}

/// Load (or create) the config, apply CLI overrides, and validate the result.
fn load_config(dir: Option<&Path>, args: &CliArgs) -> Result<Config, ConfigError> {
    let mut config = match dir {
        Some(dir) => Config::load_or_create(dir)?,
        None => Config::default(),
    };
    config.apply_cli_overrides(args);
    config.validate()?;
    Ok(config)
}

fn run(args: &DemoArgs, config: &Config) -> Result<(), DemoError> {
    let script = match &args.script {
        Some(path) => InputScript::load(path)?,
        None => InputScript::builtin(),
    };
    info!(
        steps = script.steps.len(),
        ticks = script.total_ticks(),
        tick_rate = config.simulation.tick_rate,
        "starting playback"
    );

    let mut world = World::new();
    systems::setup_world(&mut world, config, script)?;
    let mut schedule = systems::build_schedule();
    while !world.resource::<ScriptPlayback>().0.is_finished() {
        schedule.run(&mut world);
    }

    let ticks = world.resource::<ScriptPlayback>().0.ticks_played();
    for s in systems::pawn_summaries(&mut world) {
        info!(
            ticks,
            position = ?s.position,
            velocity = ?s.velocity,
            yaw = s.body_yaw,
            pitch = s.rig_pitch,
            camera = ?s.camera_position,
            "playback finished"
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = DemoArgs::parse();
    let dir = config_dir(&args.overrides);
    let debug_build = cfg!(debug_assertions);
    let log_dir = dir.as_ref().map(|d| d.join("logs"));

    let config = match load_config(dir.as_deref(), &args.overrides) {
        Ok(config) => config,
        Err(e) => {
            pawn_log::init_logging(log_dir.as_deref(), debug_build, None);
            error!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    pawn_log::init_logging(log_dir.as_deref(), debug_build, Some(&config));
    if dir.is_none() {
        warn!("no config directory available, using defaults");
    }

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
