//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name used inside the config directory.
const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Camera rig and body orientation settings.
    pub controller: ControllerConfig,
    /// Kinematic movement integrator settings.
    pub movement: MovementConfig,
    /// Input sample shaping.
    pub input: InputConfig,
    /// Fixed-step simulation settings.
    pub simulation: SimulationConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Construction-time controller settings. Angles are in degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ControllerConfig {
    /// Lowest pitch the camera rig may reach (looking down).
    pub pitch_min: f32,
    /// Highest pitch the camera rig may reach (looking up).
    pub pitch_max: f32,
    /// Distance between the rig pivot and the camera, in world units.
    pub arm_length: f32,
}

/// Floating movement integrator settings, in world units per second.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MovementConfig {
    /// Speed reached at full input.
    pub max_speed: f32,
    /// Rate at which velocity approaches the requested velocity.
    pub acceleration: f32,
    /// Rate at which velocity decays when there is no input.
    pub deceleration: f32,
}

/// Input configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Multiplier applied to look samples (degrees per unit of input).
    pub look_sensitivity: f32,
    /// Invert the vertical look axis.
    pub invert_look_y: bool,
    /// Radial dead zone applied to move samples.
    pub move_dead_zone: f32,
}

/// Fixed-step simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Ticks per second.
    pub tick_rate: u32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            pitch_min: -80.0,
            pitch_max: 80.0,
            arm_length: 300.0,
        }
    }
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            max_speed: 1200.0,
            acceleration: 4000.0,
            deceleration: 8000.0,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            look_sensitivity: 1.0,
            invert_look_y: false,
            move_dead_zone: 0.0,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { tick_rate: 60 }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Validation ---

impl ControllerConfig {
    /// Check the pitch bounds and arm length.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = self.pitch_min.is_finite() && self.pitch_max.is_finite();
        if !finite || self.pitch_min > self.pitch_max {
            return Err(ConfigError::InvalidPitchRange {
                min: self.pitch_min,
                max: self.pitch_max,
            });
        }
        if !self.arm_length.is_finite() || self.arm_length < 0.0 {
            return Err(ConfigError::InvalidArmLength(self.arm_length));
        }
        Ok(())
    }
}

impl Config {
    /// Validate every section that has constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.controller.validate()?;
        if self.simulation.tick_rate == 0 {
            return Err(ConfigError::InvalidTickRate(self.simulation.tick_rate));
        }
        Ok(())
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }
}
