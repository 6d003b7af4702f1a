//! Configuration error types.

/// Errors that can occur when loading, saving, parsing, or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to write the config file to disk.
    #[error("failed to write config: {0}")]
    WriteError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Failed to serialize config to RON.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),

    /// The camera pitch bounds are inverted or not finite.
    #[error("invalid pitch range: min {min} must be <= max {max} and both finite")]
    InvalidPitchRange {
        /// Configured lower bound in degrees.
        min: f32,
        /// Configured upper bound in degrees.
        max: f32,
    },

    /// The spring arm length is negative or not finite.
    #[error("invalid arm length: {0}")]
    InvalidArmLength(f32),

    /// The simulation tick rate is zero.
    #[error("invalid tick rate: {0}")]
    InvalidTickRate(u32),
}
