use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a [`GameConfig`](crate::GameConfig).
///
/// The simulation itself never fails; configuration is the only input that
/// comes from outside the process.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has fields of the wrong type.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The values parsed but describe an unplayable game.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
