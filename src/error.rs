use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading or validating [`crate::config::Settings`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{field} must be a probability between 0 and 1, got {value}")]
    Probability { field: &'static str, value: f64 },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("invaders.min_move_delay ({min}) exceeds invaders.move_delay ({base})")]
    CadenceOrder { min: f32, base: f32 },
}
