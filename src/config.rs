//! Launcher settings, read from an optional TOML file.
//!
//! Every field has a default, so an empty or partial file is valid. CLI flags
//! are merged on top by the binary before [`Settings::validate`] runs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const APP_DIR: &str = "terminal_arcade";

// ── Tuning tables ────────────────────────────────────────────────────────────

/// Space Invaders timings and probabilities.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvadersTuning {
    pub lives: u32,
    /// Seconds between formation steps with a full wave.
    pub move_delay: f32,
    /// Floor for the step interval as the wave thins out.
    pub min_move_delay: f32,
    pub animation_interval: f32,
    /// Seconds between enemy fire rolls.
    pub fire_interval: f32,
    pub fire_chance: f64,
    /// Seconds the UFO stays away before spawn rolls start.
    pub ufo_min_delay: f32,
    pub ufo_chance: f64,
}

impl Default for InvadersTuning {
    fn default() -> Self {
        Self {
            lives: 3,
            move_delay: 0.5,
            min_move_delay: 0.1,
            animation_interval: 0.5,
            fire_interval: 1.0,
            fire_chance: 0.3,
            ufo_min_delay: 10.0,
            ufo_chance: 0.05,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakoutTuning {
    pub lives: u32,
}

impl Default for BreakoutTuning {
    fn default() -> Self {
        Self { lives: 3 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PongTuning {
    pub winning_score: u32,
}

impl Default for PongTuning {
    fn default() -> Self {
        Self { winning_score: 11 }
    }
}

// ── Settings ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Target frame rate of the launcher loop.
    pub fps: u32,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub invaders: InvadersTuning,
    pub breakout: BreakoutTuning,
    pub pong: PongTuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fps: 30,
            seed: None,
            invaders: InvadersTuning::default(),
            breakout: BreakoutTuning::default(),
            pong: PongTuning::default(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text. `path` is only used for error messages.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Load `explicit` if given; otherwise the default config file if it
    /// exists; otherwise defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Reject values that would make a game misbehave (e.g. `gen_bool` panics
    /// outside `[0, 1]`).
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("fps", self.fps as f64)?;

        let inv = &self.invaders;
        positive("invaders.lives", inv.lives as f64)?;
        positive("invaders.move_delay", inv.move_delay as f64)?;
        positive("invaders.min_move_delay", inv.min_move_delay as f64)?;
        positive("invaders.animation_interval", inv.animation_interval as f64)?;
        positive("invaders.fire_interval", inv.fire_interval as f64)?;
        if inv.ufo_min_delay < 0.0 {
            return Err(ConfigError::NonPositive {
                field: "invaders.ufo_min_delay",
                value: inv.ufo_min_delay as f64,
            });
        }
        probability("invaders.fire_chance", inv.fire_chance)?;
        probability("invaders.ufo_chance", inv.ufo_chance)?;
        if inv.min_move_delay > inv.move_delay {
            return Err(ConfigError::CadenceOrder {
                min: inv.min_move_delay,
                base: inv.move_delay,
            });
        }

        positive("breakout.lives", self.breakout.lives as f64)?;
        positive("pong.winning_score", self.pong.winning_score as f64)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn probability(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Probability { field, value })
    }
}

// ── Paths ────────────────────────────────────────────────────────────────────

/// `<config_dir>/terminal_arcade/config.toml`, if the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// Directory for the log file; falls back to the temp dir.
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
}
