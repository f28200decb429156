//! Game tunables.
//!
//! Every value has a default matching the shipped game, so a config file only
//! needs to name the fields it overrides.  Distances are world pixels, times
//! are simulation milliseconds, and "per tick" values assume one tick per
//! animation frame.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Every tunable the simulation reads.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── World ────────────────────────────────────────────────────────────────
    pub width: f32,
    pub height: f32,
    pub lane_width: f32,
    /// Ground baseline: the character's feet rest here.
    pub ground_y: f32,

    // ── Character ────────────────────────────────────────────────────────────
    pub char_width: f32,
    pub char_height: f32,
    /// Shrinks the character hitbox on every side.
    pub hitbox_margin: f32,
    /// Upward impulse (negative = up).
    pub jump_force: f32,
    pub gravity: f32,
    pub slide_ticks: u32,
    /// Exponential smoothing factor for the sideways glide.
    pub lane_smoothing: f32,
    pub animation_ticks_per_frame: u32,
    pub animation_frames: u32,
    /// Altitude held while the dragon carries the character.
    pub fly_y: f32,
    pub fly_smoothing: f32,
    /// Height above the baseline the character is dropped from after flight.
    pub fall_height_after_flight: f32,

    // ── Speed ramp ───────────────────────────────────────────────────────────
    pub initial_speed: f32,
    pub max_speed: f32,
    /// Speed gained per elapsed millisecond.
    pub speed_increment: f64,

    // ── Spawn cadences ───────────────────────────────────────────────────────
    pub candy_interval_ms: f64,
    pub obstacle_interval_ms: f64,
    pub dragon_interval_ms: f64,
    pub dragon_duration_ms: f64,
    pub candy_cluster_min: u32,
    pub candy_cluster_max: u32,
    pub candy_spacing: f32,
    pub candy_start_y: f32,
    pub obstacle_start_y: f32,
    /// Entities are discarded once they scroll this far past the bottom edge.
    pub despawn_margin: f32,

    // ── Scoring ──────────────────────────────────────────────────────────────
    pub candy_points: u32,
    pub distance_multiplier: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            lane_width: 120.0,
            ground_y: 480.0,

            char_width: 60.0,
            char_height: 100.0,
            hitbox_margin: 10.0,
            jump_force: -18.0,
            gravity: 0.8,
            slide_ticks: 30,
            lane_smoothing: 0.2,
            animation_ticks_per_frame: 4,
            animation_frames: 8,
            fly_y: 150.0,
            fly_smoothing: 0.1,
            fall_height_after_flight: 100.0,

            initial_speed: 3.5,
            max_speed: 10.0,
            speed_increment: 0.0005,

            candy_interval_ms: 2000.0,
            obstacle_interval_ms: 3000.0,
            dragon_interval_ms: 25000.0,
            dragon_duration_ms: 4000.0,
            candy_cluster_min: 3,
            candy_cluster_max: 10,
            candy_spacing: 40.0,
            candy_start_y: -100.0,
            obstacle_start_y: -300.0,
            despawn_margin: 100.0,

            candy_points: 10,
            distance_multiplier: 0.1,
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML document.  Missing fields keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("lane_width", self.lane_width),
            ("char_width", self.char_width),
            ("char_height", self.char_height),
            ("initial_speed", self.initial_speed),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }

        let intervals = [
            ("candy_interval_ms", self.candy_interval_ms),
            ("obstacle_interval_ms", self.obstacle_interval_ms),
            ("dragon_interval_ms", self.dragon_interval_ms),
            ("dragon_duration_ms", self.dragon_duration_ms),
        ];
        for (name, value) in intervals {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }

        if self.max_speed < self.initial_speed {
            return Err(ConfigError::Invalid(format!(
                "max_speed ({}) is below initial_speed ({})",
                self.max_speed, self.initial_speed
            )));
        }
        if self.candy_cluster_min == 0 || self.candy_cluster_min > self.candy_cluster_max {
            return Err(ConfigError::Invalid(format!(
                "candy cluster range {}..={} is empty",
                self.candy_cluster_min, self.candy_cluster_max
            )));
        }
        if self.hitbox_margin * 2.0 >= self.char_width {
            return Err(ConfigError::Invalid(
                "hitbox_margin leaves no character hitbox".to_string(),
            ));
        }
        if self.animation_frames == 0 || self.animation_ticks_per_frame == 0 {
            return Err(ConfigError::Invalid(
                "animation cadence must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}
