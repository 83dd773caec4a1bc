//! Game configuration
//!
//! Loaded from an optional JSON file; every field falls back to the values the
//! game ships with, so a config file only needs the keys it changes.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{JudgmentLine, Playfield, PoolConfig};

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("max_capacity ({max}) must be at least initial_capacity ({initial})")]
    CapacityOrder { initial: usize, max: usize },
    #[error("Playfield must have positive width and height")]
    EmptyPlayfield,
    #[error("Judgment line x={0} lies outside the playfield")]
    JudgmentOutsidePlayfield(f32),
    #[error("Spawn point ({x}, {y}) must lie inside the playfield, right of the judgment line")]
    SpawnOutsidePlayfield { x: f32, y: f32 },
    #[error("Spawn interval must be positive, got {0}")]
    SpawnInterval(f32),
    #[error("Bullet speed must be positive, got {0}")]
    SpawnSpeed(f32),
    #[error("Bullet radius must not be negative, got {0}")]
    SpawnRadius(f32),
}

/// Pool sizing bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolCapacity {
    pub initial_capacity: usize,
    pub max_capacity: usize,
}

impl Default for PoolCapacity {
    fn default() -> Self {
        Self {
            initial_capacity: POOL_INITIAL_CAPACITY,
            max_capacity: POOL_MAX_CAPACITY,
        }
    }
}

/// How and how often bullets are spawned
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Seconds between spawns
    pub interval: f32,
    /// Leftward speed (pixels/s)
    pub speed: f32,
    pub radius: f32,
    /// Split level given to new bullets
    pub level: i32,
    /// Spawn distance from the right playfield edge
    pub edge_offset: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            interval: SPAWN_INTERVAL,
            speed: BULLET_SPEED,
            radius: BULLET_RADIUS,
            level: BULLET_LEVEL,
            edge_offset: SPAWN_EDGE_OFFSET,
        }
    }
}

/// Player audio preferences
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub playfield: Playfield,
    pub judgment: JudgmentLine,
    pub pool: PoolCapacity,
    pub spawn: SpawnConfig,
    /// Hits needed to finish a run (0 = endless)
    pub target_hits: u32,
    /// Show the title screen before playing
    pub start_in_menu: bool,
    pub audio: AudioSettings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playfield: Playfield::default(),
            judgment: JudgmentLine::default(),
            pool: PoolCapacity::default(),
            spawn: SpawnConfig::default(),
            target_hits: TARGET_HITS,
            start_in_menu: false,
            audio: AudioSettings::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pool.max_capacity < self.pool.initial_capacity {
            return Err(ConfigError::CapacityOrder {
                initial: self.pool.initial_capacity,
                max: self.pool.max_capacity,
            });
        }
        if !self.playfield.is_valid() {
            return Err(ConfigError::EmptyPlayfield);
        }
        let x = self.judgment.x;
        if !(self.playfield.min.x..=self.playfield.max.x).contains(&x) {
            return Err(ConfigError::JudgmentOutsidePlayfield(x));
        }
        let spawn = self.spawn_point();
        let inside_x = (self.playfield.min.x..=self.playfield.max.x).contains(&spawn.x);
        let inside_y = (self.playfield.min.y..=self.playfield.max.y).contains(&spawn.y);
        if !inside_x || !inside_y || spawn.x <= x {
            return Err(ConfigError::SpawnOutsidePlayfield {
                x: spawn.x,
                y: spawn.y,
            });
        }
        if self.spawn.interval.is_nan() || self.spawn.interval <= 0.0 {
            return Err(ConfigError::SpawnInterval(self.spawn.interval));
        }
        if self.spawn.speed.is_nan() || self.spawn.speed <= 0.0 {
            return Err(ConfigError::SpawnSpeed(self.spawn.speed));
        }
        if self.spawn.radius.is_nan() || self.spawn.radius < 0.0 {
            return Err(ConfigError::SpawnRadius(self.spawn.radius));
        }
        Ok(())
    }

    /// Where new bullets enter: `edge_offset` in from the right edge, on the
    /// judgment track
    pub fn spawn_point(&self) -> Vec2 {
        Vec2::new(self.playfield.max.x - self.spawn.edge_offset, self.judgment.y)
    }

    /// Pool settings derived from this config
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig {
            initial_capacity: self.pool.initial_capacity,
            max_capacity: self.pool.max_capacity,
            judgment_x: self.judgment.x,
            playfield: self.playfield,
        }
    }
}
