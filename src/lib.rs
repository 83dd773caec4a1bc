//! Split Bullets - a judgment-line rhythm game loop
//!
//! Core modules:
//! - `sim`: Bullet entities and the pool that spawns, advances and recycles them
//! - `game`: Session shell (spawn timer, hit counter, phases, HUD)
//! - `platform`: Resource handles and the drawing/audio traits the backend implements
//! - `renderer`: Backend-neutral frame building (vertices, sprites, text)
//! - `audio`: Volume-aware cue queue
//! - `config`: JSON configuration with validation

pub mod audio;
pub mod config;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use game::{FrameInput, GamePhase, Session};

/// Game configuration constants
pub mod consts {
    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 1200.0;
    pub const SCREEN_HEIGHT: f32 = 960.0;

    /// Judgment marker: a quarter of the way in, three quarters down
    pub const JUDGMENT_X: f32 = SCREEN_WIDTH / 4.0;
    pub const JUDGMENT_Y: f32 = SCREEN_HEIGHT / 4.0 * 3.0;
    pub const JUDGMENT_RADIUS: f32 = 15.0;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 300.0;
    pub const BULLET_RADIUS: f32 = 20.0;
    pub const BULLET_LEVEL: i32 = 1;
    /// Sprite edge length, independent of the collision radius
    pub const BULLET_SPRITE_SIZE: f32 = 50.0;

    /// Seconds between spawns
    pub const SPAWN_INTERVAL: f32 = 0.6;
    /// Spawn distance from the right edge
    pub const SPAWN_EDGE_OFFSET: f32 = 50.0;

    /// Pool sizing
    pub const POOL_INITIAL_CAPACITY: usize = 20;
    pub const POOL_MAX_CAPACITY: usize = 100;

    /// Hits needed to finish a run
    pub const TARGET_HITS: u32 = 1000;

    /// Longest frame the runner will feed the simulation (prevents tunneling
    /// past the playfield after a stall)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
