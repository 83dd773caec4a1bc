//! Bullet simulation
//!
//! Everything the judgment loop needs to move and retire bullets. No backend
//! dependencies: drawing and sound go through the `platform` traits.

pub mod bullet;
pub mod playfield;
pub mod pool;

pub use bullet::{Advance, Bullet, BulletSpawn};
pub use playfield::{JudgmentLine, Playfield};
pub use pool::{BulletHandle, BulletPool, HitCallback, HitEvent, PoolConfig, PoolStats, UpdateReport};
