//! A single pooled projectile

use glam::Vec2;

use super::playfield::Playfield;
use crate::consts::BULLET_SPRITE_SIZE;
use crate::platform::{Canvas, TextureId};
use crate::renderer::colors::BULLET_TINT;

/// Result of advancing a bullet by one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Bullet was inactive, nothing happened
    Idle,
    /// Bullet moved and is still in play
    Moved,
    /// Bullet reached the judgment line and deactivated itself
    Judged,
}

/// Spawn parameters for a bullet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulletSpawn {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Split level, reserved for split-on-hit; never read by the simulation
    pub level: i32,
}

/// A projectile record.
///
/// An inactive bullet always holds the zero state; only the pool reactivates
/// it via [`Bullet::init`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub level: i32,
    pub active: bool,
}

impl Bullet {
    /// A zeroed, inactive bullet
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn init(&mut self, spawn: &BulletSpawn) {
        self.pos = spawn.pos;
        self.vel = spawn.vel;
        self.radius = spawn.radius;
        self.level = spawn.level;
        self.active = true;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    /// True if this bullet holds exactly the pooled zero state
    pub fn is_zeroed(&self) -> bool {
        *self == Self::default()
    }

    /// Integrate one step; reaching `judgment_x` or beyond judges the bullet
    pub(crate) fn advance(&mut self, dt: f32, judgment_x: f32) -> Advance {
        if !self.active {
            return Advance::Idle;
        }

        self.pos += self.vel * dt;

        if self.pos.x <= judgment_x {
            self.active = false;
            return Advance::Judged;
        }
        Advance::Moved
    }

    /// True if the bullet, inflated by its radius, has left the playfield
    pub fn is_off_screen(&self, playfield: &Playfield) -> bool {
        playfield.is_outside(self.pos, self.radius)
    }

    /// Draw the bullet sprite; the sprite size does not follow the radius
    pub fn draw(&self, canvas: &mut dyn Canvas, texture: TextureId) {
        if !self.active {
            return;
        }
        canvas.draw_texture(texture, self.pos, Vec2::splat(BULLET_SPRITE_SIZE), BULLET_TINT);
    }
}
