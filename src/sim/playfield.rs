//! Playfield rectangle and judgment line geometry

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Axis-aligned playfield bounds in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub min: Vec2,
    pub max: Vec2,
}

impl Default for Playfield {
    fn default() -> Self {
        Self::from_size(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl Playfield {
    /// Playfield anchored at the origin
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            min: Vec2::ZERO,
            max: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// True if the rectangle has positive area
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    /// True if a circle at `pos` with `radius` is entirely outside the bounds
    /// inflated by that radius, on any side
    pub fn is_outside(&self, pos: Vec2, radius: f32) -> bool {
        pos.x < self.min.x - radius
            || pos.x > self.max.x + radius
            || pos.y < self.min.y - radius
            || pos.y > self.max.y + radius
    }
}

/// The judgment line: a vertical threshold at `x`, marked on screen by a
/// horizontal track at `y` with a circle of `radius` where notes are judged
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JudgmentLine {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl Default for JudgmentLine {
    fn default() -> Self {
        Self {
            x: JUDGMENT_X,
            y: JUDGMENT_Y,
            radius: JUDGMENT_RADIUS,
        }
    }
}

impl JudgmentLine {
    /// Center of the judgment marker
    #[inline]
    pub fn marker(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}
