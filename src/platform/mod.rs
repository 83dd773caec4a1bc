//! Platform abstraction layer
//!
//! The window, GPU and audio device belong to the host backend. The game only
//! sees them through:
//! - Opaque resource handles (`TextureId`, `SoundId`) loaded once at startup
//! - `Canvas` for drawing primitives
//! - `AudioOut` for one-shot sound cues

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// Handle to a texture owned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureId(pub u32);

/// Handle to a loaded sound owned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SoundId(pub u32);

/// Resources shared by every bullet in a session.
///
/// The backend loads these before the first frame and releases them after the
/// session is dropped; the simulation only carries the handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assets {
    pub bullet_texture: TextureId,
    pub hit_sound: SoundId,
}

impl Assets {
    pub fn new(bullet_texture: TextureId, hit_sound: SoundId) -> Self {
        Self {
            bullet_texture,
            hit_sound,
        }
    }
}

/// Drawing surface for one rendered frame
pub trait Canvas {
    /// Fill the whole frame with a color
    fn clear(&mut self, color: Color);

    /// Draw a texture stretched to `size`, centered on `center`
    fn draw_texture(&mut self, texture: TextureId, center: Vec2, size: Vec2, tint: Color);

    /// Draw a 1px line segment
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color);

    /// Draw a circle outline
    fn draw_circle_lines(&mut self, center: Vec2, radius: f32, color: Color);

    /// Draw a text run with its top-left corner at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);
}

/// Sink for one-shot sound cues
pub trait AudioOut {
    fn play(&mut self, sound: SoundId);
}

/// Audio sink that discards every cue
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioOut for SilentAudio {
    fn play(&mut self, _sound: SoundId) {}
}
