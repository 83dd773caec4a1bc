//! Backend-neutral frame building
//!
//! `Frame` implements [`Canvas`] by turning draw calls into data a GPU
//! backend can upload as-is: a colored triangle list, textured sprite
//! instances and text runs for the glyph renderer.

pub mod shapes;
pub mod vertex;

use glam::Vec2;

pub use vertex::{Vertex, colors};

use crate::platform::{Canvas, Color, TextureId};

/// Width of outline primitives in pixels
const LINE_WIDTH: f32 = 1.0;

/// A textured quad
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub texture: TextureId,
    pub center: Vec2,
    pub size: Vec2,
    pub tint: Color,
}

/// A text draw call
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub pos: Vec2,
    pub size: f32,
    pub color: Color,
}

/// Draw data for one frame
#[derive(Debug, Clone, Default)]
pub struct Frame {
    clear_color: Option<Color>,
    vertices: Vec<Vertex>,
    sprites: Vec<Sprite>,
    texts: Vec<TextRun>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop last frame's data, keeping allocations
    pub fn begin(&mut self) {
        self.clear_color = None;
        self.vertices.clear();
        self.sprites.clear();
        self.texts.clear();
    }

    pub fn clear_color(&self) -> Option<Color> {
        self.clear_color
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertex data ready for a GPU buffer write
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn texts(&self) -> &[TextRun] {
        &self.texts
    }
}

impl Canvas for Frame {
    fn clear(&mut self, color: Color) {
        // Clearing discards anything drawn before it
        self.begin();
        self.clear_color = Some(color);
    }

    fn draw_texture(&mut self, texture: TextureId, center: Vec2, size: Vec2, tint: Color) {
        self.sprites.push(Sprite {
            texture,
            center,
            size,
            tint,
        });
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.vertices
            .extend(shapes::line(from, to, LINE_WIDTH, color));
    }

    fn draw_circle_lines(&mut self, center: Vec2, radius: f32, color: Color) {
        let half = LINE_WIDTH / 2.0;
        self.vertices.extend(shapes::ring(
            center,
            (radius - half).max(0.0),
            radius + half,
            color,
            shapes::segments_for_radius(radius),
        ));
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        self.texts.push(TextRun {
            text: text.to_string(),
            pos,
            size,
            color,
        });
    }
}
