//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::platform::Color;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Size of one vertex in a GPU buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for game elements
pub mod colors {
    use crate::platform::Color;

    pub const BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];
    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const GRAY: Color = [0.51, 0.51, 0.51, 1.0];
    pub const JUDGMENT_LINE: Color = WHITE;
    pub const BULLET_TINT: Color = WHITE;
}
