//! Frame painting
//!
//! The simulation hands the renderer a [`Frame`](crate::sim::Frame); any
//! backend implementing [`Painter`] can draw it. The browser backend lives in
//! [`canvas`].

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use glam::Vec2;

use crate::consts::*;
use crate::sim::Frame;

/// White with the given alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn white(a: f32) -> Self {
        Self {
            r: 255,
            g: 255,
            b: 255,
            a,
        }
    }

    /// CSS `rgba()` string for canvas fill/stroke styles
    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Minimal drawing surface: everything this visual needs from a 2D context
pub trait Painter {
    /// Clear the whole surface
    fn clear(&mut self, width: f32, height: f32);
    /// Fill a circle
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    /// Stroke a straight line segment
    fn stroke_line(&mut self, a: Vec2, b: Vec2, color: Rgba, line_width: f32);
}

/// Paint one frame: clear, then node circles, then proximity edges
pub fn draw_frame(painter: &mut impl Painter, frame: &Frame, width: f32, height: f32) {
    painter.clear(width, height);

    for &pos in &frame.nodes {
        painter.fill_circle(pos, NODE_RADIUS, Rgba::white(NODE_FILL_ALPHA));
    }

    for edge in &frame.edges {
        painter.stroke_line(
            edge.a,
            edge.b,
            Rgba::white(edge.opacity),
            EDGE_LINE_WIDTH,
        );
    }
}
