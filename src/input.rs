//! Pointer input buffering
//!
//! Browser pointer events arrive between frames; the controller records them
//! and hands the simulation a single [`TickInput`] per frame, so all state
//! mutation happens on the simulation step.

use glam::Vec2;

use crate::sim::{CursorUpdate, TickInput};

/// Collects pointer events until the frame loop drains them
#[derive(Debug, Clone, Default)]
pub struct InputController {
    clicks: Vec<Vec2>,
    cursor: CursorUpdate,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a click at surface-relative coordinates
    pub fn on_click(&mut self, pos: Vec2) {
        self.clicks.push(pos);
    }

    /// Record the pointer position; later moves in the same frame win
    pub fn on_pointer_move(&mut self, pos: Vec2) {
        self.cursor = CursorUpdate::MovedTo(pos);
    }

    /// Record the pointer leaving the surface
    pub fn on_pointer_leave(&mut self) {
        self.cursor = CursorUpdate::Left;
    }

    /// Drain everything recorded since the last frame
    pub fn take(&mut self) -> TickInput {
        TickInput {
            clicks: std::mem::take(&mut self.clicks),
            cursor: std::mem::take(&mut self.cursor),
        }
    }
}
