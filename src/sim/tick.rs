//! Per-frame simulation step
//!
//! One call to [`tick`] runs a complete frame: apply buffered pointer input,
//! integrate every node (spawning children on border contact), run the
//! proximity scan, and recompute the population ceiling flag. Rendering
//! happens elsewhere, from the returned [`Frame`].

use glam::Vec2;

use super::proximity::{self, Edge};
use super::state::{Node, SimState};
use crate::consts::MAX_NODE_COUNT;

/// Cursor change observed since the previous frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum CursorUpdate {
    /// No pointer event this frame
    #[default]
    Unchanged,
    /// Pointer moved to a surface position
    MovedTo(Vec2),
    /// Pointer left the surface
    Left,
}

/// Pointer input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Click positions since the last frame, in event order
    pub clicks: Vec<Vec2>,
    pub cursor: CursorUpdate,
}

/// Display data for one frame
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Node circle centers, captured before cursor repulsion displaces them
    pub nodes: Vec<Vec2>,
    /// Proximity edges at their displaced endpoint positions
    pub edges: Vec<Edge>,
}

/// Advance the simulation by one frame
pub fn tick(state: &mut SimState, input: &TickInput) -> Frame {
    for &pos in &input.clicks {
        state.spawn_at(pos);
    }
    match input.cursor {
        CursorUpdate::Unchanged => {}
        CursorUpdate::MovedTo(pos) => state.cursor = Some(pos),
        CursorUpdate::Left => state.cursor = None,
    }

    state.time_ticks += 1;

    // Update only the nodes alive at frame start; children spawned below are
    // drawn and scanned this frame but not themselves updated until the next
    let count = state.pool.len();
    for i in 0..count {
        let (width, height) = (state.width, state.height);
        let spawn = state.pool.node_mut(i).update(width, height);
        if let Some(pos) = spawn {
            // Capacity check precedes child construction, so a rejected add
            // leaves the parent spawn-eligible
            if !state.pool.is_full() {
                let child = Node::new(pos, &mut state.rng);
                state.pool.add(child);
                state.pool.node_mut(i).can_spawn = false;
            }
        }
    }

    let nodes: Vec<Vec2> = state.pool.iter().map(|n| n.pos).collect();

    // Repulsion is gated on the ceiling flag computed at the end of the
    // previous frame
    let edges = proximity::connect_pairs(&mut state.pool, state.cursor, state.at_capacity);

    let at_capacity = state.pool.len() >= MAX_NODE_COUNT;
    if at_capacity && !state.at_capacity {
        log::info!(
            "population ceiling reached ({} nodes), cursor repulsion active",
            state.pool.len()
        );
    }
    state.at_capacity = at_capacity;

    Frame { nodes, edges }
}
