//! Pairwise proximity scan
//!
//! Walks every unordered node pair in pool order, producing a faded edge for
//! each pair closer than [`MAX_DISTANCE`] and nudging both endpoints away
//! from the cursor once the population ceiling is active.

use glam::Vec2;

use super::state::NodePool;
use crate::consts::*;

/// A line segment to stroke between two nodes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub a: Vec2,
    pub b: Vec2,
    /// White stroke alpha in `[MIN_EDGE_OPACITY, 1.0]`
    pub opacity: f32,
}

/// Scan all pairs `(i, j)` with `i < j` in pool order.
///
/// Opacity fades linearly with distance down to the 10% floor at the
/// threshold. When `at_capacity` is set and a cursor position is known, any
/// pair whose midpoint lies within [`REPEL_EFFECT_RADIUS`] of the cursor has
/// both endpoints displaced by [`NODE_SPEED`] along the cursor-to-midpoint
/// angle - a direct position nudge, applied to both nodes alike.
///
/// Displacement mutates positions mid-scan, so later pairs see earlier
/// nudges. That cumulative, order-dependent behavior is intentional; edges
/// are emitted at the displaced endpoint positions.
pub fn connect_pairs(pool: &mut NodePool, cursor: Option<Vec2>, at_capacity: bool) -> Vec<Edge> {
    let mut edges = Vec::new();
    let count = pool.len();

    for i in 0..count {
        for j in (i + 1)..count {
            let a = pool.node(i).pos;
            let b = pool.node(j).pos;
            let distance = a.distance(b);
            if distance >= MAX_DISTANCE {
                continue;
            }

            let opacity = (1.0 - distance / MAX_DISTANCE).max(MIN_EDGE_OPACITY);

            if at_capacity {
                if let Some(cursor) = cursor {
                    let delta = (a + b) / 2.0 - cursor;
                    if delta.length() < REPEL_EFFECT_RADIUS {
                        let angle = delta.y.atan2(delta.x);
                        let push = Vec2::new(angle.cos(), angle.sin()) * NODE_SPEED;
                        pool.node_mut(i).pos += push;
                        pool.node_mut(j).pos += push;
                    }
                }
            }

            edges.push(Edge {
                a: pool.node(i).pos,
                b: pool.node(j).pos,
                opacity,
            });
        }
    }

    edges
}
