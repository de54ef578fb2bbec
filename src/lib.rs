//! Node Mesh - an animated particle network visual
//!
//! Core modules:
//! - `sim`: Deterministic simulation (node motion, spawning, proximity edges)
//! - `render`: Painter abstraction and Canvas 2D backend
//! - `input`: Pointer event buffering for the simulation loop
//! - `settings`: User preferences

pub mod input;
pub mod render;
pub mod settings;
pub mod sim;

pub use input::InputController;
pub use settings::Settings;

/// Visual configuration constants
pub mod consts {
    /// Radius of each node circle (pixels)
    pub const NODE_RADIUS: f32 = 3.0;
    /// Nodes closer than this are connected by an edge (pixels)
    pub const MAX_DISTANCE: f32 = 150.0;
    /// Base speed constant - velocity init range, speed cap, and repel nudge
    pub const NODE_SPEED: f32 = 0.5;
    /// Nodes placed at startup
    pub const INITIAL_NODE_COUNT: usize = 130;
    /// Hard population ceiling - adds beyond this are silent no-ops
    pub const MAX_NODE_COUNT: usize = 390;
    /// Cursor repulsion acts on edge midpoints within this radius (pixels)
    pub const REPEL_EFFECT_RADIUS: f32 = 50.0;
    /// Velocity impulse applied per breached border axis
    pub const REPEL_FORCE: f32 = 1.5;
    /// Border margin that triggers child creation on the opposite edge (pixels)
    pub const CHILD_SPAWN_MARGIN: f32 = 10.0;

    /// Stroke width for proximity edges
    pub const EDGE_LINE_WIDTH: f32 = 0.5;
    /// Alpha of the node fill color
    pub const NODE_FILL_ALPHA: f32 = 0.7;
    /// Edge opacity never fades below this floor
    pub const MIN_EDGE_OPACITY: f32 = 0.1;
}
