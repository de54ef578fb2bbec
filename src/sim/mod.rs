//! Deterministic simulation module
//!
//! All particle logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (pool insertion order)
//! - No rendering or platform dependencies

pub mod proximity;
pub mod state;
pub mod tick;

pub use proximity::{Edge, connect_pairs};
pub use state::{Node, NodePool, SimState};
pub use tick::{CursorUpdate, Frame, TickInput, tick};
