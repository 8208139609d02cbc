//! Layout module orchestrator following the RSB module specification.
//!
//! Downstream crates import placement types from here while the collision
//! search lives in the private `core` module.

mod core;
pub mod grid;
mod shared;

pub use core::{LayoutEngine, PlacementConfig};
pub use grid::{GridLayout, ring_positions};
pub use shared::SharedLayoutEngine;
