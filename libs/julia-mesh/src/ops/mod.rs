//! # Mesh Builders
//!
//! Constructions from fields and point clouds.

pub mod fan;
pub mod grid;
pub mod revolve;
pub mod stack;

pub use fan::{fan_triangulate, FanMesh};
pub use grid::grid_extrusion;
pub use revolve::{revolution, RevolutionParams};
pub use stack::{stack_layers, LayerStackParams};
