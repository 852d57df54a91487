//! # Julia Mesh
//!
//! Builds triangle meshes and layered clouds from Julia fields and
//! boundary point sets.
//!
//! ## Architecture
//!
//! ```text
//! ScalarField ──┬─ grid_extrusion() ─→ Mesh      (height map)
//!               └─ revolution()     ─→ Mesh      (tube around Z)
//! PointCloud  ───── fan_triangulate() → FanMesh  (legacy boundary faceting)
//! FieldParameters ─ stack_layers()  ─→ PointCloud<Point3D> (no faces)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use julia_mesh::grid_extrusion;
//! use julia_types::ScalarField;
//!
//! let field = ScalarField::filled(8, 8, 128);
//! let mesh = grid_extrusion(&field, 10.0).unwrap();
//! assert_eq!(mesh.triangle_count(), 2 * 7 * 7);
//! ```

pub mod error;
pub mod mesh;
pub mod ops;

pub use error::{MeshError, MeshResult};
pub use mesh::{Mesh, MeshQuality};
pub use ops::{
    fan_triangulate, grid_extrusion, revolution, stack_layers, FanMesh, LayerStackParams,
    RevolutionParams,
};
