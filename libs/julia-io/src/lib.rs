//! # Julia IO
//!
//! File adapters at the edges of the pipeline.
//!
//! | Function | Format |
//! |----------|--------|
//! | [`write_stl`] | STL, binary or ASCII, one facet per triangle |
//! | [`write_ply`] | ASCII PLY, vertices only |
//! | [`read_ply_points`] | PLY vertex positions (ASCII or binary) |
//! | [`save_field_png`] / [`load_field_image`] | 8-bit grayscale image |
//!
//! All functions take a path and report failures as [`IoError`]; a missing
//! input file is [`IoError::FileNotFound`].

pub mod bitmap;
pub mod error;
pub mod ply;
pub mod stl;

pub use bitmap::{load_field_image, save_field_png};
pub use error::{IoError, IoResult};
pub use ply::{read_ply_points, write_ply, write_ply_ascii};
pub use stl::{write_stl, write_stl_ascii, write_stl_binary, StlFormat};
