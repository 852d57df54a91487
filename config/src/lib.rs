//! # Config Crate
//!
//! Centralized configuration constants for the Julia field-to-mesh pipeline.
//! All magic numbers and tunable parameters are defined here so the field,
//! boundary, perimeter, mesh and export crates agree on their defaults.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_THRESHOLD, DEFAULT_NEIGHBOR_THRESHOLD};
//!
//! // Pixels at or below the cutoff are foreground.
//! let intensity: u8 = 100;
//! assert!(intensity <= DEFAULT_THRESHOLD);
//!
//! // Clearance filter keeps points with fewer neighbours than this.
//! assert_eq!(DEFAULT_NEIGHBOR_THRESHOLD, 8);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Legacy Compatible**: Defaults match the legacy Julia scripts

pub mod constants;
