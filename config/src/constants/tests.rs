//! Tests for the centralized configuration constants.

use super::*;

#[test]
fn revolution_defaults_form_a_tube() {
    assert!(DEFAULT_REVOLUTION_STEPS >= MIN_REVOLUTION_STEPS);
    assert_eq!(MIN_REVOLUTION_STEPS, 3);
}

#[test]
fn legacy_thresholds() {
    assert_eq!(DEFAULT_THRESHOLD, 127);
    assert!(DEFAULT_EDGE_LOW < DEFAULT_EDGE_HIGH);
    assert_eq!(DEFAULT_NEIGHBOR_THRESHOLD, 8);
}

#[test]
fn escape_radii_are_positive() {
    // Symmetric mapping escapes at |z| = 2, the asymmetric one at |z| = 4
    assert!(SYMMETRIC_ESCAPE_RADIUS > 0.0);
    assert!(ASYMMETRIC_ESCAPE_RADIUS > SYMMETRIC_ESCAPE_RADIUS);
}

#[test]
fn stack_increment_moves_c_down() {
    let (re, im) = DEFAULT_STACK_C_INCREMENT;
    assert_eq!(re, 0.0);
    assert!(im < 0.0);
    assert!(DEFAULT_STACK_LAYERS > 1);
}

#[test]
fn vertex_limit_matches_index_width() {
    assert_eq!(MAX_VERTICES, u32::MAX as usize);
}
