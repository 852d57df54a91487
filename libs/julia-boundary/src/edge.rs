//! # Edge Detection
//!
//! Hysteresis edge detector over a binarised field:
//!
//! 1. 3×3 Sobel gradients with replicated borders
//! 2. L1 gradient magnitude `|gx| + |gy|`
//! 3. Non-maximum suppression along the gradient direction, quantised to
//!    horizontal, vertical and the two diagonals
//! 4. Hysteresis: samples above `high` seed edges, samples above `low` are
//!    kept when 8-connected to a seed

use crate::binary::BinaryImage;
use config::constants::{DEFAULT_EDGE_HIGH, DEFAULT_EDGE_LOW};
use julia_types::Point2D;
use tracing::debug;

/// `tan(22.5°)`
const TAN_22_5: f64 = 0.414_213_562_373_095_1;
/// `tan(67.5°)`
const TAN_67_5: f64 = 2.414_213_562_373_095;

/// Hysteresis thresholds on the L1 gradient magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeThresholds {
    pub low: f64,
    pub high: f64,
}

impl Default for EdgeThresholds {
    fn default() -> Self {
        Self {
            low: DEFAULT_EDGE_LOW,
            high: DEFAULT_EDGE_HIGH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    None,
    Weak,
    Strong,
}

/// Returns every edge sample of `binary` as `(x, y)` in row-major scan order.
pub fn detect_edges(binary: &BinaryImage, thresholds: EdgeThresholds) -> Vec<Point2D> {
    let (width, height) = (binary.width(), binary.height());
    if binary.is_empty() {
        return Vec::new();
    }
    let (low, high) = if thresholds.low > thresholds.high {
        (thresholds.high, thresholds.low)
    } else {
        (thresholds.low, thresholds.high)
    };

    let mut gx = vec![0.0; width * height];
    let mut gy = vec![0.0; width * height];
    let mut magnitude = vec![0.0; width * height];
    for y in 0..height {
        for x in 0..width {
            let (sx, sy) = sobel(binary, x as isize, y as isize);
            let i = y * width + x;
            gx[i] = sx;
            gy[i] = sy;
            magnitude[i] = sx.abs() + sy.abs();
        }
    }

    let mag_at = |x: isize, y: isize| -> f64 {
        if x < 0 || y < 0 || x >= width as isize || y >= height as isize {
            0.0
        } else {
            magnitude[y as usize * width + x as usize]
        }
    };

    let mut class = vec![Class::None; width * height];
    let mut stack = Vec::new();
    for y in 0..height {
        for x in 0..width {
            let i = y * width + x;
            let m = magnitude[i];
            if m <= low {
                continue;
            }
            let (ax, ay) = (gx[i].abs(), gy[i].abs());
            let (xi, yi) = (x as isize, y as isize);
            let (prev, next) = if ay < ax * TAN_22_5 {
                (mag_at(xi - 1, yi), mag_at(xi + 1, yi))
            } else if ay > ax * TAN_67_5 {
                (mag_at(xi, yi - 1), mag_at(xi, yi + 1))
            } else if (gx[i] < 0.0) == (gy[i] < 0.0) {
                (mag_at(xi - 1, yi - 1), mag_at(xi + 1, yi + 1))
            } else {
                (mag_at(xi + 1, yi - 1), mag_at(xi - 1, yi + 1))
            };
            // Strict on one side so plateaus keep exactly one sample
            if m > prev && m >= next {
                if m > high {
                    class[i] = Class::Strong;
                    stack.push((x, y));
                } else {
                    class[i] = Class::Weak;
                }
            }
        }
    }

    let seeds = stack.len();
    while let Some((x, y)) = stack.pop() {
        for (dx, dy) in NEIGHBOURS_8 {
            let (nx, ny) = (x as isize + dx, y as isize + dy);
            if nx < 0 || ny < 0 || nx >= width as isize || ny >= height as isize {
                continue;
            }
            let j = ny as usize * width + nx as usize;
            if class[j] == Class::Weak {
                class[j] = Class::Strong;
                stack.push((nx as usize, ny as usize));
            }
        }
    }

    let edges: Vec<Point2D> = class
        .iter()
        .enumerate()
        .filter(|(_, &c)| c == Class::Strong)
        .map(|(i, _)| Point2D::new((i % width) as f64, (i / width) as f64))
        .collect();
    debug!(seeds, edges = edges.len(), low, high, "hysteresis complete");
    edges
}

const NEIGHBOURS_8: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// 3×3 Sobel response at `(x, y)` with replicated borders.
fn sobel(binary: &BinaryImage, x: isize, y: isize) -> (f64, f64) {
    let p = |dx: isize, dy: isize| binary.level(x + dx, y + dy);
    let gx = (p(1, -1) + 2.0 * p(1, 0) + p(1, 1)) - (p(-1, -1) + 2.0 * p(-1, 0) + p(-1, 1));
    let gy = (p(-1, 1) + 2.0 * p(0, 1) + p(1, 1)) - (p(-1, -1) + 2.0 * p(0, -1) + p(1, -1));
    (gx, gy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn half_plane(width: usize, height: usize, split: usize) -> BinaryImage {
        let mask = (0..width * height).map(|i| i % width < split).collect();
        BinaryImage::from_mask(width, height, mask).unwrap()
    }

    #[test]
    fn test_uniform_image_has_no_edges() {
        let all = BinaryImage::from_mask(5, 5, vec![true; 25]).unwrap();
        assert!(detect_edges(&all, EdgeThresholds::default()).is_empty());
        let none = BinaryImage::from_mask(5, 5, vec![false; 25]).unwrap();
        assert!(detect_edges(&none, EdgeThresholds::default()).is_empty());
    }

    #[test]
    fn test_vertical_step_gives_single_column() {
        let binary = half_plane(8, 6, 4);
        let edges = detect_edges(&binary, EdgeThresholds::default());
        assert_eq!(edges.len(), 6);
        let column = edges[0].x;
        assert!(column == 3.0 || column == 4.0);
        assert!(edges.iter().all(|p| p.x == column));
    }

    #[test]
    fn test_swapped_thresholds_are_normalised() {
        let binary = half_plane(8, 6, 4);
        let a = detect_edges(&binary, EdgeThresholds { low: 100.0, high: 200.0 });
        let b = detect_edges(&binary, EdgeThresholds { low: 200.0, high: 100.0 });
        assert_eq!(a, b);
    }

    #[test]
    fn test_threshold_above_response_suppresses_everything() {
        // A full binary step gives |gx| = 4 * 255 = 1020
        let binary = half_plane(8, 6, 4);
        let edges = detect_edges(&binary, EdgeThresholds { low: 1020.0, high: 2000.0 });
        assert!(edges.is_empty());
    }
}
