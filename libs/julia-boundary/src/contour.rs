//! # Border Following
//!
//! Suzuki–Abe topological border following with 8-connectivity.
//!
//! The binary mask is copied into a zero-padded label grid. A raster scan
//! starts a new border at every unlabelled outer-border pixel (`1` with a
//! `0` to the west) or hole-border pixel (`≥ 1` with a `0` to the east); the
//! border is then followed counterclockwise, labelling its pixels with the
//! border number `NBD` (negative when the east neighbour is background).
//! The last border met on the current row (`LNBD`) gives the parent of each
//! new border, which is how outermost components are told apart from
//! components nested in holes.

use crate::binary::BinaryImage;
use julia_types::Point2D;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which borders to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContourRetrieval {
    /// Outer borders of the outermost components only.
    #[default]
    External,
    /// Every outer and hole border.
    List,
}

/// How much of each border chain to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContourApproximation {
    /// Every border pixel.
    None,
    /// Only the points where the chain changes direction.
    #[default]
    Simple,
}

/// Kind of a traced border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderKind {
    Outer,
    Hole,
}

/// One traced border as an ordered polyline of `(x, y)` samples.
///
/// The polyline is closed implicitly: the last point is adjacent to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub kind: BorderKind,
    pub points: Vec<Point2D>,
}

/// Clockwise (row-down screen) neighbour offsets as `(row, col)`, starting east.
const DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

const EAST: usize = 0;

/// Border number of the frame surrounding the image.
const FRAME: i32 = 1;

#[derive(Debug, Clone, Copy)]
struct BorderInfo {
    kind: BorderKind,
    parent: i32,
}

/// Zero-padded label grid.
struct Labels {
    stride: usize,
    cells: Vec<i32>,
}

impl Labels {
    fn new(binary: &BinaryImage) -> Self {
        let stride = binary.width() + 2;
        let mut cells = vec![0; stride * (binary.height() + 2)];
        for y in 0..binary.height() {
            for x in 0..binary.width() {
                if binary.get(x, y) {
                    cells[(y + 1) * stride + x + 1] = 1;
                }
            }
        }
        Self { stride, cells }
    }

    #[inline]
    fn at(&self, (r, c): (usize, usize)) -> i32 {
        self.cells[r * self.stride + c]
    }

    #[inline]
    fn set(&mut self, (r, c): (usize, usize), value: i32) {
        self.cells[r * self.stride + c] = value;
    }
}

#[inline]
fn step((r, c): (usize, usize), direction: usize) -> (usize, usize) {
    let (dr, dc) = DIRECTIONS[direction];
    ((r as isize + dr) as usize, (c as isize + dc) as usize)
}

#[inline]
fn direction(from: (usize, usize), to: (usize, usize)) -> usize {
    let delta = (
        to.0 as isize - from.0 as isize,
        to.1 as isize - from.1 as isize,
    );
    DIRECTIONS
        .iter()
        .position(|&d| d == delta)
        .unwrap_or_else(|| unreachable!("{from:?} and {to:?} are not 8-neighbours"))
}

/// Traces the borders of `binary`'s foreground.
///
/// Contours are returned in raster order of their starting pixel.
///
/// ```rust
/// use julia_boundary::{find_contours, BinaryImage, BorderKind, ContourApproximation, ContourRetrieval};
///
/// // 3x3 ring: one outer border and one hole border.
/// let mask = vec![true, true, true, true, false, true, true, true, true];
/// let binary = BinaryImage::from_mask(3, 3, mask).unwrap();
///
/// let external = find_contours(&binary, ContourRetrieval::External, ContourApproximation::None);
/// assert_eq!(external.len(), 1);
/// assert_eq!(external[0].points.len(), 8);
///
/// let all = find_contours(&binary, ContourRetrieval::List, ContourApproximation::None);
/// assert_eq!(all.len(), 2);
/// assert_eq!(all[1].kind, BorderKind::Hole);
/// ```
pub fn find_contours(
    binary: &BinaryImage,
    retrieval: ContourRetrieval,
    approximation: ContourApproximation,
) -> Vec<Contour> {
    let mut labels = Labels::new(binary);
    // Index 0 is unused, index 1 is the frame.
    let mut borders = vec![
        BorderInfo {
            kind: BorderKind::Hole,
            parent: 0,
        };
        2
    ];
    let mut contours = Vec::new();
    let mut nbd = FRAME;

    for r in 1..=binary.height() {
        let mut lnbd = FRAME;
        for c in 1..=binary.width() {
            let here = (r, c);
            let value = labels.at(here);

            let start = if value == 1 && labels.at((r, c - 1)) == 0 {
                Some((BorderKind::Outer, (r, c - 1)))
            } else if value >= 1 && labels.at((r, c + 1)) == 0 {
                if value > 1 {
                    lnbd = value;
                }
                Some((BorderKind::Hole, (r, c + 1)))
            } else {
                None
            };

            if let Some((kind, from)) = start {
                nbd += 1;
                let previous = borders[lnbd as usize];
                let parent = match (kind, previous.kind) {
                    (BorderKind::Outer, BorderKind::Outer) => previous.parent,
                    (BorderKind::Outer, BorderKind::Hole) => lnbd,
                    (BorderKind::Hole, BorderKind::Outer) => lnbd,
                    (BorderKind::Hole, BorderKind::Hole) => previous.parent,
                };
                borders.push(BorderInfo { kind, parent });

                let chain = follow(&mut labels, here, from, nbd);
                let keep = match retrieval {
                    ContourRetrieval::External => kind == BorderKind::Outer && parent == FRAME,
                    ContourRetrieval::List => true,
                };
                if keep {
                    let chain = match approximation {
                        ContourApproximation::None => chain,
                        ContourApproximation::Simple => compress(chain),
                    };
                    contours.push(Contour {
                        kind,
                        points: chain
                            .into_iter()
                            .map(|(r, c)| Point2D::new((c - 1) as f64, (r - 1) as f64))
                            .collect(),
                    });
                }
            }

            let value = labels.at(here);
            if value != 0 && value != 1 {
                lnbd = value.abs();
            }
        }
    }

    debug!(
        borders = nbd - FRAME,
        kept = contours.len(),
        ?retrieval,
        "border following complete"
    );
    contours
}

/// Follows one border starting at `start`, entering from background pixel
/// `from`, and labels it with `nbd`. Returns the chain in padded coordinates.
fn follow(
    labels: &mut Labels,
    start: (usize, usize),
    from: (usize, usize),
    nbd: i32,
) -> Vec<(usize, usize)> {
    let d0 = direction(start, from);
    let first = (0..8)
        .map(|k| step(start, (d0 + k) % 8))
        .find(|&p| labels.at(p) != 0);
    let Some(first) = first else {
        // Isolated pixel
        labels.set(start, -nbd);
        return vec![start];
    };

    let mut chain = Vec::new();
    let mut previous = first;
    let mut current = start;
    loop {
        chain.push(current);

        let back = direction(current, previous);
        let mut east_is_background = false;
        let mut next = previous;
        for k in 1..=8 {
            let d = (back + 8 - k) % 8;
            let candidate = step(current, d);
            if labels.at(candidate) != 0 {
                next = candidate;
                break;
            }
            if d == EAST {
                east_is_background = true;
            }
        }

        if east_is_background {
            labels.set(current, -nbd);
        } else if labels.at(current) == 1 {
            labels.set(current, nbd);
        }

        if next == start && current == first {
            break;
        }
        previous = current;
        current = next;
    }
    chain
}

/// Drops chain points lying on a straight run, keeping direction changes.
fn compress(chain: Vec<(usize, usize)>) -> Vec<(usize, usize)> {
    let n = chain.len();
    if n < 3 {
        return chain;
    }
    let kept: Vec<(usize, usize)> = (0..n)
        .filter(|&k| {
            let before = chain[(k + n - 1) % n];
            let after = chain[(k + 1) % n];
            direction(before, chain[k]) != direction(chain[k], after)
        })
        .map(|k| chain[k])
        .collect();
    if kept.is_empty() {
        chain
    } else {
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(rows: &[&str]) -> BinaryImage {
        let width = rows[0].len();
        let cells = rows
            .iter()
            .flat_map(|row| row.chars().map(|ch| ch == '#'))
            .collect();
        BinaryImage::from_mask(width, rows.len(), cells).unwrap()
    }

    fn coords(contour: &Contour) -> Vec<(i64, i64)> {
        contour
            .points
            .iter()
            .map(|p| (p.x as i64, p.y as i64))
            .collect()
    }

    #[test]
    fn test_empty_mask() {
        let binary = mask(&["....", "...."]);
        assert!(find_contours(&binary, ContourRetrieval::List, ContourApproximation::None).is_empty());
    }

    #[test]
    fn test_single_pixel() {
        let binary = mask(&["...", ".#.", "..."]);
        let contours = find_contours(&binary, ContourRetrieval::External, ContourApproximation::Simple);
        assert_eq!(contours.len(), 1);
        assert_eq!(coords(&contours[0]), vec![(1, 1)]);
    }

    #[test]
    fn test_square_is_traced_counterclockwise() {
        let binary = mask(&["....", ".##.", ".##.", "...."]);
        let contours = find_contours(&binary, ContourRetrieval::External, ContourApproximation::None);
        assert_eq!(contours.len(), 1);
        assert_eq!(coords(&contours[0]), vec![(1, 1), (1, 2), (2, 2), (2, 1)]);
    }

    #[test]
    fn test_line_compresses_to_endpoints() {
        let binary = mask(&[".###."]);
        let full = find_contours(&binary, ContourRetrieval::External, ContourApproximation::None);
        assert_eq!(coords(&full[0]), vec![(1, 0), (2, 0), (3, 0), (2, 0)]);
        let simple = find_contours(&binary, ContourRetrieval::External, ContourApproximation::Simple);
        assert_eq!(coords(&simple[0]), vec![(1, 0), (3, 0)]);
    }

    #[test]
    fn test_rectangle_simple_keeps_corners() {
        let binary = mask(&["#####", "#####", "#####"]);
        let simple = find_contours(&binary, ContourRetrieval::External, ContourApproximation::Simple);
        assert_eq!(coords(&simple[0]), vec![(0, 0), (0, 2), (4, 2), (4, 0)]);
        let full = find_contours(&binary, ContourRetrieval::External, ContourApproximation::None);
        assert_eq!(full[0].points.len(), 12);
    }

    #[test]
    fn test_external_skips_components_inside_holes() {
        let binary = mask(&[
            "#######",
            "#.....#",
            "#..#..#",
            "#.....#",
            "#######",
        ]);
        let external = find_contours(&binary, ContourRetrieval::External, ContourApproximation::None);
        assert_eq!(external.len(), 1);
        assert_eq!(external[0].kind, BorderKind::Outer);
        assert_eq!(external[0].points.len(), 20);

        let all = find_contours(&binary, ContourRetrieval::List, ContourApproximation::None);
        assert_eq!(all.len(), 3);
        let kinds: Vec<_> = all.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![BorderKind::Outer, BorderKind::Hole, BorderKind::Outer]);
    }

    #[test]
    fn test_separate_components_are_all_external() {
        let binary = mask(&["##..##", "##..##", "......", "..##.."]);
        let external = find_contours(&binary, ContourRetrieval::External, ContourApproximation::Simple);
        assert_eq!(external.len(), 3);
    }

    #[test]
    fn test_diagonal_pixels_are_one_component() {
        let binary = mask(&["#..", ".#.", "..#"]);
        let external = find_contours(&binary, ContourRetrieval::External, ContourApproximation::Simple);
        assert_eq!(external.len(), 1);
        assert_eq!(coords(&external[0]), vec![(0, 0), (2, 2)]);
    }
}
