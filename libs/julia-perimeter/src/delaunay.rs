//! # Delaunay Triangulation
//!
//! Incremental Bowyer–Watson triangulation seeded with a super-triangle.
//!
//! ## Algorithm
//!
//! 1. Sort points lexicographically, drop exact duplicates and non-finite
//!    coordinates.
//! 2. Start from one counterclockwise super-triangle enclosing every point.
//! 3. For each point, walk across neighbouring triangles from the last one
//!    created to the triangle containing it, grow the cavity breadth-first
//!    through neighbours whose circumcircle strictly contains the point, and
//!    fan the cavity boundary to the point.
//! 4. Drop triangles touching a super-triangle vertex.
//!
//! Lexicographic insertion keeps walks short, so the expected cost per
//! point is proportional to the cavity size rather than the mesh size.
//!
//! Orientation and in-circle tests use the adaptive exact predicates from
//! `robust`, so cocircular and near-collinear inputs are handled without
//! epsilon tuning.

use julia_types::Point2D;
use robust::{incircle, orient2d, Coord};
use std::cmp::Ordering;
use std::collections::{HashMap, VecDeque};
use tracing::{debug, warn};

/// Super-triangle vertices sit this many bounding-box spans away.
const SUPER_TRIANGLE_SCALE: f64 = 1.0e4;

/// Lexicographic `(x, y)` order over finite points.
#[inline]
pub fn lexicographic(a: &Point2D, b: &Point2D) -> Ordering {
    a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
}

#[inline]
fn orientation(a: Point2D, b: Point2D, c: Point2D) -> f64 {
    orient2d(
        Coord { x: a.x, y: a.y },
        Coord { x: b.x, y: b.y },
        Coord { x: c.x, y: c.y },
    )
}

/// True when `d` lies strictly inside the circumcircle of counterclockwise `abc`.
#[inline]
fn in_circumcircle(a: Point2D, b: Point2D, c: Point2D, d: Point2D) -> bool {
    incircle(
        Coord { x: a.x, y: a.y },
        Coord { x: b.x, y: b.y },
        Coord { x: c.x, y: c.y },
        Coord { x: d.x, y: d.y },
    ) > 0.0
}

/// Triangulates `points`, returning counterclockwise index triples into `points`.
///
/// Duplicated points appear in the output through their first occurrence
/// only. Fewer than three distinct points, or a fully collinear input,
/// produce no triangles.
///
/// ```rust
/// use julia_perimeter::triangulate;
/// use julia_types::Point2D;
///
/// let square = [
///     Point2D::new(0.0, 0.0),
///     Point2D::new(1.0, 0.0),
///     Point2D::new(1.0, 1.0),
///     Point2D::new(0.0, 1.0),
/// ];
/// assert_eq!(triangulate(&square).len(), 2);
/// ```
pub fn triangulate(points: &[Point2D]) -> Vec<[usize; 3]> {
    let order = insertion_order(points);
    if order.len() < 3 {
        return Vec::new();
    }
    if is_collinear(points, &order) {
        warn!(points = order.len(), "collinear input, no triangles produced");
        return Vec::new();
    }

    let base = points.len();
    let mut vertices = points.to_vec();
    vertices.extend(super_triangle(points, &order));

    let mut mesh = Triangulation::new(&vertices, base);
    for &index in &order {
        mesh.insert(index);
    }
    let triangles = mesh.into_triangles(base);

    debug!(
        points = points.len(),
        distinct = order.len(),
        triangles = triangles.len(),
        "delaunay triangulation complete"
    );
    triangles
}

/// Indices of distinct finite points in lexicographic order.
fn insertion_order(points: &[Point2D]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..points.len())
        .filter(|&i| points[i].is_finite())
        .collect();
    order.sort_by(|&a, &b| lexicographic(&points[a], &points[b]).then(a.cmp(&b)));
    order.dedup_by(|a, b| points[*a] == points[*b]);
    order
}

fn is_collinear(points: &[Point2D], order: &[usize]) -> bool {
    let (a, b) = (points[order[0]], points[order[1]]);
    order[2..]
        .iter()
        .all(|&i| orientation(a, b, points[i]) == 0.0)
}

/// Counterclockwise triangle enclosing the bounding box of `order`.
fn super_triangle(points: &[Point2D], order: &[usize]) -> [Point2D; 3] {
    let mut min = Point2D::splat(f64::INFINITY);
    let mut max = Point2D::splat(f64::NEG_INFINITY);
    for &i in order {
        min = min.min(points[i]);
        max = max.max(points[i]);
    }
    let centre = (min + max) * 0.5;
    let span = (max - min).max_element().max(1.0) * SUPER_TRIANGLE_SCALE;
    [
        centre + Point2D::new(-2.0 * span, -span),
        centre + Point2D::new(2.0 * span, -span),
        centre + Point2D::new(0.0, 2.0 * span),
    ]
}

/// Triangle of the working mesh, counterclockwise. `adjacent[k]` is the
/// neighbour across the edge `vertices[k] → vertices[(k + 1) % 3]`.
#[derive(Debug, Clone, Copy)]
struct Triangle {
    vertices: [usize; 3],
    adjacent: [Option<usize>; 3],
    alive: bool,
}

/// Cavity boundary edge, directed as in the removed triangle.
#[derive(Debug, Clone, Copy)]
struct CavityEdge {
    start: usize,
    end: usize,
    outer: Option<usize>,
    removed: usize,
}

/// Incremental triangulation with neighbour links. Removed triangles stay
/// in the arena with `alive` cleared.
struct Triangulation<'a> {
    vertices: &'a [Point2D],
    triangles: Vec<Triangle>,
    last: usize,
}

impl<'a> Triangulation<'a> {
    fn new(vertices: &'a [Point2D], base: usize) -> Self {
        Self {
            vertices,
            triangles: vec![Triangle {
                vertices: [base, base + 1, base + 2],
                adjacent: [None; 3],
                alive: true,
            }],
            last: 0,
        }
    }

    /// Directed edge `k` of triangle `t` as points.
    #[inline]
    fn edge(&self, t: usize, k: usize) -> (Point2D, Point2D) {
        let v = self.triangles[t].vertices;
        (self.vertices[v[k]], self.vertices[v[(k + 1) % 3]])
    }

    fn circumcircle_contains(&self, t: usize, point: Point2D) -> bool {
        let [a, b, c] = self.triangles[t].vertices.map(|v| self.vertices[v]);
        in_circumcircle(a, b, c, point)
    }

    /// Visibility walk from the last created triangle to one containing
    /// `point` (boundary included).
    fn locate(&self, point: Point2D) -> Option<usize> {
        let mut current = self.last;
        for _ in 0..self.triangles.len() {
            let exit = (0..3).find(|&k| {
                let (a, b) = self.edge(current, k);
                orientation(a, b, point) < 0.0
            });
            match exit {
                None => return Some(current),
                Some(k) => current = self.triangles[current].adjacent[k]?,
            }
        }
        None
    }

    fn locate_by_scan(&self, point: Point2D) -> Option<usize> {
        (0..self.triangles.len()).find(|&t| {
            self.triangles[t].alive
                && (0..3).all(|k| {
                    let (a, b) = self.edge(t, k);
                    orientation(a, b, point) >= 0.0
                })
        })
    }

    /// Inserts `vertices[index]`, re-triangulating its cavity.
    fn insert(&mut self, index: usize) {
        let point = self.vertices[index];
        let Some(start) = self.locate(point).or_else(|| {
            debug!(index, "walk did not terminate, scanning for the containing triangle");
            self.locate_by_scan(point)
        }) else {
            warn!(index, "point outside the super-triangle, skipped");
            return;
        };

        let mut boundary: Vec<CavityEdge> = Vec::new();
        let mut queue = VecDeque::from([start]);
        self.triangles[start].alive = false;
        while let Some(current) = queue.pop_front() {
            let triangle = self.triangles[current];
            for k in 0..3 {
                let outer = triangle.adjacent[k];
                match outer {
                    // Shared with another cavity triangle
                    Some(n) if !self.triangles[n].alive => {}
                    Some(n) if self.circumcircle_contains(n, point) => {
                        self.triangles[n].alive = false;
                        queue.push_back(n);
                    }
                    _ => boundary.push(CavityEdge {
                        start: triangle.vertices[k],
                        end: triangle.vertices[(k + 1) % 3],
                        outer,
                        removed: current,
                    }),
                }
            }
        }

        let first = self.triangles.len();
        for edge in &boundary {
            let id = self.triangles.len();
            self.triangles.push(Triangle {
                vertices: [edge.start, edge.end, index],
                adjacent: [edge.outer, None, None],
                alive: true,
            });
            if let Some(outer) = edge.outer {
                if let Some(slot) = self.triangles[outer]
                    .adjacent
                    .iter_mut()
                    .find(|slot| **slot == Some(edge.removed))
                {
                    *slot = Some(id);
                }
            }
        }

        // Fan triangles meet along the spokes to `index`
        let by_start: HashMap<usize, usize> = (first..self.triangles.len())
            .map(|id| (self.triangles[id].vertices[0], id))
            .collect();
        for id in first..self.triangles.len() {
            let end = self.triangles[id].vertices[1];
            if let Some(&next) = by_start.get(&end) {
                self.triangles[id].adjacent[1] = Some(next);
                self.triangles[next].adjacent[2] = Some(id);
            }
        }
        self.last = first;
    }

    /// Live triangles that avoid the super-triangle vertices.
    fn into_triangles(self, base: usize) -> Vec<[usize; 3]> {
        self.triangles
            .into_iter()
            .filter(|t| t.alive && t.vertices.iter().all(|&v| v < base))
            .map(|t| t.vertices)
            .collect()
    }
}
