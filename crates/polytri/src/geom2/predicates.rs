//! Sign predicates over points, segments and triangles.
//!
//! All predicates use only products and differences of coordinates, so their
//! signs are exact whenever the inputs are small integers (or other values whose
//! products round without error). No epsilons.
//!
//! Boundary policy
//! - `segments_intersect` counts touching and collinear overlap as intersecting.
//! - `point_on_segment` counts endpoints as on the segment.
//! - `point_in_triangle` counts boundary points as outside.

use super::types::{Point, Polygon};

/// Twice the signed area of triangle `(a, b, c)`.
/// Positive for a counterclockwise turn, negative for clockwise, zero if collinear.
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
}

#[inline]
fn boxes_disjoint(a: Point, b: Point, c: Point, d: Point) -> bool {
    a.x.max(b.x) < c.x.min(d.x)
        || c.x.max(d.x) < a.x.min(b.x)
        || a.y.max(b.y) < c.y.min(d.y)
        || c.y.max(d.y) < a.y.min(b.y)
}

/// Closed segments `[a, b]` and `[c, d]` share at least one point.
///
/// Bounding boxes reject first; the orientation products use `<= 0`, so shared
/// endpoints and collinear overlaps are reported as intersections.
#[inline]
pub fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    if boxes_disjoint(a, b, c, d) {
        return false;
    }
    orientation(a, c, b) * orientation(a, d, b) <= 0.0
        && orientation(c, a, d) * orientation(c, b, d) <= 0.0
}

/// `p` lies on the closed segment `[a, b]`.
#[inline]
pub fn point_on_segment(a: Point, b: Point, p: Point) -> bool {
    if p.x > a.x.max(b.x) || p.x < a.x.min(b.x) || p.y > a.y.max(b.y) || p.y < a.y.min(b.y) {
        return false;
    }
    orientation(a, p, b) == 0.0
}

/// `p` lies strictly inside triangle `(a, b, c)`, for either vertex order.
#[inline]
pub fn point_in_triangle(a: Point, b: Point, c: Point, p: Point) -> bool {
    let x = orientation(p, a, b);
    let y = orientation(p, b, c);
    let z = orientation(p, c, a);
    x * y > 0.0 && y * z > 0.0 && z * x > 0.0
}

/// Even-odd ray crossing test (horizontal ray towards +x).
///
/// Undetermined for points exactly on the boundary; the validity engine never
/// lets a vertex of one polygon touch another polygon, so nesting queries do not
/// hit that case.
pub fn point_in_polygon(polygon: &Polygon, q: Point) -> bool {
    let mut inside = false;
    for (pj, pi) in polygon.edges() {
        if (pi.y > q.y) != (pj.y > q.y) {
            let x_cross = pi.x + (pj.x - pi.x) * (q.y - pi.y) / (pj.y - pi.y);
            if q.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

/// Nesting depth of each polygon: how many other polygons contain its first vertex.
///
/// Even depth is solid, odd depth is a hole.
pub fn nesting_depths(polygons: &[Polygon]) -> Vec<usize> {
    polygons
        .iter()
        .enumerate()
        .map(|(j, inner)| {
            polygons
                .iter()
                .enumerate()
                .filter(|&(i, outer)| i != j && point_in_polygon(outer, inner.first()))
                .count()
        })
        .collect()
}

/// Number of polygons at odd nesting depth.
pub fn hole_count(polygons: &[Polygon]) -> usize {
    nesting_depths(polygons)
        .into_iter()
        .filter(|d| d % 2 == 1)
        .count()
}
