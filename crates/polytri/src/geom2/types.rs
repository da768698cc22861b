//! Value types for planar polygon arrangements.
//!
//! - `Point`: named `(x, y)` coordinates, compared exactly.
//! - `Polygon`: implicitly closed vertex cycle with at least three finite vertices.
//! - `Triangle`: three points in the order the triangulation engine produced them.
//!
//! Code cross-refs: `predicates::{orientation, point_in_triangle}`, `arrangement::PolygonValidityEngine`

use nalgebra::Vector2;
use thiserror::Error;

use super::predicates::{orientation, point_in_triangle};

/// Smallest vertex count of a closed polygon.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// A point in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Reasons a vertex list cannot form a polygon.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PolygonError {
    #[error("polygon needs at least {MIN_POLYGON_VERTICES} vertices, got {0}")]
    TooFewVertices(usize),
    #[error("vertex {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}

/// Closed polygon in cyclic vertex order (last vertex connects back to the first).
///
/// Invariants:
/// - At least `MIN_POLYGON_VERTICES` vertices.
/// - All coordinates finite (NaN is reserved as the wire sentinel).
///
/// Simplicity is not checked here; `PolygonValidityEngine` enforces it while the
/// polygon is drawn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Point>", into = "Vec<Point>"))]
pub struct Polygon {
    vertices: Vec<Point>,
}

#[allow(clippy::len_without_is_empty)]
impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Result<Self, PolygonError> {
        if vertices.len() < MIN_POLYGON_VERTICES {
            return Err(PolygonError::TooFewVertices(vertices.len()));
        }
        if let Some(index) = vertices.iter().position(|p| !p.is_finite()) {
            return Err(PolygonError::NonFinite { index });
        }
        Ok(Self { vertices })
    }

    /// Caller guarantees the invariants (used by the validity engine after its own checks).
    #[inline]
    pub(crate) fn from_checked(vertices: Vec<Point>) -> Self {
        debug_assert!(vertices.len() >= MIN_POLYGON_VERTICES);
        debug_assert!(vertices.iter().all(Point::is_finite));
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    #[inline]
    pub fn first(&self) -> Point {
        self.vertices[0]
    }

    /// Closed edges `(v[i], v[i+1 mod n])`, including the edge back to the first vertex.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Shoelace signed area; positive for counterclockwise vertex order.
    pub fn signed_area(&self) -> f64 {
        let twice: f64 = self.edges().map(|(p, q)| p.x * q.y - p.y * q.x).sum();
        twice / 2.0
    }

    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = PolygonError;
    fn try_from(vertices: Vec<Point>) -> Result<Self, Self::Error> {
        Polygon::new(vertices)
    }
}

impl From<Polygon> for Vec<Point> {
    fn from(p: Polygon) -> Self {
        p.vertices
    }
}

/// Triangle as returned by the engine; vertex order is not normalized.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    #[inline]
    pub const fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }
    /// Half the orientation determinant; sign follows the engine's vertex order.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        orientation(self.a, self.b, self.c) / 2.0
    }
    /// Strict containment (boundary points are outside).
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        point_in_triangle(self.a, self.b, self.c, p)
    }
    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }
}
