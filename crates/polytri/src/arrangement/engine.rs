//! Incremental validity enforcement for polygon arrangements.

use crate::bridge::{BridgeError, MarshallingBridge, TriangulationEngine};
use crate::geom2::{
    point_in_triangle, point_on_segment, segments_intersect, Point, Polygon, Triangle,
    MIN_POLYGON_VERTICES,
};

use super::types::{DrawState, Edit, Mode, Rejection, TriangulateOutcome};

/// Owns the polygon under construction, the completed polygons and the
/// triangulation result, and accepts only edits that keep every completed
/// polygon simple and all boundaries pairwise disjoint.
///
/// Invariants (while `Constructing`):
/// - No edge of the polygon under construction meets a non-adjacent edge of
///   itself or any edge of a completed polygon.
/// - Completed polygons are simple and their boundaries do not touch.
#[derive(Clone, Debug)]
pub struct PolygonValidityEngine {
    current: Vec<Point>,
    completed: Vec<Polygon>,
    mode: Mode,
    triangles: Vec<Triangle>,
}

impl Default for PolygonValidityEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PolygonValidityEngine {
    pub fn new() -> Self {
        Self {
            current: Vec::new(),
            completed: Vec::new(),
            mode: Mode::Constructing,
            triangles: Vec::new(),
        }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }
    #[inline]
    pub fn draw_state(&self) -> DrawState {
        match self.current.len() {
            0 => DrawState::Idle,
            vertices => DrawState::Drawing { vertices },
        }
    }
    /// Vertices of the polygon under construction (open chain).
    #[inline]
    pub fn current(&self) -> &[Point] {
        &self.current
    }
    #[inline]
    pub fn completed(&self) -> &[Polygon] {
        &self.completed
    }
    /// Triangles of the last triangulation; `None` while constructing.
    #[inline]
    pub fn triangles(&self) -> Option<&[Triangle]> {
        match self.mode {
            Mode::Triangulated => Some(&self.triangles),
            Mode::Constructing => None,
        }
    }
    /// Nothing drawn yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty() && self.completed.is_empty()
    }

    fn ensure_constructing(&self) -> Result<(), Rejection> {
        match self.mode {
            Mode::Constructing => Ok(()),
            Mode::Triangulated => Err(Rejection::Triangulated),
        }
    }

    /// First completed polygon with an edge meeting segment `[a, b]`.
    fn crossed_polygon(&self, a: Point, b: Point) -> Option<usize> {
        self.completed
            .iter()
            .position(|poly| poly.edges().any(|(p, q)| segments_intersect(p, q, a, b)))
    }

    /// Evaluate the vertex rules without mutating (preview of the next edge).
    pub fn check_vertex(&self, v: Point) -> Result<(), Rejection> {
        self.ensure_constructing()?;
        if !v.is_finite() {
            return Err(Rejection::NonFinite(v));
        }
        let n = self.current.len();
        if n > 0 && v == self.current[0] {
            return Err(Rejection::ReservedForClose);
        }
        if n >= 2 && point_on_segment(self.current[n - 2], self.current[n - 1], v) {
            return Err(Rejection::OnLastEdge);
        }
        if let Some(polygon) = self
            .completed
            .iter()
            .position(|poly| poly.edges().any(|(p, q)| point_on_segment(p, q, v)))
        {
            return Err(Rejection::OnCompletedEdge { polygon });
        }
        let Some(&last) = self.current.last() else {
            return Ok(());
        };
        // edges ending at `last` share an endpoint with the new edge and are skipped
        if let Some(edge) = (0..n.saturating_sub(2))
            .find(|&i| segments_intersect(self.current[i], self.current[i + 1], v, last))
        {
            return Err(Rejection::CrossesOwnEdge { edge });
        }
        if let Some(polygon) = self.crossed_polygon(last, v) {
            return Err(Rejection::CrossesCompleted { polygon });
        }
        Ok(())
    }

    /// Append `v` to the polygon under construction if every rule allows it.
    pub fn try_add_vertex(&mut self, v: Point) -> Edit {
        match self.check_vertex(v) {
            Ok(()) => {
                self.current.push(v);
                tracing::debug!(x = v.x, y = v.y, vertices = self.current.len(), "vertex added");
                Edit::Applied
            }
            Err(rejection) => {
                tracing::debug!(x = v.x, y = v.y, %rejection, "vertex ignored");
                Edit::Ignored(rejection)
            }
        }
    }

    /// Evaluate the closing rules without mutating.
    pub fn check_close(&self) -> Result<(), Rejection> {
        self.ensure_constructing()?;
        let cur = &self.current;
        let n = cur.len();
        if n < MIN_POLYGON_VERTICES {
            return Err(Rejection::TooFewVertices(n));
        }
        let (first, last) = (cur[0], cur[n - 1]);
        if point_on_segment(first, last, cur[1]) || point_on_segment(first, last, cur[n - 2]) {
            return Err(Rejection::DegenerateClose);
        }
        // the closing edge is adjacent to edges 0 and n-2
        if let Some(edge) =
            (1..n - 2).find(|&i| segments_intersect(cur[i], cur[i + 1], first, last))
        {
            return Err(Rejection::CrossesOwnEdge { edge });
        }
        if let Some(polygon) = self.crossed_polygon(first, last) {
            return Err(Rejection::CrossesCompleted { polygon });
        }
        Ok(())
    }

    /// Close the polygon under construction and move it to the completed set.
    pub fn try_close_polygon(&mut self) -> Edit {
        match self.check_close() {
            Ok(()) => {
                let vertices = std::mem::take(&mut self.current);
                tracing::debug!(
                    vertices = vertices.len(),
                    polygons = self.completed.len() + 1,
                    "polygon closed"
                );
                self.completed.push(Polygon::from_checked(vertices));
                Edit::Applied
            }
            Err(rejection) => {
                tracing::debug!(%rejection, "close ignored");
                Edit::Ignored(rejection)
            }
        }
    }

    /// Discard everything and return to an empty, editable arrangement.
    pub fn reset(&mut self) {
        tracing::debug!(
            polygons = self.completed.len(),
            pending = self.current.len(),
            "arrangement reset"
        );
        *self = Self::new();
    }

    /// Send the completed polygons through `bridge` and freeze the arrangement.
    ///
    /// No-op without completed polygons or when already triangulated. An
    /// unfinished polygon under construction is kept but not sent. On error the
    /// arrangement stays editable and nothing is stored.
    pub fn triangulate<E: TriangulationEngine>(
        &mut self,
        bridge: &mut MarshallingBridge<E>,
    ) -> Result<TriangulateOutcome, BridgeError> {
        if self.mode == Mode::Triangulated {
            return Ok(TriangulateOutcome::AlreadyTriangulated);
        }
        if self.completed.is_empty() {
            return Ok(TriangulateOutcome::NothingToTriangulate);
        }
        self.triangles = bridge.triangulate(&self.completed)?;
        self.mode = Mode::Triangulated;
        Ok(TriangulateOutcome::Triangulated {
            triangles: self.triangles.len(),
        })
    }

    /// Index of the triangle strictly containing `p` (hover highlight).
    pub fn triangle_at(&self, p: Point) -> Option<usize> {
        self.triangles()?
            .iter()
            .position(|t| point_in_triangle(t.a, t.b, t.c, p))
    }
}
