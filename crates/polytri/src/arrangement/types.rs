//! State and outcome types for the validity engine.

use thiserror::Error;

use crate::geom2::Point;

/// Whether the arrangement still accepts edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Constructing,
    /// Read-only until `reset`.
    Triangulated,
}

/// Progress of the polygon under construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawState {
    Idle,
    Drawing { vertices: usize },
}

/// Rule that caused an edit to be ignored.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum Rejection {
    #[error("arrangement is triangulated; reset before editing")]
    Triangulated,
    #[error("vertex {0:?} has a non-finite coordinate")]
    NonFinite(Point),
    #[error("vertex coincides with the first vertex; use close instead")]
    ReservedForClose,
    #[error("vertex lies on the last edge")]
    OnLastEdge,
    #[error("vertex lies on an edge of completed polygon {polygon}")]
    OnCompletedEdge { polygon: usize },
    #[error("new edge meets edge {edge} of the polygon under construction")]
    CrossesOwnEdge { edge: usize },
    #[error("new edge meets an edge of completed polygon {polygon}")]
    CrossesCompleted { polygon: usize },
    #[error("polygon under construction has {0} vertices; closing needs at least 3")]
    TooFewVertices(usize),
    #[error("closing edge overlaps an adjacent edge")]
    DegenerateClose,
}

/// Result of an interactive edit. Ignored edits leave the arrangement untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edit {
    Applied,
    Ignored(Rejection),
}

impl Edit {
    #[inline]
    pub fn is_applied(&self) -> bool {
        matches!(self, Edit::Applied)
    }
    #[inline]
    pub fn rejection(&self) -> Option<Rejection> {
        match *self {
            Edit::Applied => None,
            Edit::Ignored(r) => Some(r),
        }
    }
}

/// What a `triangulate` request did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriangulateOutcome {
    /// No completed polygons; the engine was not called.
    NothingToTriangulate,
    /// A result already exists; the engine was not called again.
    AlreadyTriangulated,
    Triangulated { triangles: usize },
}
