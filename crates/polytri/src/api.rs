//! Curated surface for controller code (rendering and input glue live elsewhere).
//!
//! Prefer these re-exports over reaching into submodules; the module layout
//! may move, this list is kept stable within a minor version.

// Geometry and predicates
pub use crate::geom2::{
    hole_count, nesting_depths, orientation, point_in_polygon, point_in_triangle,
    point_on_segment, segments_intersect, Point, Polygon, PolygonError, Triangle,
    MIN_POLYGON_VERTICES,
};
// Deterministic sampling
pub use crate::geom2::rand::{draw_nested_stars, draw_star_polygon, ReplayToken, StarCfg};
// Construction state machine
pub use crate::arrangement::{
    DrawState, Edit, Mode, PolygonValidityEngine, Rejection, TriangulateOutcome,
};
// Engine boundary
#[cfg(feature = "linked-engine")]
pub use crate::bridge::linked_engine;
pub use crate::bridge::{
    call_engine, check_buffers, decode, encode, output_capacity, BridgeError, ExternEngine, FanEngine,
    ForeignBuffer, MarshallingBridge, TriangulateFn, TriangulationEngine,
};
