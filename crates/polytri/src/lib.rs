//! Interactive polygon-arrangement construction with exact validity checks,
//! plus the marshalling bridge to an external triangulation engine.
//!
//! Layers
//! - `geom2`: points, polygons, triangles and sign predicates.
//! - `arrangement`: the edit state machine that keeps polygons simple and
//!   pairwise non-crossing (nesting expresses holes).
//! - `bridge`: NaN-delimited input encoding, output sizing, the engine call
//!   contract, fixed-stride decoding.
//!
//! Logging goes through `tracing`; the crate never installs a subscriber.

pub mod api;
pub mod arrangement;
pub mod bridge;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::arrangement::{DrawState, Edit, Mode, PolygonValidityEngine, Rejection};
    pub use crate::bridge::{MarshallingBridge, TriangulationEngine};
    pub use crate::geom2::{
        orientation, point_in_triangle, point_on_segment, segments_intersect, Point, Polygon,
        Triangle,
    };
}
