//! Planar geometry: value types and exact-sign predicates.
//!
//! Purpose
//! - Provide `Point`, `Polygon`, `Triangle` and the predicates used by every
//!   validity check and interaction query (`orientation`, `segments_intersect`,
//!   `point_on_segment`, `point_in_triangle`).
//! - Keep everything pure and allocation-free except the nesting queries.
//!
//! Numerics
//! - Plain `f64` products and differences, no epsilons. Signs are exact for
//!   integer-valued inputs of moderate size; beyond that, round-off decides.
//!
//! Code cross-refs: `arrangement::PolygonValidityEngine`, `bridge::MarshallingBridge` (hole count for sizing)

mod predicates;
pub mod rand;
mod types;

pub use predicates::{
    hole_count, nesting_depths, orientation, point_in_polygon, point_in_triangle,
    point_on_segment, segments_intersect,
};
pub use types::{Point, Polygon, PolygonError, Triangle, MIN_POLYGON_VERTICES};
