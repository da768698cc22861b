//! Polygon arrangement under interactive construction.
//!
//! Purpose
//! - Accept or ignore each edit (add vertex, close, reset) so that the
//!   completed polygons stay simple and pairwise non-crossing; nesting is the
//!   only way two polygons relate, and it expresses holes.
//! - Hand the completed set to the bridge once, then stay read-only until reset.
//!
//! Edits never fail loudly: an edit that breaks a rule returns
//! `Edit::Ignored(rejection)` and leaves the arrangement unchanged.
//!
//! Code cross-refs: `geom2::{segments_intersect, point_on_segment}`, `bridge::MarshallingBridge`

mod engine;
mod types;

pub use engine::PolygonValidityEngine;
pub use types::{DrawState, Edit, Mode, Rejection, TriangulateOutcome};
