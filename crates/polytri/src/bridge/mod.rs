//! Marshalling between polygon arrangements and the triangulation engine.
//!
//! Purpose
//! - Encode completed polygons into the engine's flat NaN-delimited stream,
//!   call the engine once, decode its fixed-stride triangle output.
//! - Own both foreign buffers for exactly one call; they are dropped on every
//!   exit path, including errors.
//!
//! Sizing
//! - Output buffers hold `6·(N − 2 + 2·H)` doubles (`codec::output_capacity`),
//!   `N` total vertices, `H` polygons at odd nesting depth.
//!
//! Code cross-refs: `geom2::hole_count`, `arrangement::PolygonValidityEngine::triangulate`

mod buffer;
mod codec;
mod engine;
mod stub;

pub use buffer::ForeignBuffer;
pub use codec::{
    decode, encode, encoded_len, max_triangles, output_capacity, read_input, COORDS_PER_TRIANGLE,
    POLYGON_SENTINEL,
};
#[cfg(feature = "linked-engine")]
pub use engine::linked_engine;
pub use engine::{
    call_engine, check_buffers, BridgeError, ExternEngine, TriangulateFn, TriangulationEngine,
};
pub use stub::FanEngine;

use crate::geom2::{hole_count, Polygon, Triangle};

/// Encode → call → decode around one `TriangulationEngine`.
#[derive(Debug)]
pub struct MarshallingBridge<E> {
    engine: E,
}

impl<E: TriangulationEngine> MarshallingBridge<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }
    pub fn engine(&self) -> &E {
        &self.engine
    }
    pub fn into_inner(self) -> E {
        self.engine
    }

    /// Triangulate `polygons` (assumed simple and pairwise non-crossing).
    ///
    /// An empty slice returns an empty list without calling the engine. Zero
    /// triangles from the engine is a valid result.
    pub fn triangulate(&mut self, polygons: &[Polygon]) -> Result<Vec<Triangle>, BridgeError> {
        if polygons.is_empty() {
            return Ok(Vec::new());
        }
        let vertices: usize = polygons.iter().map(Polygon::len).sum();
        let holes = hole_count(polygons);
        let input = encode(polygons);
        let mut output = ForeignBuffer::zeroed(output_capacity(vertices, holes));
        let count = call_engine(&mut self.engine, polygons.len(), &input, &mut output)?;
        let triangles = decode(output.as_slice(), count);
        tracing::info!(
            polygons = polygons.len(),
            vertices,
            holes,
            triangles = triangles.len(),
            "triangulated"
        );
        Ok(triangles)
    }
}

#[cfg(test)]
mod tests;
