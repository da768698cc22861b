//! Deterministic stand-in engine for tests, benches and demos.

use std::os::raw::c_int;

use crate::geom2::nesting_depths;

use super::codec::{read_input, COORDS_PER_TRIANGLE};
use super::engine::TriangulationEngine;

/// Fans every top-level polygon from its first vertex; nested polygons are skipped.
///
/// Exact only for convex input without holes, which is all the callers need:
/// the output order and count are fully determined by the input stream. Writes
/// what fits in the output buffer and returns the full count, so an undersized
/// buffer shows up as `BridgeError::Overflow` instead of a wild write.
#[derive(Clone, Debug, Default)]
pub struct FanEngine {
    calls: usize,
}

impl FanEngine {
    pub fn new() -> Self {
        Self::default()
    }
    /// Number of times the contract entry point was invoked.
    #[inline]
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl TriangulationEngine for FanEngine {
    fn triangulate(&mut self, polygon_count: c_int, input: &[f64], output: &mut [f64]) -> c_int {
        self.calls += 1;
        let Some(polygons) = read_input(polygon_count.max(0) as usize, input) else {
            return 0;
        };
        let depths = nesting_depths(&polygons);
        let mut written = 0usize;
        for (polygon, _) in polygons.iter().zip(depths).filter(|(_, d)| *d == 0) {
            let v = polygon.vertices();
            for k in 1..v.len() - 1 {
                let slot = written * COORDS_PER_TRIANGLE;
                if let Some(dst) = output.get_mut(slot..slot + COORDS_PER_TRIANGLE) {
                    dst.copy_from_slice(&[v[0].x, v[0].y, v[k].x, v[k].y, v[k + 1].x, v[k + 1].y]);
                }
                written += 1;
            }
        }
        c_int::try_from(written).unwrap_or(c_int::MAX)
    }
}
