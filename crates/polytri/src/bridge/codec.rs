//! Wire format shared with the triangulation engine.
//!
//! Input: for each polygon, its vertices as `x, y` pairs followed by one NaN
//! sentinel. Length `2·ΣN_i + P`; the engine scans positionally, so there is no
//! fixed stride.
//!
//! Output: 6 doubles per triangle (three `x, y` pairs), contiguous from offset 0.

use crate::geom2::{Point, Polygon, Triangle};

use super::buffer::ForeignBuffer;

/// Doubles per output triangle (3 vertices × 2 coordinates).
pub const COORDS_PER_TRIANGLE: usize = 6;
/// End-of-polygon marker in the input stream.
pub const POLYGON_SENTINEL: f64 = f64::NAN;

/// Number of doubles `encode` produces.
pub fn encoded_len(polygons: &[Polygon]) -> usize {
    polygons.iter().map(|p| 2 * p.len() + 1).sum()
}

/// Flatten polygons into the engine's input stream.
pub fn encode(polygons: &[Polygon]) -> ForeignBuffer {
    let mut buf = ForeignBuffer::with_capacity(encoded_len(polygons));
    for polygon in polygons {
        for v in polygon.vertices() {
            buf.push(v.x);
            buf.push(v.y);
        }
        buf.push(POLYGON_SENTINEL);
    }
    buf
}

/// Engine-side reading of an input stream: `polygon_count` rings of `x, y`
/// pairs, each closed by a sentinel, and nothing after the last sentinel.
///
/// `None` if the stream does not match that layout or a ring is not a valid
/// `Polygon`; an engine handed such a stream would read past its end.
pub fn read_input(polygon_count: usize, input: &[f64]) -> Option<Vec<Polygon>> {
    let mut it = input.iter().copied();
    let mut polygons = Vec::with_capacity(polygon_count);
    for _ in 0..polygon_count {
        let mut ring = Vec::new();
        loop {
            let x = it.next()?;
            if x.is_nan() {
                break;
            }
            let y = it.next().filter(|y| !y.is_nan())?;
            ring.push(Point::new(x, y));
        }
        polygons.push(Polygon::new(ring).ok()?);
    }
    it.next().is_none().then_some(polygons)
}

/// Upper bound on triangles for `vertices` total vertices and `holes` hole polygons: `N − 2 + 2·H`.
#[inline]
pub fn max_triangles(vertices: usize, holes: usize) -> usize {
    (vertices + 2 * holes).saturating_sub(2)
}

/// Required output length in doubles: `6·(N − 2 + 2·H)`.
///
/// This is the only sizing rule; every output buffer is allocated from it.
#[inline]
pub fn output_capacity(vertices: usize, holes: usize) -> usize {
    COORDS_PER_TRIANGLE * max_triangles(vertices, holes)
}

/// Read `count` triangles in engine order. `count == 0` yields an empty list.
pub fn decode(output: &[f64], count: usize) -> Vec<Triangle> {
    debug_assert!(
        count * COORDS_PER_TRIANGLE <= output.len(),
        "decoding {count} triangles from {} doubles",
        output.len()
    );
    output
        .chunks_exact(COORDS_PER_TRIANGLE)
        .take(count)
        .map(|c| {
            Triangle::new(
                Point::new(c[0], c[1]),
                Point::new(c[2], c[3]),
                Point::new(c[4], c[5]),
            )
        })
        .collect()
}
