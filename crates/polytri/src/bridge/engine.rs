//! The triangulation engine contract and the foreign-call adapters.
//!
//! Contract (one synchronous call):
//! `triangulate(polygon_count, input, output) -> triangle_count`
//! - `input`: encoded polygons (see `codec`), read only.
//! - `output`: caller-allocated, sized by `codec::output_capacity`; the engine
//!   writes `triangle_count` triangles from offset 0 and takes no ownership.
//! - Nesting (solid vs hole) is derived by the engine from containment.

use std::os::raw::c_int;

use thiserror::Error;

use crate::geom2::{hole_count, Polygon};

use super::buffer::ForeignBuffer;
use super::codec::{output_capacity, read_input, COORDS_PER_TRIANGLE};

/// Failures reported at the engine boundary.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BridgeError {
    #[error("{0} polygons do not fit the engine's polygon count argument")]
    TooManyPolygons(usize),
    #[error("input stream does not hold {polygon_count} well-formed polygons")]
    MalformedInput { polygon_count: usize },
    #[error("output buffer holds {given} doubles, the input needs {required}")]
    UndersizedOutput { required: usize, given: usize },
    #[error("engine returned a negative triangle count ({0})")]
    NegativeCount(c_int),
    #[error("engine reported {count} triangles but the output buffer holds {capacity}")]
    Overflow { count: usize, capacity: usize },
}

/// Check a call's buffers against the contract before anything crosses the boundary.
///
/// The input must decode to exactly `polygon_count` polygons, and the output
/// must hold `output_capacity(N, H)` doubles for them. Returns the required length.
pub fn check_buffers(
    polygon_count: usize,
    input: &[f64],
    output: &[f64],
) -> Result<usize, BridgeError> {
    let polygons =
        read_input(polygon_count, input).ok_or(BridgeError::MalformedInput { polygon_count })?;
    let vertices: usize = polygons.iter().map(Polygon::len).sum();
    let required = output_capacity(vertices, hole_count(&polygons));
    if output.len() < required {
        return Err(BridgeError::UndersizedOutput {
            required,
            given: output.len(),
        });
    }
    Ok(required)
}

/// Something that honors the triangulation call contract.
///
/// Implementations must not write past `output.len()`; returning a count larger
/// than the buffer holds is reported as `BridgeError::Overflow`.
pub trait TriangulationEngine {
    fn triangulate(&mut self, polygon_count: c_int, input: &[f64], output: &mut [f64]) -> c_int;
}

impl<E: TriangulationEngine + ?Sized> TriangulationEngine for &mut E {
    #[inline]
    fn triangulate(&mut self, polygon_count: c_int, input: &[f64], output: &mut [f64]) -> c_int {
        (**self).triangulate(polygon_count, input, output)
    }
}

/// C ABI of the native entry point.
pub type TriangulateFn =
    unsafe extern "C" fn(num_polygons: c_int, data: *const f64, result: *mut f64) -> c_int;

/// Engine reached through a raw C function pointer.
#[derive(Clone, Copy, Debug)]
pub struct ExternEngine {
    func: TriangulateFn,
}

impl ExternEngine {
    /// # Safety
    /// `func` must follow the contract above: read only the encoded input, and
    /// write at most `6·(N − 2 + 2·H)` doubles to the output pointer.
    pub unsafe fn new(func: TriangulateFn) -> Self {
        Self { func }
    }
}

impl TriangulationEngine for ExternEngine {
    /// Returns -1 without calling `func` when the buffers break the contract.
    fn triangulate(&mut self, polygon_count: c_int, input: &[f64], output: &mut [f64]) -> c_int {
        let Ok(count) = usize::try_from(polygon_count) else {
            return -1;
        };
        if let Err(err) = check_buffers(count, input, output) {
            tracing::warn!(%err, "refusing foreign call");
            return -1;
        }
        // SAFETY: both slices outlive the call, the input was decoded in full and
        // the output holds `output_capacity(N, H)` doubles, which `new` obliges
        // `func` to stay within.
        unsafe { (self.func)(polygon_count, input.as_ptr(), output.as_mut_ptr()) }
    }
}

#[cfg(feature = "linked-engine")]
extern "C" {
    #[link_name = "triangulate"]
    fn triangulate_native(num_polygons: c_int, data: *const f64, result: *mut f64) -> c_int;
}

/// Engine bound to the `triangulate` symbol linked into the final binary.
#[cfg(feature = "linked-engine")]
pub fn linked_engine() -> ExternEngine {
    // SAFETY: the linked symbol is the reference engine, which honors the contract.
    unsafe { ExternEngine::new(triangulate_native) }
}

/// Single engine call over owned buffers; returns the validated triangle count.
///
/// Buffers that break the contract are refused before the engine runs.
pub fn call_engine<E: TriangulationEngine + ?Sized>(
    engine: &mut E,
    polygon_count: usize,
    input: &ForeignBuffer,
    output: &mut ForeignBuffer,
) -> Result<usize, BridgeError> {
    let n = c_int::try_from(polygon_count).map_err(|_| BridgeError::TooManyPolygons(polygon_count))?;
    check_buffers(polygon_count, input.as_slice(), output.as_slice())?;
    let raw = engine.triangulate(n, input.as_slice(), output.as_mut_slice());
    let count = usize::try_from(raw).map_err(|_| {
        tracing::warn!(raw, "engine returned a negative triangle count");
        BridgeError::NegativeCount(raw)
    })?;
    let capacity = output.len() / COORDS_PER_TRIANGLE;
    if count > capacity {
        tracing::warn!(count, capacity, "engine overran the output buffer");
        return Err(BridgeError::Overflow { count, capacity });
    }
    Ok(count)
}
