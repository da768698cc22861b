//! Owned `f64` buffers handed across the engine boundary.
//!
//! A `ForeignBuffer` is allocated once at its final size and released when it
//! goes out of scope, so every exit path of a bridge call frees it. Allocation
//! failure is fatal (`handle_alloc_error`).

use std::alloc::{handle_alloc_error, Layout};

/// Fixed-capacity buffer of doubles, exclusively owned for one engine call.
#[derive(Debug)]
pub struct ForeignBuffer {
    data: Vec<f64>,
}

impl ForeignBuffer {
    /// Empty buffer able to hold `capacity` doubles without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut data = Vec::new();
        if data.try_reserve_exact(capacity).is_err() {
            match Layout::array::<f64>(capacity) {
                Ok(layout) => handle_alloc_error(layout),
                Err(_) => panic!("foreign buffer of {capacity} doubles exceeds the address space"),
            }
        }
        tracing::trace!(capacity, "foreign buffer acquired");
        Self { data }
    }

    /// Buffer of `len` zeros (engine output target).
    pub fn zeroed(len: usize) -> Self {
        let mut buf = Self::with_capacity(len);
        buf.data.resize(len, 0.0);
        buf
    }

    /// Append one value. Pushing past the reserved capacity is a sizing bug.
    #[inline]
    pub fn push(&mut self, value: f64) {
        debug_assert!(
            self.data.len() < self.data.capacity(),
            "foreign buffer grew past its reserved size"
        );
        self.data.push(value);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }
}

impl Drop for ForeignBuffer {
    fn drop(&mut self) {
        tracing::trace!(len = self.data.len(), "foreign buffer released");
    }
}
