//! Sequence adapter for kernel smoothing.
//!
//! ## Purpose
//!
//! This module provides the processor returned by the builder. It owns one
//! kernel, built once, and applies it to any number of sequences or tables.
//!
//! ## Design notes
//!
//! * **Build once**: The kernel is constructed and validated at `build()` time.
//! * **Shareable**: `smooth*` methods take `&self`; a processor can be used from
//!   several threads on disjoint buffers.
//! * **Buffer reuse**: `smooth_into` keeps the caller's allocation.
//!
//! ## Invariants
//!
//! * Output length always equals input length.
//! * Identical inputs produce bit-identical outputs.
//!
//! ## Non-goals
//!
//! * This adapter does not spawn threads (see `fastConvolve`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::table::{Table, TableKernels};
use crate::engine::executor::ConvolveExecutor;
use crate::engine::output::ConvolutionResult;
use crate::math::kernel::Kernel;
use crate::primitives::errors::ConvolveError;

// ============================================================================
// Processor
// ============================================================================

/// Smoothing processor holding a built kernel.
#[derive(Debug, Clone)]
pub struct SmoothingProcessor<T> {
    kernel: Kernel<T>,
    executor: ConvolveExecutor<T>,
}

impl<T: Float> SmoothingProcessor<T> {
    /// Create a processor from a kernel and executor.
    pub fn new(kernel: Kernel<T>, executor: ConvolveExecutor<T>) -> Self {
        Self { kernel, executor }
    }

    /// The kernel applied by this processor.
    #[inline]
    pub fn kernel(&self) -> &Kernel<T> {
        &self.kernel
    }

    /// Kernel radius.
    #[inline]
    pub fn half_width(&self) -> usize {
        self.kernel.half_width()
    }

    /// Smooth `src` into a new result.
    pub fn smooth(&self, src: &[T]) -> Result<ConvolutionResult<T>, ConvolveError> {
        let mut y = Vec::with_capacity(src.len());
        self.executor.run(&mut y, src, &self.kernel)?;

        Ok(ConvolutionResult {
            y,
            kernel: self.kernel.as_slice().to_vec(),
            half_width: self.kernel.half_width(),
        })
    }

    /// Smooth `src` into `dest`, resizing it and reusing its storage.
    pub fn smooth_into(&self, dest: &mut Vec<T>, src: &[T]) -> Result<(), ConvolveError> {
        self.executor.run(dest, src, &self.kernel)
    }

    /// Smooth every float column of `table` with this processor's kernel.
    ///
    /// The kernel is converted to both `f32` and `f64` so each column is
    /// smoothed in its own width.
    pub fn smooth_table(&self, table: &Table) -> Result<Table, ConvolveError> {
        TableKernels::from_kernel(&self.kernel).smooth_table(table)
    }
}
