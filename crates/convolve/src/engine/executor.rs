//! Execution engine for convolution.
//!
//! ## Purpose
//!
//! This module provides the executor that runs one convolution end to end:
//! validation, destination sizing, the interior pass and the two boundary
//! passes. It is the single place where the order of these steps is defined.
//!
//! ## Design notes
//!
//! * **Validate first**: All preconditions are checked before `dest` is touched.
//! * **Pluggable interior**: The interior pass can be replaced through an
//!   [`InteriorPassFn`] hook; `fastConvolve` installs a multi-threaded one.
//! * **Sequential boundaries**: At most `2 * k_half` outputs, always sequential.
//! * **Stateless**: The executor holds only the hook, so one instance can be
//!   shared across threads working on disjoint buffers.
//!
//! ## Invariants
//!
//! * On success, `dest.len() == src.len()` and every element was written.
//! * On failure, `dest` is unchanged.
//!
//! ## Non-goals
//!
//! * This module does not build kernels.
//! * This module does not manage threads itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::convolution::{interior_pass, left_boundary_pass, right_boundary_pass};
use crate::engine::validator::Validator;
use crate::primitives::buffer::prepare_output;
use crate::primitives::errors::ConvolveError;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for a custom interior pass.
#[doc(hidden)]
pub type InteriorPassFn<T> = fn(
    &[T],     // src
    &[T],     // kernel
    &mut [T], // interior slice of dest, starting at index k_half
);

// ============================================================================
// Executor
// ============================================================================

/// Orchestrates validation and the convolution passes.
#[derive(Debug, Clone, Copy)]
pub struct ConvolveExecutor<T> {
    /// Replacement for the sequential interior pass.
    pub interior_pass: Option<InteriorPassFn<T>>,
}

impl<T: Float> Default for ConvolveExecutor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ConvolveExecutor<T> {
    /// Create an executor with the sequential interior pass.
    pub fn new() -> Self {
        Self {
            interior_pass: None,
        }
    }

    /// Set a custom interior pass (only for dev).
    #[doc(hidden)]
    pub fn custom_interior_pass(mut self, pass: Option<InteriorPassFn<T>>) -> Self {
        self.interior_pass = pass;
        self
    }

    /// Convolve `src` with `kernel` into `dest`, resizing it to `src.len()`.
    ///
    /// Existing storage in `dest` is reused.
    pub fn run(&self, dest: &mut Vec<T>, src: &[T], kernel: &[T]) -> Result<(), ConvolveError> {
        Validator::validate_inputs(src, kernel)?;
        prepare_output(dest, src.len());
        self.execute(dest, src, kernel);
        Ok(())
    }

    /// Convolve `src` with `kernel` into a destination of exactly `src.len()` elements.
    pub fn run_slice(&self, dest: &mut [T], src: &[T], kernel: &[T]) -> Result<(), ConvolveError> {
        Validator::validate_inputs(src, kernel)?;
        Validator::validate_output_len(dest.len(), src.len())?;
        self.execute(dest, src, kernel);
        Ok(())
    }

    /// Run all passes on validated inputs.
    fn execute(&self, dest: &mut [T], src: &[T], kernel: &[T]) {
        let n = src.len();
        let k_half = kernel.len() / 2;

        left_boundary_pass(src, kernel, dest);

        let interior = &mut dest[k_half..n - k_half];
        match self.interior_pass {
            Some(pass) => pass(src, kernel, interior),
            None => interior_pass(src, kernel, interior),
        }

        right_boundary_pass(src, kernel, dest);
    }
}

// ============================================================================
// Convenience Functions
// ============================================================================

/// Convolve `src` with an odd-length kernel into `dest`.
///
/// `dest` is resized to `src.len()`, reusing its storage. Interior outputs are
/// plain weighted sums; outputs within `k_half` of either end use only the
/// in-range taps, renormalized to sum to 1.
///
/// # Errors
///
/// * [`ConvolveError::EmptyKernel`] / [`ConvolveError::EmptyInput`]
/// * [`ConvolveError::EvenKernel`]
/// * [`ConvolveError::KernelTooLong`]
///
/// `dest` is not modified when an error is returned.
pub fn convolve<T: Float>(dest: &mut Vec<T>, src: &[T], kernel: &[T]) -> Result<(), ConvolveError> {
    ConvolveExecutor::new().run(dest, src, kernel)
}

/// Like [`convolve`], but writes into a slice that must already have `src.len()` elements.
pub fn convolve_slice<T: Float>(
    dest: &mut [T],
    src: &[T],
    kernel: &[T],
) -> Result<(), ConvolveError> {
    ConvolveExecutor::new().run_slice(dest, src, kernel)
}
