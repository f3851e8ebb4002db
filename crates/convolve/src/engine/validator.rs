//! Input validation for convolution configuration and data.
//!
//! ## Purpose
//!
//! This module checks the size preconditions of a convolution and the
//! execution parameters collected by the builder.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Ordering**: Emptiness, then parity, then relative length.
//! * **Side-effect free**: Nothing is written before validation passes.
//!
//! ## Invariants
//!
//! * A kernel/source pair that passes `validate_inputs` satisfies
//!   `src.len() >= kernel.len() >= 1` with `kernel.len()` odd.
//!
//! ## Non-goals
//!
//! * This module does not check that kernel weights sum to 1.
//! * This module does not check source values for finiteness; NaN propagates.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// Internal dependencies
use crate::primitives::errors::ConvolveError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for convolution inputs and parameters.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a source sequence against a kernel.
    pub fn validate_inputs<T>(src: &[T], kernel: &[T]) -> Result<(), ConvolveError> {
        // Check 1: Non-empty
        if kernel.is_empty() {
            return Err(ConvolveError::EmptyKernel);
        }
        if src.is_empty() {
            return Err(ConvolveError::EmptyInput);
        }

        // Check 2: Odd kernel, centered on one tap
        if kernel.len() % 2 == 0 {
            return Err(ConvolveError::EvenKernel { len: kernel.len() });
        }

        // Check 3: Kernel fits inside the source
        if src.len() < kernel.len() {
            return Err(ConvolveError::KernelTooLong {
                kernel_len: kernel.len(),
                src_len: src.len(),
            });
        }

        Ok(())
    }

    /// Validate an exact-length destination slice.
    pub fn validate_output_len(dest_len: usize, src_len: usize) -> Result<(), ConvolveError> {
        if dest_len != src_len {
            return Err(ConvolveError::InvalidInput(format!(
                "destination has {} elements, source has {}",
                dest_len, src_len
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the worker count for chunked execution.
    pub fn validate_thread_count(n_threads: usize) -> Result<(), ConvolveError> {
        if n_threads == 0 {
            return Err(ConvolveError::InvalidThreadCount(n_threads));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), ConvolveError> {
        if let Some(param) = duplicate_param {
            return Err(ConvolveError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
