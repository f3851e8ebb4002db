//! Input abstractions for convolution smoothing.
//!
//! ## Purpose
//!
//! This module lets the `smooth` methods accept slices, vectors and 1-D
//! `ndarray` arrays through a single trait.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Provides direct slice access to the underlying buffer.
//! * **Fail-fast validation**: Non-contiguous arrays are rejected up front.
//!
//! ## Invariants
//!
//! * Returned slices cover every element of the input container, in order.
//!
//! ## Non-goals
//!
//! * This module does not copy or reorder data.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};
use num_traits::Float;

// Export dependencies from convolve crate
use convolve::internals::primitives::errors::ConvolveError;

/// Trait for types that can be used as a convolution source.
pub trait ConvolveInput<T: Float> {
    /// Convert the input to a contiguous slice.
    fn as_convolve_slice(&self) -> Result<&[T], ConvolveError>;
}

impl<T: Float> ConvolveInput<T> for [T] {
    fn as_convolve_slice(&self) -> Result<&[T], ConvolveError> {
        Ok(self)
    }
}

impl<T: Float> ConvolveInput<T> for Vec<T> {
    fn as_convolve_slice(&self) -> Result<&[T], ConvolveError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, S> ConvolveInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_convolve_slice(&self) -> Result<&[T], ConvolveError> {
        self.as_slice().ok_or_else(|| {
            ConvolveError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
