//! Destination buffer management for convolution output.
//!
//! ## Purpose
//!
//! Convolution writes into a caller-owned destination. This module sizes that
//! destination to the source length while keeping its allocation, so repeated
//! calls with the same buffer do not reallocate.
//!
//! ## Invariants
//!
//! * After `prepare_output`, `dest.len() == len`.
//! * Capacity is never shrunk.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Zero;

/// Resize `dest` to exactly `len` elements, reusing its storage.
///
/// Existing elements are left as they are; the caller overwrites every slot.
#[inline]
pub fn prepare_output<T: Zero + Clone>(dest: &mut Vec<T>, len: usize) {
    if dest.len() != len {
        dest.resize(len, T::zero());
    }
}
