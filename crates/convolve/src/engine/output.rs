//! Output types for smoothing operations.
//!
//! ## Purpose
//!
//! This module defines `ConvolutionResult`, which carries the smoothed
//! sequence together with the kernel that produced it.
//!
//! ## Design notes
//!
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `y` has the same length as the source sequence.
//! * `kernel.len() == 2 * half_width + 1`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Result Structure
// ============================================================================

/// Smoothed sequence and the kernel used to produce it.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvolutionResult<T> {
    /// Smoothed values, one per source element.
    pub y: Vec<T>,

    /// Kernel weights applied.
    pub kernel: Vec<T>,

    /// Kernel radius.
    pub half_width: usize,
}

impl<T: Float> ConvolutionResult<T> {
    /// Number of smoothed values.
    #[inline]
    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// Returns `true` if the result holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Returns `true` if every smoothed value is finite.
    pub fn all_finite(&self) -> bool {
        self.y.iter().all(|v| v.is_finite())
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for ConvolutionResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.y.len())?;
        writeln!(f, "  Half-width: {}", self.half_width)?;
        write!(f, "  Kernel: [")?;
        for (i, w) in self.kernel.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.6}", w)?;
        }
        writeln!(f, "]")?;
        writeln!(f)?;

        writeln!(f, "Smoothed Data:")?;
        writeln!(f, "{:>8} {:>12}", "Index", "Y_smooth")?;
        writeln!(f, "  {}", "-".repeat(19))?;
        for (i, y) in self.y.iter().enumerate() {
            writeln!(f, "{:>8} {:>12.5}", i, y)?;
        }

        Ok(())
    }
}
