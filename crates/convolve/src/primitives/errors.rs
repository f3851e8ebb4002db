//! Error types for convolution operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while building
//! kernels, convolving sequences, smoothing tables and planning chunked
//! execution.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., kernel vs. source lengths).
//! * **Deferred**: Builder errors are recorded during configuration and reported by `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Size preconditions**: Empty kernel or source, even kernel, source shorter than kernel.
//! 2. **Parameter validation**: Non-positive sigma, zero worker threads.
//! 3. **Custom kernels**: Negative or non-finite weights, zero total weight.
//!
//! ## Invariants
//!
//! * Every variant is raised before any write to a destination buffer.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for convolution operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvolveError {
    /// The kernel has no weights.
    EmptyKernel,

    /// The source sequence has no elements.
    EmptyInput,

    /// The kernel must have odd length so it is centered on one element.
    EvenKernel {
        /// Length of the rejected kernel.
        len: usize,
    },

    /// The source sequence must be at least as long as the kernel.
    KernelTooLong {
        /// Length of the kernel.
        kernel_len: usize,
        /// Length of the source sequence.
        src_len: usize,
    },

    /// Kernel spread must be strictly positive and finite.
    InvalidSigma(f64),

    /// Chunked execution needs at least one worker thread.
    InvalidThreadCount(usize),

    /// A user-supplied kernel has unusable weights.
    InvalidKernel(String),

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ConvolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyKernel => write!(f, "Kernel is empty"),
            Self::EmptyInput => write!(f, "Source sequence is empty"),
            Self::EvenKernel { len } => {
                write!(f, "Kernel length {len} is even (must be odd-sized, symmetric about center)")
            }
            Self::KernelTooLong {
                kernel_len,
                src_len,
            } => {
                write!(
                    f,
                    "Source length {src_len} is shorter than kernel length {kernel_len}"
                )
            }
            Self::InvalidSigma(sigma) => {
                write!(f, "Invalid sigma: {sigma} (must be > 0 and finite)")
            }
            Self::InvalidThreadCount(n) => {
                write!(f, "Invalid thread count: {n} (must be at least 1)")
            }
            Self::InvalidKernel(msg) => write!(f, "Invalid kernel: {msg}"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ConvolveError {}
