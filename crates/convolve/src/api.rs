//! High-level API for kernel smoothing.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent builder
//! that collects kernel parameters and produces a [`SmoothingProcessor`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SmootherBuilder`] via `Smoother::new()`.
//! 2. Chain configuration methods (`.half_width()`, `.sigma()`, etc.).
//! 3. Call `.build()` to validate and construct the kernel.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{ConvolveExecutor, InteriorPassFn};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::adapters::sequence::SmoothingProcessor;
pub use crate::adapters::table::{Column, ColumnData, Table, TableKernels, smooth_table};
pub use crate::engine::executor::{convolve, convolve_slice};
pub use crate::engine::output::ConvolutionResult;
pub use crate::math::kernel::{Kernel, KernelShape};
pub use crate::primitives::chunk::{ChunkPlan, Chunks, run_chunks};
pub use crate::primitives::errors::ConvolveError;

/// Default kernel radius.
const DEFAULT_HALF_WIDTH: usize = 2;

/// Default Gaussian spread relative to the half-width.
const DEFAULT_SIGMA: f64 = 0.5;

/// Fluent builder for configuring smoothing kernels.
#[derive(Debug, Clone)]
pub struct SmootherBuilder<T> {
    /// Kernel radius (default: 2).
    pub half_width: Option<usize>,

    /// Gaussian spread relative to the half-width (default: 0.5).
    pub sigma: Option<T>,

    /// Kernel profile (default: Gaussian).
    pub kernel_shape: Option<KernelShape>,

    /// Explicit kernel weights, overriding shape, half-width and sigma.
    pub kernel: Option<Vec<T>>,

    // ======================================
    // DEV
    // ======================================
    /// Custom interior pass function.
    #[doc(hidden)]
    pub custom_interior_pass: Option<InteriorPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Worker thread hint.
    #[doc(hidden)]
    pub threads: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for SmootherBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SmootherBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            half_width: None,
            sigma: None,
            kernel_shape: None,
            kernel: None,
            custom_interior_pass: None,
            parallel: None,
            threads: None,
            duplicate_param: None,
        }
    }

    /// Set the kernel radius; the kernel will have `2 * k_half + 1` taps.
    pub fn half_width(mut self, k_half: usize) -> Self {
        if self.half_width.is_some() {
            self.duplicate_param = Some("half_width");
        }
        self.half_width = Some(k_half);
        self
    }

    /// Set the Gaussian spread relative to the half-width.
    pub fn sigma(mut self, sigma: T) -> Self {
        if self.sigma.is_some() {
            self.duplicate_param = Some("sigma");
        }
        self.sigma = Some(sigma);
        self
    }

    /// Set the kernel profile.
    pub fn kernel_shape(mut self, shape: KernelShape) -> Self {
        if self.kernel_shape.is_some() {
            self.duplicate_param = Some("kernel_shape");
        }
        self.kernel_shape = Some(shape);
        self
    }

    /// Use explicit kernel weights (normalized at build time).
    pub fn kernel(mut self, weights: Vec<T>) -> Self {
        if self.kernel.is_some() {
            self.duplicate_param = Some("kernel");
        }
        self.kernel = Some(weights);
        self
    }

    // ==========================
    // Development Options
    // ==========================

    /// Set a custom interior pass function for execution (only for dev)
    #[doc(hidden)]
    pub fn custom_interior_pass(mut self, pass: InteriorPassFn<T>) -> Self {
        self.custom_interior_pass = Some(pass);
        self
    }

    /// Set the parallel execution hint (only for dev)
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Set the worker thread hint (only for dev)
    #[doc(hidden)]
    pub fn threads(mut self, threads: usize) -> Self {
        if self.threads.is_some() {
            self.duplicate_param = Some("threads");
        }
        self.threads = Some(threads);
        self
    }

    // ==========================
    // Build
    // ==========================

    /// Validate the configuration and build the kernel.
    pub fn build(self) -> Result<SmoothingProcessor<T>, ConvolveError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        if let Some(threads) = self.threads {
            Validator::validate_thread_count(threads)?;
        }

        let kernel = match self.kernel {
            Some(weights) => Kernel::from_weights(weights)?,
            None => {
                let sigma = match self.sigma {
                    Some(sigma) => sigma,
                    None => T::from(DEFAULT_SIGMA).unwrap_or_else(T::one),
                };
                Kernel::build(
                    self.kernel_shape.unwrap_or_default(),
                    self.half_width.unwrap_or(DEFAULT_HALF_WIDTH),
                    sigma,
                )?
            }
        };

        let executor = ConvolveExecutor::new().custom_interior_pass(self.custom_interior_pass);
        Ok(SmoothingProcessor::new(kernel, executor))
    }
}
