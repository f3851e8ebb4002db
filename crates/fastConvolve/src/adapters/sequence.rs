//! Sequence adapter with parallel execution.
//!
//! ## Purpose
//!
//! This module provides the parallel counterpart of `convolve`'s smoothing
//! processor. It installs the multi-threaded interior pass into the base
//! builder and, when a thread count is given, runs on a dedicated pool.
//!
//! ## Design notes
//!
//! * **Delegation**: All validation and kernel construction happen in `convolve`.
//! * **Parallel-First**: Parallel execution is on unless `.parallel(false)`.
//! * **Bounded pool**: `.threads(n)` builds a `rayon` pool of exactly `n` workers.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Parallel and sequential processors produce bit-identical output.
//!
//! ## Non-goals
//!
//! * This adapter does not change the convolution semantics.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::interior_pass_parallel;
#[cfg(feature = "cpu")]
use rayon::{ThreadPool, ThreadPoolBuilder};

// External dependencies
use num_traits::Float;

// Export dependencies from convolve crate
use convolve::internals::adapters::sequence::SmoothingProcessor;
use convolve::internals::adapters::table::{Table, TableKernels};
use convolve::internals::api::SmootherBuilder;
use convolve::internals::engine::output::ConvolutionResult;
use convolve::internals::math::kernel::{Kernel, KernelShape};
use convolve::internals::primitives::errors::ConvolveError;

// Internal dependencies
use crate::adapters::table::smooth_table_with_kernels;
use crate::input::ConvolveInput;

// ============================================================================
// Extended Builder
// ============================================================================

/// Builder for a smoothing processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelSmootherBuilder<T: Float> {
    /// Base builder from the convolve crate
    pub base: SmootherBuilder<T>,
}

impl<T: Float + Send + Sync> Default for ParallelSmootherBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Send + Sync> ParallelSmootherBuilder<T> {
    /// Create a new builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from convolve `SmootherBuilder`
    /// * parallel: true (fastConvolve extension)
    pub fn new() -> Self {
        Self {
            base: SmootherBuilder::new().parallel(true),
        }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    /// Run on a dedicated pool of `threads` workers.
    pub fn threads(mut self, threads: usize) -> Self {
        self.base = self.base.threads(threads);
        self
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the kernel radius.
    pub fn half_width(mut self, k_half: usize) -> Self {
        self.base = self.base.half_width(k_half);
        self
    }

    /// Set the Gaussian spread relative to the half-width.
    pub fn sigma(mut self, sigma: T) -> Self {
        self.base = self.base.sigma(sigma);
        self
    }

    /// Set the kernel profile.
    pub fn kernel_shape(mut self, shape: KernelShape) -> Self {
        self.base = self.base.kernel_shape(shape);
        self
    }

    /// Use explicit kernel weights.
    pub fn kernel(mut self, weights: Vec<T>) -> Self {
        self.base = self.base.kernel(weights);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the parallel processor.
    pub fn build(self) -> Result<ParallelSmoothingProcessor<T>, ConvolveError> {
        let mut base = self.base;
        let parallel = base.parallel.unwrap_or(true);
        let threads = base.threads;

        #[cfg(feature = "cpu")]
        {
            if parallel {
                base = base.custom_interior_pass(interior_pass_parallel);
            } else {
                base.custom_interior_pass = None;
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            // Fallback to sequential if cpu feature is disabled
            base.custom_interior_pass = None;
        }

        let processor = base.build()?;

        #[cfg(feature = "cpu")]
        let pool = match threads {
            Some(n) if parallel => Some(
                ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| ConvolveError::InvalidInput(e.to_string()))?,
            ),
            _ => None,
        };
        #[cfg(not(feature = "cpu"))]
        let _ = threads;

        Ok(ParallelSmoothingProcessor {
            base: processor,
            parallel,
            #[cfg(feature = "cpu")]
            pool,
        })
    }
}

// ============================================================================
// Extended Processor
// ============================================================================

/// Smoothing processor with parallel support.
#[derive(Debug)]
pub struct ParallelSmoothingProcessor<T> {
    base: SmoothingProcessor<T>,
    parallel: bool,
    #[cfg(feature = "cpu")]
    pool: Option<ThreadPool>,
}

impl<T: Float + Send + Sync> ParallelSmoothingProcessor<T> {
    /// The kernel applied by this processor.
    #[inline]
    pub fn kernel(&self) -> &Kernel<T> {
        self.base.kernel()
    }

    /// Kernel radius.
    #[inline]
    pub fn half_width(&self) -> usize {
        self.base.half_width()
    }

    /// Returns `true` if the processor runs in parallel.
    #[inline]
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Smooth `src` into a new result.
    pub fn smooth<I>(&self, src: &I) -> Result<ConvolutionResult<T>, ConvolveError>
    where
        I: ConvolveInput<T> + ?Sized,
    {
        let src = src.as_convolve_slice()?;
        self.install(|| self.base.smooth(src))
    }

    /// Smooth `src` into `dest`, resizing it and reusing its storage.
    pub fn smooth_into<I>(&self, dest: &mut Vec<T>, src: &I) -> Result<(), ConvolveError>
    where
        I: ConvolveInput<T> + ?Sized,
    {
        let src = src.as_convolve_slice()?;
        self.install(|| self.base.smooth_into(dest, src))
    }

    /// Smooth every float column of `table`, columns in parallel.
    pub fn smooth_table(&self, table: &Table) -> Result<Table, ConvolveError> {
        if !self.parallel {
            return self.base.smooth_table(table);
        }
        let kernels = TableKernels::from_kernel(self.base.kernel());
        self.install(|| smooth_table_with_kernels(table, &kernels))
    }

    /// Run `op` on the dedicated pool, if one was configured.
    fn install<R, OP>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        #[cfg(feature = "cpu")]
        {
            if let Some(pool) = &self.pool {
                return pool.install(op);
            }
        }
        op()
    }
}
